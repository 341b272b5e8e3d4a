//! Walk record and payload

use super::{Region, WalkDifficulty};
use crate::core::entity::{Entity, Payload};
use crate::core::validation::validators::{not_blank, positive};
use crate::core::validation::{Validate, Violations};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A walking track in a region, graded by a difficulty.
///
/// `region` and `walk_difficulty` hold the referenced records when the store
/// resolved them on read; they are `None` on records that have not been read
/// back from a store, or whose reference no longer resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    pub region: Option<Region>,
    pub walk_difficulty: Option<WalkDifficulty>,
}

impl Walk {
    /// A not-yet-persisted walk
    pub fn new(
        name: impl Into<String>,
        length: f64,
        region_id: Uuid,
        walk_difficulty_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::nil(),
            name: name.into(),
            length,
            region_id,
            walk_difficulty_id,
            region: None,
            walk_difficulty: None,
        }
    }

    /// Drop the resolved navigation data, keeping only the raw references
    pub fn detached(self) -> Self {
        Self {
            region: None,
            walk_difficulty: None,
            ..self
        }
    }
}

impl Entity for Walk {
    fn resource_name() -> &'static str {
        "walks"
    }

    fn resource_name_singular() -> &'static str {
        "walk"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }

    // References may change, so the resolved data is discarded.
    fn overwrite(&mut self, values: Self) {
        self.name = values.name;
        self.length = values.length;
        self.region_id = values.region_id;
        self.walk_difficulty_id = values.walk_difficulty_id;
        self.region = None;
        self.walk_difficulty = None;
    }
}

/// Create/update payload for a walk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkPayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub length: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub region_id: Uuid,
    #[serde(deserialize_with = "super::null_as_default")]
    pub walk_difficulty_id: Uuid,
}

impl Validate for WalkPayload {
    fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations.check(not_blank("name", &self.name));
        violations.check(positive("length", self.length));
        violations
    }
}

impl Payload for WalkPayload {
    type Record = Walk;

    fn into_record(self) -> Walk {
        Walk::new(
            self.name,
            self.length,
            self.region_id,
            self.walk_difficulty_id,
        )
    }
}
