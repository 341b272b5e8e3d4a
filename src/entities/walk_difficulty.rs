//! Walk difficulty record and payload

use crate::core::entity::{Entity, Payload};
use crate::core::validation::validators::not_blank;
use crate::core::validation::{Validate, Violations};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A difficulty grade walks can be classified with (e.g. "Easy")
#[derive(Debug, Clone, PartialEq)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub code: String,
}

impl WalkDifficulty {
    /// A not-yet-persisted difficulty
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            id: Uuid::nil(),
            code: code.into(),
        }
    }
}

impl Entity for WalkDifficulty {
    fn resource_name() -> &'static str {
        "walk-difficulties"
    }

    fn resource_name_singular() -> &'static str {
        "walk-difficulty"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }

    fn overwrite(&mut self, values: Self) {
        self.code = values.code;
    }
}

/// Create/update payload for a walk difficulty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkDifficultyPayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
}

impl Validate for WalkDifficultyPayload {
    fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations.check(not_blank("code", &self.code));
        violations
    }
}

impl Payload for WalkDifficultyPayload {
    type Record = WalkDifficulty;

    fn into_record(self) -> WalkDifficulty {
        WalkDifficulty::new(self.code)
    }
}
