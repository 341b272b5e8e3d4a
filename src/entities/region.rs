//! Region record and payload

use crate::core::entity::{Entity, Payload};
use crate::core::validation::validators::{non_negative, not_blank, positive};
use crate::core::validation::{Validate, Violations};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A geographic region of New Zealand
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl Entity for Region {
    fn resource_name() -> &'static str {
        "regions"
    }

    fn resource_name_singular() -> &'static str {
        "region"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }

    fn overwrite(&mut self, values: Self) {
        self.code = values.code;
        self.name = values.name;
        self.area = values.area;
        self.lat = values.lat;
        self.long = values.long;
        self.population = values.population;
    }
}

/// Create/update payload for a region
///
/// Missing or `null` fields fall back to their defaults so they surface as
/// violations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionPayload {
    #[serde(deserialize_with = "super::null_as_default")]
    pub code: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub area: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub lat: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub long: f64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub population: i64,
}

// Latitude and longitude carry no range constraint.
impl Validate for RegionPayload {
    fn validate(&self) -> Violations {
        let mut violations = Violations::new();
        violations.check(not_blank("code", &self.code));
        violations.check(not_blank("name", &self.name));
        violations.check(positive("area", self.area));
        violations.check(non_negative("population", self.population));
        violations
    }
}

impl Payload for RegionPayload {
    type Record = Region;

    fn into_record(self) -> Region {
        Region {
            id: Uuid::nil(),
            code: self.code,
            name: self.name,
            area: self.area,
            lat: self.lat,
            long: self.long,
            population: self.population,
        }
    }
}
