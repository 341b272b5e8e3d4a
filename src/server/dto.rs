//! Wire representations of records and the binding of each entity kind to
//! its payload and DTO

use crate::core::entity::{Entity, Payload};
use crate::core::store::WalksRepository;
use crate::core::validation::ReferenceCheck;
use crate::entities::{
    Region, RegionPayload, Walk, WalkDifficulty, WalkDifficultyPayload, WalkPayload,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity kind exposed over HTTP
pub trait Resource: Entity {
    /// What a record looks like on the wire
    type Dto: Serialize + From<Self> + Send;

    /// What create and update requests carry
    type Payload: Payload<Record = Self>
        + ReferenceCheck<dyn WalksRepository>
        + DeserializeOwned
        + Send;
}

impl Resource for Region {
    type Dto = RegionDto;
    type Payload = RegionPayload;
}

impl Resource for WalkDifficulty {
    type Dto = WalkDifficultyDto;
    type Payload = WalkDifficultyPayload;
}

impl Resource for Walk {
    type Dto = WalkDto;
    type Payload = WalkPayload;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub code: String,
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.id,
            code: difficulty.code,
        }
    }
}

/// A walk with its region and difficulty embedded when they resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walk_difficulty: Option<WalkDifficultyDto>,
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
            region: walk.region.map(RegionDto::from),
            walk_difficulty: walk.walk_difficulty.map(WalkDifficultyDto::from),
        }
    }
}
