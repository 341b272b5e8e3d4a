//! Shared test harness for storage backend testing
//!
//! Provides record builders for the three entity kinds and a helper that
//! stores the region and difficulty a walk needs to reference.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod entity_store_tests;

use nzwalks::core::store::EntityStore;
use nzwalks::entities::{Region, Walk, WalkDifficulty};
use uuid::Uuid;

/// An unsaved region with plausible values
pub fn region_record(code: &str) -> Region {
    Region {
        id: Uuid::nil(),
        code: code.to_string(),
        name: format!("{} region", code),
        area: 1234.5,
        lat: -41.29,
        long: 174.78,
        population: 250_000,
    }
}

pub fn difficulty_record(code: &str) -> WalkDifficulty {
    WalkDifficulty::new(code)
}

pub fn walk_record(name: &str, region_id: Uuid, walk_difficulty_id: Uuid) -> Walk {
    Walk::new(name, 7.5, region_id, walk_difficulty_id)
}

/// Store one region and one difficulty for walks to reference
pub async fn create_references<S>(store: &S) -> (Region, WalkDifficulty)
where
    S: EntityStore<Region> + EntityStore<WalkDifficulty> + ?Sized,
{
    let region = EntityStore::<Region>::create(store, region_record("WGN"))
        .await
        .expect("region create");
    let difficulty = EntityStore::<WalkDifficulty>::create(store, difficulty_record("Easy"))
        .await
        .expect("difficulty create");
    (region, difficulty)
}
