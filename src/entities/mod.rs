//! The three entity kinds managed by the API and their payload shapes

pub mod region;
pub mod walk;
pub mod walk_difficulty;

pub use region::{Region, RegionPayload};
pub use walk::{Walk, WalkPayload};
pub use walk_difficulty::{WalkDifficulty, WalkDifficultyPayload};

use serde::{Deserialize, Deserializer};

/// Deserialize an explicit JSON `null` as the field's default, the same way
/// `#[serde(default)]` treats a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
