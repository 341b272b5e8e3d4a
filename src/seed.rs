//! Startup seeding of reference data

use crate::core::error::WriteError;
use crate::core::pipeline::WritePipeline;
use crate::core::store::EntityStore;
use crate::entities::{WalkDifficulty, WalkDifficultyPayload};

/// Insert one walk difficulty per code, unless the store already has any.
///
/// Codes go through the write pipeline like any client write. Returns the
/// number of records created.
pub async fn seed_walk_difficulties<S>(store: &S, codes: &[String]) -> Result<usize, WriteError>
where
    S: EntityStore<WalkDifficulty> + ?Sized + Sync,
{
    if !store.list_all().await?.is_empty() {
        tracing::debug!("walk difficulties present, skipping seed");
        return Ok(0);
    }

    let pipeline = WritePipeline::new(store);
    for code in codes {
        pipeline
            .create(Some(WalkDifficultyPayload { code: code.clone() }))
            .await?;
    }

    tracing::info!(count = codes.len(), "seeded walk difficulties");
    Ok(codes.len())
}
