//! Reference validation: identifiers carried by a payload must resolve to
//! existing records before the write is accepted.

use super::{Violation, Violations};
use crate::core::entity::Entity;
use crate::core::error::StorageError;
use crate::core::store::EntityStore;
use crate::entities::{Region, RegionPayload, WalkDifficulty, WalkDifficultyPayload, WalkPayload};
use async_trait::async_trait;
use uuid::Uuid;

/// Cross-reference checks of a payload against the store `S`.
///
/// The default implementation has no references to check. Lookup failures
/// are store failures, not violations.
#[async_trait]
pub trait ReferenceCheck<S: ?Sized + Sync>: Sync {
    async fn check_references(&self, _store: &S) -> Result<Violations, StorageError> {
        Ok(Violations::new())
    }
}

impl<S: ?Sized + Sync> ReferenceCheck<S> for RegionPayload {}

impl<S: ?Sized + Sync> ReferenceCheck<S> for WalkDifficultyPayload {}

#[async_trait]
impl<S> ReferenceCheck<S> for WalkPayload
where
    S: EntityStore<Region> + EntityStore<WalkDifficulty> + ?Sized + Sync,
{
    async fn check_references(&self, store: &S) -> Result<Violations, StorageError> {
        let mut violations = Violations::new();

        violations.check(resolve::<Region, S>(store, "regionId", &self.region_id).await?);
        violations.check(
            resolve::<WalkDifficulty, S>(store, "walkDifficultyId", &self.walk_difficulty_id)
                .await?,
        );

        Ok(violations)
    }
}

/// Look up `id` in the `T` store, producing a violation keyed to `field`
/// when nothing matches.
pub async fn resolve<T, S>(
    store: &S,
    field: &str,
    id: &Uuid,
) -> Result<Result<(), Violation>, StorageError>
where
    T: Entity,
    S: EntityStore<T> + ?Sized,
{
    if id.is_nil() {
        return Ok(Err(Violation::new(field, format!("{} is required", field))));
    }

    Ok(match store.get(id).await? {
        Some(_) => Ok(()),
        None => Err(Violation::new(
            field,
            format!(
                "{} is invalid: no {} with id '{}'",
                field,
                T::resource_name_singular(),
                id
            ),
        )),
    })
}
