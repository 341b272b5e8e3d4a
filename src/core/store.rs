//! Store traits for record persistence

use crate::core::entity::Entity;
use crate::core::error::StorageError;
use crate::entities::{Region, Walk, WalkDifficulty};
use async_trait::async_trait;
use uuid::Uuid;

/// Durable CRUD for one entity kind, keyed by identifier.
///
/// A backend implements this once per entity kind. Every call is atomic for
/// the record it touches; absence is reported as `Ok(None)`, never as an
/// error.
#[async_trait]
pub trait EntityStore<T: Entity>: Send + Sync {
    /// All records currently stored.
    ///
    /// Records with references come back with their referenced data resolved.
    async fn list_all(&self) -> Result<Vec<T>, StorageError>;

    /// The record with identifier `id`, if any
    async fn get(&self, id: &Uuid) -> Result<Option<T>, StorageError>;

    /// Persist `record` under a freshly generated identifier.
    ///
    /// Any identifier already on `record` is discarded; an existing record is
    /// never overwritten.
    async fn create(&self, record: T) -> Result<T, StorageError>;

    /// Overwrite the mutable fields of the record `id` with those of `record`.
    ///
    /// Returns `None` when no record matches; the identifier never changes.
    async fn update(&self, id: &Uuid, record: T) -> Result<Option<T>, StorageError>;

    /// Remove the record `id` and return it, or `None` when no record matches
    async fn delete(&self, id: &Uuid) -> Result<Option<T>, StorageError>;
}

/// A store holding every entity kind of the API.
///
/// This is what the HTTP layer holds as `Arc<dyn WalksRepository>`.
pub trait WalksRepository:
    EntityStore<Region> + EntityStore<WalkDifficulty> + EntityStore<Walk> + 'static
{
    /// Short backend name for logs and health output
    fn backend_name(&self) -> &'static str;
}
