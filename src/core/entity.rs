//! Entity traits defining the core abstraction for stored records

use crate::core::validation::Validate;
use uuid::Uuid;

/// Base trait for every record kind kept by the store.
///
/// All entities have:
/// - id: Unique identifier, assigned by the store on creation
/// - a set of mutable fields that `overwrite` copies during an update
///
/// Records are plain data; the store owns identifier generation.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "regions", "walks")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "region", "walk")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Return this record carrying the given identifier
    fn with_id(self, id: Uuid) -> Self;

    /// Copy every mutable field from `values` into `self`.
    ///
    /// The identifier of `self` is left untouched.
    fn overwrite(&mut self, values: Self);
}

/// A client-supplied, not-yet-validated set of field values.
///
/// The same payload shape is used for create and update requests.
pub trait Payload: Validate + Send + Sync + 'static {
    /// The record kind this payload creates or updates
    type Record: Entity;

    /// Convert into a record with a nil identifier.
    ///
    /// The store replaces the nil id on create and ignores it on update.
    fn into_record(self) -> Self::Record;
}
