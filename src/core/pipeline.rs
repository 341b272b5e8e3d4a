//! Write pipeline: field validation, then reference validation, then the store
//!
//! ```text
//! Received ──► FieldValidated ──► ReferenceValidated ──► Persisted
//!     │               │                   │
//!     └───────────────┴───────────────────┴──► Rejected (no mutation)
//! ```
//!
//! Every rule that can run is evaluated before a rejection is reported, so the
//! caller always sees the full violation set. An absent payload stops at the
//! first stage because there is nothing to check references for.

use crate::core::entity::{Entity, Payload};
use crate::core::error::WriteError;
use crate::core::store::EntityStore;
use crate::core::validation::{ReferenceCheck, validate_payload};
use uuid::Uuid;

/// Validating front of a store for create and update requests
pub struct WritePipeline<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: ?Sized + Sync> WritePipeline<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Run field and reference validation, handing back the admitted payload
    pub async fn admit<P>(&self, payload: Option<P>) -> Result<P, WriteError>
    where
        P: Payload + ReferenceCheck<S>,
    {
        let entity_type = <P::Record as Entity>::resource_name_singular();
        let mut violations = validate_payload(payload.as_ref());

        let Some(payload) = payload else {
            tracing::warn!(entity_type, "rejected write without payload");
            return Err(WriteError::Rejected(violations));
        };

        tracing::debug!(
            entity_type,
            field_violations = violations.len(),
            "field validation done"
        );

        violations.merge(payload.check_references(self.store).await?);

        if violations.is_empty() {
            Ok(payload)
        } else {
            tracing::warn!(entity_type, %violations, "rejected write");
            Err(WriteError::Rejected(violations))
        }
    }

    /// Validate `payload` and persist it as a new record
    pub async fn create<P>(&self, payload: Option<P>) -> Result<P::Record, WriteError>
    where
        P: Payload + ReferenceCheck<S>,
        S: EntityStore<P::Record>,
    {
        let payload = self.admit(payload).await?;
        let created = self.store.create(payload.into_record()).await?;

        tracing::debug!(
            entity_type = <P::Record as Entity>::resource_name_singular(),
            id = %created.id(),
            "record created"
        );
        Ok(created)
    }

    /// Validate `payload` and overwrite the record `id` with it.
    ///
    /// `Ok(None)` means the payload was valid but no record matches `id`.
    pub async fn update<P>(
        &self,
        id: &Uuid,
        payload: Option<P>,
    ) -> Result<Option<P::Record>, WriteError>
    where
        P: Payload + ReferenceCheck<S>,
        S: EntityStore<P::Record>,
    {
        let payload = self.admit(payload).await?;
        let updated = self.store.update(id, payload.into_record()).await?;

        tracing::debug!(
            entity_type = <P::Record as Entity>::resource_name_singular(),
            %id,
            found = updated.is_some(),
            "record update"
        );
        Ok(updated)
    }
}
