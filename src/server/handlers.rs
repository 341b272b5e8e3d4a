//! HTTP handlers for entity CRUD
//!
//! The handlers are generic over the [`Resource`] they serve, so the three
//! entity kinds share one implementation. Writes go through the
//! [`WritePipeline`]; reads and deletes go straight to the store.

use super::dto::Resource;
use super::error::ApiError;
use super::extract::{EntityId, JsonPayload};
use crate::core::pipeline::WritePipeline;
use crate::core::store::{EntityStore, WalksRepository};
use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WalksRepository>,
}

impl AppState {
    pub fn new(store: Arc<dyn WalksRepository>) -> Self {
        Self { store }
    }
}

/// `GET /{resource}`
pub async fn list<T>(State(state): State<AppState>) -> Result<Json<Vec<T::Dto>>, ApiError>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    let records = EntityStore::<T>::list_all(state.store.as_ref()).await?;
    Ok(Json(records.into_iter().map(T::Dto::from).collect()))
}

/// `GET /{resource}/{id}`
pub async fn get<T>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<T::Dto>, ApiError>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    EntityStore::<T>::get(state.store.as_ref(), &id)
        .await?
        .map(|record| Json(T::Dto::from(record)))
        .ok_or_else(|| ApiError::not_found(T::resource_name_singular(), id))
}

/// `POST /{resource}`: 201 with a `Location` header pointing at the new record
pub async fn create<T>(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload<T::Payload>,
) -> Result<impl IntoResponse, ApiError>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    let record = WritePipeline::new(state.store.as_ref())
        .create(payload)
        .await?;
    let location = format!("/{}/{}", T::resource_name(), record.id());

    tracing::info!(entity_type = T::resource_name_singular(), id = %record.id(), "created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(T::Dto::from(record)),
    ))
}

/// `PUT /{resource}/{id}`
pub async fn update<T>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    JsonPayload(payload): JsonPayload<T::Payload>,
) -> Result<Json<T::Dto>, ApiError>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    WritePipeline::new(state.store.as_ref())
        .update(&id, payload)
        .await?
        .map(|record| Json(T::Dto::from(record)))
        .ok_or_else(|| ApiError::not_found(T::resource_name_singular(), id))
}

/// `DELETE /{resource}/{id}`: responds with the removed record
pub async fn delete<T>(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> Result<Json<T::Dto>, ApiError>
where
    T: Resource,
    dyn WalksRepository: EntityStore<T>,
{
    let removed = EntityStore::<T>::delete(state.store.as_ref(), &id)
        .await?
        .ok_or_else(|| ApiError::not_found(T::resource_name_singular(), id))?;

    tracing::info!(entity_type = T::resource_name_singular(), %id, "deleted");
    Ok(Json(T::Dto::from(removed)))
}
