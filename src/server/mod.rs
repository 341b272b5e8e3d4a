//! Server module for building the HTTP API
//!
//! This module provides a `ServerBuilder` that registers:
//! - CRUD routes for regions, walk difficulties and walks
//! - Health routes for liveness checks

pub mod builder;
pub mod dto;
pub mod entity_registry;
pub mod error;
pub mod extract;
pub mod handlers;

pub use builder::ServerBuilder;
pub use dto::{RegionDto, Resource, WalkDifficultyDto, WalkDto};
pub use entity_registry::{EntityDescriptor, EntityRegistry, ResourceDescriptor};
pub use error::{ApiError, ErrorResponse, RequestError};
pub use extract::{EntityId, JsonPayload};
pub use handlers::AppState;
