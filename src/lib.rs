//! # NZ Walks
//!
//! A CRUD web API for New Zealand walking tracks: regions, walk difficulty
//! grades and the walks that reference them.
//!
//! ## Features
//!
//! - **Validated writes**: every create and update runs field rules, then
//!   reference rules, and reports the full set of violations at once
//! - **Resolved reads**: walks come back with their region and difficulty
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind the
//!   `postgres` feature
//! - **Configuration-Based**: one YAML file plus environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nzwalks::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod seed;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        entity::{Entity, Payload},
        error::{StorageError, WriteError},
        pipeline::WritePipeline,
        store::{EntityStore, WalksRepository},
        validation::{ReferenceCheck, Validate, Violation, Violations, validate_payload},
    };

    // === Entities ===
    pub use crate::entities::{
        Region, RegionPayload, Walk, WalkDifficulty, WalkDifficultyPayload, WalkPayload,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{ApiError, AppState, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use uuid::Uuid;
}
