//! ServerBuilder for fluent API to build HTTP servers

use super::entity_registry::EntityRegistry;
use super::handlers::AppState;
use crate::core::store::WalksRepository;
use crate::entities::{Region, Walk, WalkDifficulty};
use anyhow::{Context, Result};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Name reported by the health endpoints
pub const SERVICE_NAME: &str = "nzwalks";

/// Builder for creating the HTTP server with all resource routes registered
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_store(InMemoryStore::new())
///     .with_cors(true)
///     .build()?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn WalksRepository>>,
    entity_registry: EntityRegistry,
    cors: bool,
}

impl ServerBuilder {
    /// Create a new ServerBuilder serving regions, walk difficulties and walks
    pub fn new() -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register_resource::<Region>();
        entity_registry.register_resource::<WalkDifficulty>();
        entity_registry.register_resource::<Walk>();

        Self {
            store: None,
            entity_registry,
            cors: false,
        }
    }

    /// Set the store (required)
    pub fn with_store(self, store: impl WalksRepository) -> Self {
        self.with_shared_store(Arc::new(store))
    }

    /// Set a store that is already shared elsewhere
    pub fn with_shared_store(mut self, store: Arc<dyn WalksRepository>) -> Self {
        self.store = Some(store);
        self
    }

    /// Answer cross-origin requests from any origin
    pub fn with_cors(mut self, enabled: bool) -> Self {
        self.cors = enabled;
        self
    }

    /// Build the final router
    ///
    /// This generates:
    /// - CRUD routes for all registered entities
    /// - Health routes (`/health`, `/healthz`)
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .context("A store is required. Call .with_store()")?;

        tracing::info!(
            backend = store.backend_name(),
            entities = ?self.entity_registry.entity_types(),
            "building router"
        );

        let entity_routes = self
            .entity_registry
            .build_routes()
            .with_state(AppState::new(store));

        let app = health_routes()
            .merge(entity_routes)
            .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));
        Ok(if self.cors {
            app.layer(CorsLayer::permissive())
        } else {
            app
        })
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// Resolve when the process is asked to stop.
///
/// A signal handler that cannot be installed is logged and never fires, so
/// the server keeps running rather than stopping immediately.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
