//! `nzwalks [config.yaml]`: run the API with the given (or default) config

use anyhow::{Context, Result};
use nzwalks::config::{AppConfig, StorageBackend};
use nzwalks::core::store::WalksRepository;
use nzwalks::seed::seed_walk_difficulties;
use nzwalks::server::ServerBuilder;
use nzwalks::storage::InMemoryStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => AppConfig::from_yaml_file(&path)?,
        None => AppConfig::default(),
    };
    config.apply_env_overrides()?;
    config.validate()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .context("Invalid logging.filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = open_store(&config).await?;
    tracing::info!(backend = store.backend_name(), "store ready");

    seed_walk_difficulties(store.as_ref(), &config.seed.walk_difficulties)
        .await
        .context("Failed to seed walk difficulties")?;

    ServerBuilder::new()
        .with_shared_store(store)
        .with_cors(config.server.cors)
        .serve(&config.server.address())
        .await
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn WalksRepository>> {
    match config.storage.backend {
        StorageBackend::InMemory => Ok(Arc::new(InMemoryStore::new())),
        StorageBackend::Postgres => open_postgres(config).await,
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &AppConfig) -> Result<Arc<dyn WalksRepository>> {
    let url = config
        .storage
        .url
        .as_deref()
        .context("storage.url is required by the postgres backend")?;
    let store = nzwalks::storage::PostgresStore::connect(url, config.storage.max_connections)
        .await
        .context("Failed to open PostgreSQL store")?;
    Ok(Arc::new(store))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &AppConfig) -> Result<Arc<dyn WalksRepository>> {
    anyhow::bail!("the postgres backend requires building with the `postgres` feature")
}
