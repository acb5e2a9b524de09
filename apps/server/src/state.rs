//! Shared application state

use crate::{
    config::{Config, DatabaseBackend},
    db::{CourseStore, InMemoryCourseStore, PostgresCourseStore},
    services::CourseService,
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Persist courses in Postgres.
    Postgres,
    /// Keep courses in process memory (useful for tests).
    InMemory,
}

impl From<DatabaseBackend> for StoreKind {
    fn from(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::Postgres => StoreKind::Postgres,
            DatabaseBackend::Memory => StoreKind::InMemory,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    pub run_migrations: bool,
    pub store: StoreKind,
}

impl AppStateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            run_migrations: config.database.run_migrations,
            store: config.database.backend.into(),
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub course_service: Arc<CourseService>,
}

impl AppState {
    /// Initialize the application state from configuration
    pub async fn new(config: Config) -> Result<Self> {
        let options = AppStateOptions::from_config(&config);
        Self::new_with_options(config, options).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!(store = ?options.store, "Initializing application state...");

        let config_arc = Arc::new(config);

        let store: Arc<dyn CourseStore> = match options.store {
            StoreKind::Postgres => {
                let pool = create_db_pool(config_arc.as_ref()).await?;
                let store = PostgresCourseStore::new(pool);

                if options.run_migrations {
                    tracing::info!("Running database migrations...");
                    store.migrate().await?;
                }

                Arc::new(store)
            }
            StoreKind::InMemory => {
                tracing::warn!("Using in-memory course store; data is lost on restart");
                Arc::new(InMemoryCourseStore::new())
            }
        };

        let course_service = Arc::new(CourseService::new(store));

        tracing::info!("Application state initialized successfully");

        Ok(Self {
            config: config_arc,
            course_service,
        })
    }
}

async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .connect(&config.database.url)
        .await
        .map_err(crate::Error::Database)?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
