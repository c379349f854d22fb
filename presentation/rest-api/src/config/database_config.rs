use std::sync::Arc;

use business::domain::item::repository::ItemRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::item::memory::ItemRepositoryMemory;
use persistence::item::repository::ItemRepositoryPostgres;

use super::app_config::non_empty_var;

/// Which item store backs the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    Memory,
    Postgres {
        database_url: String,
        migrations_path: String,
    },
}

impl StoreConfig {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string; the in-memory store is used when unset
    /// - MIGRATIONS_PATH: sqlx migrations directory (default: "./migrations")
    pub fn from_env() -> Self {
        match non_empty_var("DATABASE_URL") {
            Some(database_url) => StoreConfig::Postgres {
                database_url,
                migrations_path: non_empty_var("MIGRATIONS_PATH")
                    .unwrap_or_else(|| "./migrations".to_string()),
            },
            None => StoreConfig::Memory,
        }
    }
}

/// Builds the item repository selected by the configuration
///
/// # Errors
/// Returns error if the database connection or migrations fail
pub async fn init_item_repository(config: &StoreConfig) -> anyhow::Result<Arc<dyn ItemRepository>> {
    match config {
        StoreConfig::Memory => {
            tracing::info!("using in-memory item store");
            Ok(Arc::new(ItemRepositoryMemory::new()))
        }
        StoreConfig::Postgres {
            database_url,
            migrations_path,
        } => {
            let pool = create_postgres_pool(&DatabaseConfig::new(database_url.clone())).await?;
            run_migrations(&pool, migrations_path).await?;
            tracing::info!("using PostgreSQL item store");
            Ok(Arc::new(ItemRepositoryPostgres::new(pool)))
        }
    }
}
