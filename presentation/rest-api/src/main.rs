use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config, messages_config};
use setup::{dependency_injection::DependencyContainer, server::Server, test_data};

/// REST API Entry Point
///
/// - config/: environment-driven settings (server, CORS, item store, messages)
/// - setup/: dependency wiring, startup data and the HTTP server
/// - api/: item and health routes with their DTOs
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 3. Load configuration
    let config = AppConfig::from_env();
    let messages = messages_config::load_messages(config.messages_path.as_deref())?;

    // 4. Create the item store
    let repository = database_config::init_item_repository(&config.store).await?;
    if config.seed_test_data {
        test_data::seed_test_data(repository.as_ref()).await?;
    }

    // 5. Wire dependencies
    let container = DependencyContainer::new(repository, messages);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
