//! Movies service entry point
//!
//! Reads configuration from the environment, picks a store backend, and
//! serves the HTTP routes until interrupted.

use anyhow::Result;
use clap::Parser;
use movies_service::{config::Config, http::HttpServer, store};
use tokio::sync::broadcast;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "movies-service")]
#[command(about = "Sample movie records over HTTP, backed by a document store")]
#[command(version)]
struct Cli {
    /// Listen port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database name (overrides MONGO_DB_NAME)
    #[arg(long)]
    database: Option<String>,

    /// Collection name (overrides MONGO_COLLECTION_NAME)
    #[arg(long)]
    collection: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Fail fast: a broken configuration prevents startup entirely.
    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(database) = cli.database {
        config.database = database;
    }
    if let Some(collection) = cli.collection {
        config.collection = collection;
    }
    config.validate()?;

    info!(
        "Using database '{}', collection '{}'",
        config.database, config.collection
    );

    let store = store::connect(&config);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            let _ = shutdown_tx.send(());
        }
    });

    HttpServer::new(config, store).run(shutdown_rx).await
}
