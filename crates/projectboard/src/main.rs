mod app;
mod config;
mod error;
mod handlers;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use projectboard_core::storage::ProjectRepository;

use crate::{app::create_app, config::Config, state::AppState};

/// ProjectBoard - Submit and browse project links
#[derive(Parser, Debug)]
#[command(name = "projectboard")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Host address to bind the server to
    #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000", env = "PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "projectboard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let repository = init_repository(&config).await;
    let state = AppState::new(repository);

    // Build the application router
    let app = create_app(state, &config.allowed_origin);

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", cli.host, cli.port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Construct the storage backend selected at compile time.
///
/// DynamoDB when the `dynamodb` feature is enabled, otherwise the in-memory
/// backend.
#[cfg(feature = "dynamodb")]
async fn init_repository(config: &Config) -> Arc<dyn ProjectRepository> {
    tracing::info!(
        table = %config.table,
        pk_attr = %config.key_schema.pk_attr,
        sk_attr = %config.key_schema.sk_attr,
        "using DynamoDB storage"
    );

    Arc::new(storage::DynamoDbRepository::from_env(config).await)
}

#[cfg(not(feature = "dynamodb"))]
async fn init_repository(_config: &Config) -> Arc<dyn ProjectRepository> {
    tracing::warn!("no persistent backend enabled, using in-memory storage");

    Arc::new(storage::InMemoryRepository::new())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
