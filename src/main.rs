use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

use library_api::config::AppConfig;
use library_api::database::{BookRepository, DatabaseManager, MemoryBookRepository, PgBookRepository};
use library_api::router;
use library_api::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "library-api", about = "Token-protected CRUD API for books")]
struct Args {
    /// Interface to bind (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides LIBRARY_API_PORT / PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Serve from a process-local store instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DB_* and API_TOKEN
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    if config.uses_default_token() {
        tracing::warn!("API_TOKEN is not set; using the built-in default token");
    }

    let pool: Option<PgPool> = if args.in_memory {
        tracing::info!("Using in-memory book store");
        None
    } else {
        let pool = DatabaseManager::connect(&config.database)
            .await
            .context("Could not connect to database")?;
        Some(pool)
    };

    let books: Arc<dyn BookRepository> = match &pool {
        Some(pool) => Arc::new(PgBookRepository::new(pool.clone())),
        None => Arc::new(MemoryBookRepository::new()),
    };

    let bind_addr = config.bind_address();
    let app = router::app(AppState::new(books, config));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Starting Library API server on {}", bind_addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        DatabaseManager::close(pool).await;
    }
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
