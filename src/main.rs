// todo-list - a to-do list you can reach from any browser
//
// This is the main entry point. Loads config, opens the store, serves HTTP.

use anyhow::Context;
use std::sync::Arc;
use todo_list_lib::{
    server::{build_router, AppState},
    Config, Database,
};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A .env file is optional, the environment wins either way
    dotenvy::dotenv().ok();

    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.server.log_filter).unwrap_or_else(|_| {
            EnvFilter::new(todo_list_lib::config::DEFAULT_LOG_FILTER)
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        database = %config.database.path.display(),
        host = %config.server.host,
        port = config.server.port,
        "Configuration loaded"
    );

    // Schema gets created here on first run
    let db = Database::with_options(&config.database.path, config.database.max_connections)
        .await
        .with_context(|| format!("opening database {}", config.database.path.display()))?;
    let db = Arc::new(db);

    let stats = db.stats().await.context("reading database stats")?;
    info!(
        total = stats.total_todos,
        completed = stats.completed_todos,
        "Database ready"
    );

    let app = build_router(AppState::new(Arc::clone(&db)));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    db.close().await;
    info!("Server stopped");

    Ok(())
}

// Wait for Ctrl+C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
