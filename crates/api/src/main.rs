use std::net::SocketAddr;
use std::sync::Arc;

use condmon_api::app::build_router;
use condmon_api::config::ServerConfig;
use condmon_api::state::AppState;
use condmon_core::thresholds::ThresholdTable;
use condmon_store::ReadingStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "condmon_api=debug,condmon_store=debug,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        data_file = %config.data_file.display(),
        reporting_mode = config.reporting_mode.as_str(),
        window_days = config.report_window_days,
        "Loaded server configuration"
    );

    // The header row goes in before the first request so an empty plant
    // still reads as a valid file.
    let store = ReadingStore::new(&config.data_file);
    let created = store
        .ensure_initialized()
        .expect("Failed to initialize reading file");
    tracing::info!(created, path = %store.path().display(), "Reading store ready");

    let thresholds = Arc::new(ThresholdTable::plant());
    tracing::info!(entries = thresholds.len(), "Threshold table loaded");

    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );

    let app = build_router(AppState {
        store,
        config: Arc::new(config),
        thresholds,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Condition monitoring API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Server stopped");
}

/// Resolves on Ctrl-C, or on SIGTERM where the platform has it.
async fn shutdown_signal() {
    let interrupt = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
