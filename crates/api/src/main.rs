//! API server entry point.

use api::config::Config;
use catalog_store::{CatalogStore, InMemoryCatalogStore, PostgresCatalogStore};
use metrics_exporter_prometheus::PrometheusHandle;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use webflow::WebflowClient;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Waits for a shutdown signal (SIGINT or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        }
    }
}

/// Builds the router around `store` and runs it until shutdown.
async fn serve<S>(
    config: &Config,
    store: S,
    external: WebflowClient,
    metrics_handle: PrometheusHandle,
) where
    S: CatalogStore + 'static,
{
    let state = api::create_state(store, external);
    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}

#[tokio::main]
async fn main() {
    // 1. Load .env, if present
    dotenvy::dotenv().ok();

    // 2. Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // 3. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 4. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("failed to install Prometheus recorder");

    // 5. Build the external catalog client and probe it in the background
    let external = WebflowClient::new(config.webflow.clone()).expect("invalid Webflow credentials");
    let probe = external.clone();
    tokio::spawn(async move {
        if let Err(e) = webflow::check_connection(&probe).await {
            tracing::warn!(error = %e, "external catalog connection check failed");
        }
    });

    // 6. Pick the catalog store and start serving
    match config.database_url.as_deref() {
        Some(url) => {
            let store = PostgresCatalogStore::connect(url, MAX_DB_CONNECTIONS)
                .await
                .expect("failed to connect to database");
            store.run_migrations().await.expect("migrations failed");
            tracing::info!("using PostgreSQL catalog store");
            serve(&config, store, external, metrics_handle).await;
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory catalog store");
            serve(&config, InMemoryCatalogStore::new(), external, metrics_handle).await;
        }
    }
}
