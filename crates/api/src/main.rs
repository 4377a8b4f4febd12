//! API server entry point.

use std::sync::Arc;

use api::AppState;
use api::config::Config;
use domain::{CircleRepository, UserRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use persistence::{PostgresCircleRepository, PostgresUserRepository, run_migrations};
use sqlx::postgres::PgPoolOptions;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Resolves on SIGINT or, on unix, SIGTERM.
///
/// A signal that cannot be registered is logged and never fires, so the
/// server keeps running on the other one.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "cannot listen for SIGINT");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let received = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "draining in-flight requests before exit");
}

/// Binds the listener and serves until a shutdown signal arrives.
async fn serve<U, C>(
    config: &Config,
    state: Arc<AppState<U, C>>,
    metrics_handle: PrometheusHandle,
) -> Result<(), BoxError>
where
    U: UserRepository + Clone + 'static,
    C: CircleRepository + Clone + 'static,
{
    let app = api::create_app(state, metrics_handle);

    let addr = config.addr();
    tracing::info!(%addr, "starting API server");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shut down gracefully");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config = Config::from_env();

    // 1. Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Install Prometheus metrics recorder
    let metrics_handle = metrics_exporter_prometheus::PrometheusBuilder::new().install_recorder()?;

    // 3. Pick the storage backend and serve
    match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new().max_connections(10).connect(url).await?;
            run_migrations(&pool).await?;
            tracing::info!("using PostgreSQL storage");

            let state = AppState::new(
                PostgresUserRepository::new(pool.clone()),
                PostgresCircleRepository::new(pool),
            );
            serve(&config, Arc::new(state), metrics_handle).await
        }
        None => {
            tracing::info!("DATABASE_URL not set, using in-memory storage");
            let (state, _store) = api::create_in_memory_state();
            serve(&config, state, metrics_handle).await
        }
    }
}
