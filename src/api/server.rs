use axum::{Router, routing::get};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::users;
use crate::config::{Config, ValidationMode};
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub validation: ValidationMode,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/{id}", get(users::get_user).put(users::update_user))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// Wait for SIGTERM or Ctrl+C
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

pub async fn start_server(config: &Config) -> anyhow::Result<()> {
    let pool = db::connect(&config.database_url, config.max_connections).await?;

    let state = Arc::new(AppState {
        db: pool.clone(),
        validation: config.validation,
    });
    let app = router(state);

    let bind_addr = config.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {bind_addr}: {e}"))?;

    tracing::info!(validation = ?config.validation, "Server listening on http://{bind_addr}");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Closing database connections...");
    pool.close().await;

    Ok(())
}

/// Test server plus a handle on its in-memory pool.
#[cfg(test)]
pub async fn test_app(validation: ValidationMode) -> (axum_test::TestServer, SqlitePool) {
    let pool = db::test_pool().await;
    let state = Arc::new(AppState {
        db: pool.clone(),
        validation,
    });

    let server = axum_test::TestServer::new(router(state)).expect("Failed to create test server");
    (server, pool)
}

#[cfg(test)]
pub async fn test_server(validation: ValidationMode) -> axum_test::TestServer {
    test_app(validation).await.0
}
