pub mod api;
pub mod config;

pub use config::ServerConfig;

use axum::{
    Router,
    routing::{get, post},
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// ルーターを構築する (テストからも利用)
pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/generate", post(api::generate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Webサーバーを起動する
pub async fn start_server(addr: SocketAddr) -> crate::Result<()> {
    let app = build_router();

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", listener.local_addr()?);

    // Ctrl-C で停止
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
