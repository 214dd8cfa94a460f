//! HTTP 介面：路由、共享狀態與伺服器啟動

pub mod error;
pub mod handlers;
pub mod params;

use crate::config::toml_config::TomlConfig;
use crate::core::engine::SalesEngine;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// 所有 handler 共用的唯讀狀態
#[derive(Clone)]
pub struct AppState {
    pub engine: SalesEngine,
    pub monitor: Arc<SystemMonitor>,
    pub default_limit: usize,
    pub max_page_size: usize,
}

impl AppState {
    pub fn new<C: ConfigProvider + ?Sized>(engine: SalesEngine, monitor: Arc<SystemMonitor>, config: &C) -> Self {
        Self {
            engine,
            monitor,
            default_limit: config.default_limit(),
            max_page_size: config.max_page_size(),
        }
    }
}

/// API 路由。`/api/sales/stats` 與 `/api/sales/filter-options` 為頂層端點的別名
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sales", get(handlers::get_sales))
        .route("/api/sales/", get(handlers::get_sales))
        .route("/api/sales/stats", get(handlers::get_stats))
        .route("/api/sales/filter-options", get(handlers::get_filter_options))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/filter-options", get(handlers::get_filter_options))
        .route("/api/health", get(handlers::health))
        .fallback(handlers::not_found)
}

/// 套上 panic 攔截並注入共享狀態；handler panic 時回傳 500 JSON
pub fn with_state(routes: Router<AppState>, state: AppState) -> Router {
    routes
        .layer(CatchPanicLayer::custom(error::panic_response))
        .with_state(state)
}

pub fn router(state: AppState) -> Router {
    with_state(api_routes(), state)
}

pub fn build_cors_layer(config: &TomlConfig) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!("⚠️  Ignoring unparseable CORS origin: {}", o);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(methods)
        .allow_headers(Any)
}

/// 綁定埠號並持續提供服務，直到收到 Ctrl+C
pub async fn serve(config: &TomlConfig, state: AppState) -> Result<()> {
    let app = router(state)
        .layer(build_cors_layer(config))
        .layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("🚀 Server running on {}", addr);
    tracing::info!("📊 API: http://{}/api/sales", addr);
    tracing::info!("💚 Health: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("👋 Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("❌ Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("🛑 Shutdown signal received");
}
