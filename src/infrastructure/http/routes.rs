//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                GET  健康检查
//! - /api/template/list       GET  列出所有模板
//! - /api/template/:name      GET  获取模板（如 plot-tracker）

use axum::{routing::get, Router};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/api", api_routes())
        .fallback(handlers::fallback)
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/template", template_routes())
}

/// Template 路由
fn template_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/list", get(handlers::list_templates))
        .route("/:name", get(handlers::get_template))
}
