//! Template HTTP Handlers

use axum::{
    extract::{Path, State},
    http::Uri,
    Json,
};
use std::sync::Arc;

use crate::application::{GetTemplate, ListTemplates};
use crate::domain::plot::PlotTracker;
use crate::infrastructure::http::dto::{ApiResponse, TemplateListResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 列出所有模板
pub async fn list_templates(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<TemplateListResponse>> {
    let templates = state.list_templates_handler.handle(ListTemplates);
    Json(ApiResponse::success(TemplateListResponse { templates }))
}

/// 按名称获取模板，每次请求返回新构造的实例
pub async fn get_template(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<PlotTracker>>, ApiError> {
    let template = state.get_template_handler.handle(GetTemplate { name })?;
    Ok(Json(ApiResponse::success(template)))
}

/// 未匹配路由
pub async fn fallback(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
