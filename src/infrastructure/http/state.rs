//! Application State
//!
//! 包含所有 Query Handlers 的应用状态

use crate::application::{GetTemplateHandler, ListTemplatesHandler};

/// 应用状态
#[derive(Debug, Default)]
pub struct AppState {
    // ========== Query Handlers ==========
    pub get_template_handler: GetTemplateHandler,
    pub list_templates_handler: ListTemplatesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new() -> Self {
        Self {
            get_template_handler: GetTemplateHandler::new(),
            list_templates_handler: ListTemplatesHandler::new(),
        }
    }
}
