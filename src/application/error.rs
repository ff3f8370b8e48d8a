//! 应用层错误定义
//!
//! 统一的查询错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 模板不存在
    #[error("Template not found: {0}")]
    TemplateNotFound(String),
}

impl ApplicationError {
    /// 创建 TemplateNotFound 错误
    pub fn template_not_found(name: impl Into<String>) -> Self {
        Self::TemplateNotFound(name.into())
    }
}
