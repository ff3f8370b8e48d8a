//! 应用层 - 用例编排
//!
//! 包含：
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod error;
pub mod queries;

pub use error::ApplicationError;

pub use queries::{
    handlers::{GetTemplateHandler, ListTemplatesHandler},
    GetTemplate, ListTemplates, TemplateKind,
};
