//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod template_handlers;

pub use template_handlers::*;
