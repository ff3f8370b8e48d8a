//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：模板是只读的，全部走查询

mod template_queries;

pub mod handlers;

pub use template_queries::*;
