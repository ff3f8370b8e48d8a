//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Plot Context: 情节追踪数据与模板

pub mod plot;
