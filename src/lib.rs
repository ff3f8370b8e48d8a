//! Plot Tracker - 小说情节追踪模板
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Plot Context: 情节线、伏笔、冲突、章节摘要、检查点及模板工厂
//!
//! 应用层 (application/):
//! - Queries: 模板查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
pub use domain::plot::{create_plot_tracker_template, get_plot_tracker_template, PlotTracker};
