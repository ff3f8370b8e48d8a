//! Infrastructure Layer - 基础设施层
//!
//! 对外暴露模板的 HTTP 接口

pub mod http;

pub use http::{AppState, HttpServer};
