//! 数据库浏览服务公共模块
//!
//! 包含各服务共享的错误类型、配置、响应封装、中间件与数据模型。

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod response;

pub use errors::{AppError, AppResult};
