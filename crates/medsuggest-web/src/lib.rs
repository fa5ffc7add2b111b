//! # MedSuggest Web模块
//!
//! 提供医生、患者管理和医生推荐的HTTP/JSON接口，以及API文档和健康检查。

pub mod docs;
pub mod handlers;
pub mod server;
pub mod state;

pub use handlers::{ApiError, ApiResult};
pub use server::WebServer;
pub use state::ApiState;
