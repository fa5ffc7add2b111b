//! 错误定义模块

use crate::validation::ValidationErrors;
use thiserror::Error;

/// 医生推荐服务统一错误类型
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(String),

    #[error("验证错误: {0}")]
    Validation(ValidationErrors),

    #[error("请求错误: {0}")]
    BadRequest(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("系统内部错误: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for SuggestError {
    fn from(errors: ValidationErrors) -> Self {
        SuggestError::Validation(errors)
    }
}

/// 统一结果类型
pub type Result<T> = std::result::Result<T, SuggestError>;
