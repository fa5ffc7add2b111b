//! # MedSuggest Core
//!
//! 医生推荐服务的核心模块，提供实体定义、字段校验、仓储接口和统一错误类型。

pub mod error;
pub mod models;
pub mod repository;
pub mod validation;

pub use error::{Result, SuggestError};
pub use models::*;
pub use repository::{DoctorRepository, PatientRepository};
pub use validation::{FieldViolation, Validate, ValidationErrors};
