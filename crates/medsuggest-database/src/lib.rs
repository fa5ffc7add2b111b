//! # MedSuggest数据库模块
//!
//! 负责医生和患者记录的持久化，基于SQLite连接池提供创建、查询和删除操作。

pub mod connection;
pub mod models;
pub mod queries;

// 重新导出主要类型
pub use connection::DatabasePool;
pub use models::{DbDoctor, DbPatient};
pub use queries::DatabaseQueries;
