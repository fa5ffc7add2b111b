//! # MedSuggest推荐模块
//!
//! 根据患者的城市和症状推荐医生，包括：
//! - 路由规则：服务城市检查和症状到专长的映射
//! - 推荐引擎：查找患者、应用路由规则并匹配同城同专长的医生

pub mod engine;
pub mod routing;

// 重新导出主要类型
pub use engine::{Suggestion, SuggestionEngine};
pub use routing::{is_served_city, route_patient, speciality_for_symptom, SERVED_CITIES};
