//! 医生推荐引擎
//!
//! 按顺序执行患者查找、城市检查、症状映射和医生匹配，第一个失败的步骤直接返回。

use crate::routing::route_patient;
use medsuggest_core::{Doctor, DoctorRepository, EntityId, PatientRepository, Result};
use serde::{Serialize, Serializer};
use std::sync::Arc;
use tracing::info;

/// 推荐结果
///
/// 除 `Doctors` 外的变体都是业务上的否定结果，不是错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Doctors(Vec<Doctor>),
    PatientNotFound,
    LocationNotSupported,
    SymptomUnrecognized,
    NoMatchingDoctor,
}

impl Suggestion {
    /// 否定结果的提示信息
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Suggestion::Doctors(_) => None,
            Suggestion::PatientNotFound => Some("Patient not found"),
            Suggestion::LocationNotSupported => {
                Some("We are still waiting to expand to your location")
            }
            Suggestion::SymptomUnrecognized => Some("Symptom does not match any speciality"),
            Suggestion::NoMatchingDoctor => {
                Some("There isn\u{2019}t any doctor present at your location for your symptom")
            }
        }
    }

    pub fn doctors(&self) -> Option<&[Doctor]> {
        match self {
            Suggestion::Doctors(doctors) => Some(doctors),
            _ => None,
        }
    }
}

/// 医生列表序列化为数组，其余结果序列化为字符串
impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Suggestion::Doctors(doctors) => doctors.serialize(serializer),
            other => serializer.serialize_str(other.message().unwrap_or_default()),
        }
    }
}

/// 医生推荐引擎
#[derive(Debug)]
pub struct SuggestionEngine<R> {
    repository: Arc<R>,
}

impl<R> Clone for SuggestionEngine<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R> SuggestionEngine<R>
where
    R: DoctorRepository + PatientRepository,
{
    /// 创建新的推荐引擎
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 为患者推荐医生
    pub async fn suggest(&self, patient_id: EntityId) -> Result<Suggestion> {
        // 1. 查找患者
        let Some(patient) = self.repository.get_patient_by_id(patient_id).await? else {
            info!("Suggestion for patient {}: patient not found", patient_id);
            return Ok(Suggestion::PatientNotFound);
        };

        // 2. 城市和症状路由
        let speciality = match route_patient(&patient) {
            Ok(speciality) => speciality,
            Err(outcome) => {
                info!("Suggestion for patient {}: {:?}", patient_id, outcome);
                return Ok(outcome);
            }
        };

        // 3. 匹配医生
        let doctors = self
            .repository
            .find_doctors_by_city_and_speciality(&patient.city, speciality.as_str())
            .await?;

        if doctors.is_empty() {
            info!(
                "Suggestion for patient {}: no {} doctor in {}",
                patient_id, speciality, patient.city
            );
            return Ok(Suggestion::NoMatchingDoctor);
        }

        info!(
            "Suggestion for patient {}: {} {} doctors in {}",
            patient_id,
            doctors.len(),
            speciality,
            patient.city
        );
        Ok(Suggestion::Doctors(doctors))
    }
}
