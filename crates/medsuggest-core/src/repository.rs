//! 仓储接口
//!
//! 存储层对外暴露的最小操作集合，推荐引擎和HTTP层只依赖这些接口。

use crate::models::{Doctor, EntityId, NewDoctor, NewPatient, Patient};
use crate::Result;
use async_trait::async_trait;

/// 医生仓储
#[async_trait]
pub trait DoctorRepository: Send + Sync {
    /// 保存医生并返回分配了标识符的记录
    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor>;

    async fn get_doctor_by_id(&self, id: EntityId) -> Result<Option<Doctor>>;

    /// 删除医生，记录不存在时返回 `SuggestError::NotFound`
    async fn delete_doctor(&self, id: EntityId) -> Result<()>;

    /// 按城市和专长查找医生，按创建顺序返回
    async fn find_doctors_by_city_and_speciality(
        &self,
        city: &str,
        speciality: &str,
    ) -> Result<Vec<Doctor>>;
}

/// 患者仓储
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient>;

    async fn get_patient_by_id(&self, id: EntityId) -> Result<Option<Patient>>;

    /// 删除患者，记录不存在时返回 `SuggestError::NotFound`
    async fn delete_patient(&self, id: EntityId) -> Result<()>;
}
