//! 数据库模型

use medsuggest_core::models::{Doctor, EntityId, Patient};
use sqlx::FromRow;

// 数据库表模型 - 使用FromRow trait用于SQL查询

/// 数据库医生表
#[derive(Debug, FromRow)]
pub struct DbDoctor {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

impl From<DbDoctor> for Doctor {
    fn from(db_doctor: DbDoctor) -> Self {
        Doctor {
            id: db_doctor.id,
            name: db_doctor.name,
            city: db_doctor.city,
            email: db_doctor.email,
            phone: db_doctor.phone,
            speciality: db_doctor.speciality,
        }
    }
}

/// 数据库患者表
#[derive(Debug, FromRow)]
pub struct DbPatient {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub symptom: String,
}

impl From<DbPatient> for Patient {
    fn from(db_patient: DbPatient) -> Self {
        Patient {
            id: db_patient.id,
            name: db_patient.name,
            city: db_patient.city,
            email: db_patient.email,
            phone: db_patient.phone,
            symptom: db_patient.symptom,
        }
    }
}
