//! 核心数据模型定义

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 实体标识符，由数据库在创建时分配
pub type EntityId = i64;

/// 医生执业城市
pub const DOCTOR_CITIES: [&str; 3] = ["Delhi", "Noida", "Faridabad"];

/// 患者可登记的症状
pub const SYMPTOMS: [&str; 7] = [
    "Arthritis",
    "Back Pain",
    "Tissue injuries",
    "Dysmenorrhea",
    "Skin infection",
    "skin burn",
    "Ear pain",
];

/// 医生信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

/// 患者信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: EntityId,
    pub name: String,
    pub city: String, // 自由文本，不限制城市范围
    pub email: String,
    pub phone: String,
    pub symptom: String,
}

/// 新医生请求体
///
/// 请求中携带的 `id` 会被忽略，标识符只能由存储层分配。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub speciality: String,
}

impl NewDoctor {
    pub fn into_doctor(self, id: EntityId) -> Doctor {
        Doctor {
            id,
            name: self.name,
            city: self.city,
            email: self.email,
            phone: self.phone,
            speciality: self.speciality,
        }
    }
}

/// 新患者请求体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub city: String,
    pub email: String,
    pub phone: String,
    pub symptom: String,
}

impl NewPatient {
    pub fn into_patient(self, id: EntityId) -> Patient {
        Patient {
            id,
            name: self.name,
            city: self.city,
            email: self.email,
            phone: self.phone,
            symptom: self.symptom,
        }
    }
}

/// 医生专长
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Speciality {
    Orthopaedic, // 骨科
    Gynecology,  // 妇科
    Dermatology, // 皮肤科
    #[serde(rename = "ENT")]
    Ent, // 耳鼻喉科
}

impl Speciality {
    pub const ALL: [Speciality; 4] = [
        Speciality::Orthopaedic,
        Speciality::Gynecology,
        Speciality::Dermatology,
        Speciality::Ent,
    ];

    /// 存储和传输使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Speciality::Orthopaedic => "Orthopaedic",
            Speciality::Gynecology => "Gynecology",
            Speciality::Dermatology => "Dermatology",
            Speciality::Ent => "ENT",
        }
    }
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speciality {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Speciality::ALL
            .into_iter()
            .find(|speciality| speciality.as_str() == value)
            .ok_or_else(|| format!("Unknown speciality: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speciality_names() {
        for speciality in Speciality::ALL {
            assert_eq!(speciality.as_str().parse::<Speciality>(), Ok(speciality));
        }

        // 大小写敏感
        assert!("ent".parse::<Speciality>().is_err());
        assert!("Cardiology".parse::<Speciality>().is_err());
    }

    #[test]
    fn test_speciality_serde_uses_display_name() {
        let json = serde_json::to_string(&Speciality::Ent).unwrap();
        assert_eq!(json, "\"ENT\"");
    }

    #[test]
    fn test_new_doctor_ignores_client_id() {
        let payload: NewDoctor = serde_json::from_str(
            r#"{"id": 99, "name": "Asha", "city": "Delhi", "email": "asha@clinic.in",
                "phone": "9876543210", "speciality": "ENT"}"#,
        )
        .unwrap();

        let doctor = payload.into_doctor(1);
        assert_eq!(doctor.id, 1);
        assert_eq!(doctor.speciality, "ENT");
    }
}
