//! 患者路由规则
//!
//! 根据患者所在城市和症状确定应就诊的专长。规则表和服务城市都是进程级常量。

use crate::engine::Suggestion;
use medsuggest_core::{Patient, Speciality};

/// 推荐服务覆盖的城市
///
/// 与医生实体的城市约束相互独立，后续扩展服务区域时只修改这里。
pub const SERVED_CITIES: [&str; 3] = ["Delhi", "Noida", "Faridabad"];

/// 症状到专长的映射，区分大小写
pub fn speciality_for_symptom(symptom: &str) -> Option<Speciality> {
    match symptom {
        "Arthritis" | "Back Pain" | "Tissue injuries" => Some(Speciality::Orthopaedic),
        "Dysmenorrhea" => Some(Speciality::Gynecology),
        "Skin infection" | "skin burn" => Some(Speciality::Dermatology),
        "Ear pain" => Some(Speciality::Ent),
        _ => None,
    }
}

pub fn is_served_city(city: &str) -> bool {
    SERVED_CITIES.contains(&city)
}

/// 为患者确定专长
///
/// 城市检查先于症状检查，第一个失败的检查决定结果。
pub fn route_patient(patient: &Patient) -> Result<Speciality, Suggestion> {
    if !is_served_city(&patient.city) {
        tracing::debug!("Patient {} is outside served cities: {}", patient.id, patient.city);
        return Err(Suggestion::LocationNotSupported);
    }

    match speciality_for_symptom(&patient.symptom) {
        Some(speciality) => {
            tracing::debug!(
                "Patient {} routed to {} for {}",
                patient.id,
                speciality,
                patient.symptom
            );
            Ok(speciality)
        }
        None => Err(Suggestion::SymptomUnrecognized),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(city: &str, symptom: &str) -> Patient {
        Patient {
            id: 7,
            name: "Rohan".to_string(),
            city: city.to_string(),
            email: "rohan@example.com".to_string(),
            phone: "9000000000".to_string(),
            symptom: symptom.to_string(),
        }
    }

    #[test]
    fn test_symptom_table() {
        let table = [
            ("Arthritis", Speciality::Orthopaedic),
            ("Back Pain", Speciality::Orthopaedic),
            ("Tissue injuries", Speciality::Orthopaedic),
            ("Dysmenorrhea", Speciality::Gynecology),
            ("Skin infection", Speciality::Dermatology),
            ("skin burn", Speciality::Dermatology),
            ("Ear pain", Speciality::Ent),
        ];
        for (symptom, speciality) in table {
            assert_eq!(speciality_for_symptom(symptom), Some(speciality));
        }

        assert_eq!(speciality_for_symptom("Migraine"), None);
        assert_eq!(speciality_for_symptom("back pain"), None);
        assert_eq!(speciality_for_symptom("Skin burn"), None);
    }

    #[test]
    fn test_every_registrable_symptom_is_routable() {
        for symptom in medsuggest_core::SYMPTOMS {
            assert!(speciality_for_symptom(symptom).is_some(), "{}", symptom);
        }
    }

    #[test]
    fn test_route_patient() {
        assert_eq!(
            route_patient(&patient("Faridabad", "Ear pain")),
            Ok(Speciality::Ent)
        );
        assert_eq!(
            route_patient(&patient("Mumbai", "Arthritis")),
            Err(Suggestion::LocationNotSupported)
        );
        assert_eq!(
            route_patient(&patient("Noida", "Migraine")),
            Err(Suggestion::SymptomUnrecognized)
        );
    }

    #[test]
    fn test_city_checked_before_symptom() {
        assert_eq!(
            route_patient(&patient("Pune", "Migraine")),
            Err(Suggestion::LocationNotSupported)
        );
    }
}
