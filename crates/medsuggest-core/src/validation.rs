//! 字段校验模块
//!
//! 在写入存储之前检查医生和患者请求体的字段约束，一次报告所有违规字段。

use crate::models::{NewDoctor, NewPatient, Speciality, DOCTOR_CITIES, SYMPTOMS};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use tracing::debug;

const NAME_MIN_CHARS: usize = 3;
const CITY_MAX_CHARS: usize = 20;
const PHONE_MIN_CHARS: usize = 10;

const EMAIL_LOCAL_MAX_CHARS: usize = 64;
const EMAIL_DOMAIN_MAX_CHARS: usize = 255;

/// 邮箱本地部分：点分隔的 atom，不允许首尾或连续的点
static EMAIL_LOCAL_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{FFFF}-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~\x{80}-\x{FFFF}-]+)*$",
    )
    .expect("email local part pattern compiles")
});

static EMAIL_DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9\x{80}-\x{FFFF}](?:[A-Za-z0-9\x{80}-\x{FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{FFFF}])?(?:\.[A-Za-z0-9\x{80}-\x{FFFF}](?:[A-Za-z0-9\x{80}-\x{FFFF}-]{0,61}[A-Za-z0-9\x{80}-\x{FFFF}])?)*$",
    )
    .expect("email domain pattern compiles")
});

/// 单个字段的违规信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

/// 校验结果，收集所有违规字段
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加违规
    pub fn add_violation(&mut self, field: &'static str, message: impl Into<String>) {
        self.violations.push(FieldViolation {
            field,
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// 是否存在指定字段的违规
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// 没有违规时返回 `Ok(())`
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// 可校验的请求体
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl Validate for NewDoctor {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&self.name, &mut errors);

        check_city_length(&self.city, &mut errors);
        if !DOCTOR_CITIES.contains(&self.city.as_str()) {
            errors.add_violation("city", "City must be Delhi, Noida or Faridabad");
        }

        check_email(&self.email, &mut errors);
        check_phone(&self.phone, &mut errors);

        if self.speciality.parse::<Speciality>().is_err() {
            errors.add_violation("speciality", "Invalid speciality");
        }

        debug!("医生请求体校验完成: {} 个违规", errors.len());
        errors.into_result()
    }
}

impl Validate for NewPatient {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_name(&self.name, &mut errors);
        // 患者城市只限制长度
        check_city_length(&self.city, &mut errors);
        check_email(&self.email, &mut errors);
        check_phone(&self.phone, &mut errors);

        if !SYMPTOMS.contains(&self.symptom.as_str()) {
            errors.add_violation("symptom", "Invalid symptom");
        }

        debug!("患者请求体校验完成: {} 个违规", errors.len());
        errors.into_result()
    }
}

fn check_name(name: &str, errors: &mut ValidationErrors) {
    if name.chars().count() < NAME_MIN_CHARS {
        errors.add_violation("name", "Name must be at least 3 characters");
    }
}

fn check_city_length(city: &str, errors: &mut ValidationErrors) {
    if city.chars().count() > CITY_MAX_CHARS {
        errors.add_violation("city", "City must be at most 20 characters");
    }
}

fn check_email(email: &str, errors: &mut ValidationErrors) {
    if !is_valid_email(email) {
        errors.add_violation("email", "must be a well-formed email address");
    }
}

fn check_phone(phone: &str, errors: &mut ValidationErrors) {
    if phone.chars().count() < PHONE_MIN_CHARS {
        errors.add_violation("phone", "Phone number must be at least 10 digits");
    }
}

/// 验证邮箱格式
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.rsplit_once('@') else {
        return false;
    };

    local.chars().count() <= EMAIL_LOCAL_MAX_CHARS
        && domain.chars().count() <= EMAIL_DOMAIN_MAX_CHARS
        && EMAIL_LOCAL_PART.is_match(local)
        && EMAIL_DOMAIN.is_match(domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor() -> NewDoctor {
        NewDoctor {
            name: "Ravi Kumar".to_string(),
            city: "Noida".to_string(),
            email: "ravi.kumar@clinic.in".to_string(),
            phone: "9811122233".to_string(),
            speciality: "Orthopaedic".to_string(),
        }
    }

    fn patient() -> NewPatient {
        NewPatient {
            name: "Meera".to_string(),
            city: "Mumbai".to_string(),
            email: "meera@example.com".to_string(),
            phone: "+91 98100 00000".to_string(),
            symptom: "Back Pain".to_string(),
        }
    }

    #[test]
    fn test_valid_payloads_pass() {
        assert!(doctor().validate().is_ok());
        assert!(patient().validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let mut payload = doctor();
        payload.name = "Al".to_string();

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("name"));

        // 边界值
        payload.name = "Ali".to_string();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_doctor_city_must_be_served() {
        for city in ["Mumbai", "delhi", "Delhi ", ""] {
            let mut payload = doctor();
            payload.city = city.to_string();
            let errors = payload.validate().unwrap_err();
            assert!(errors.has_field("city"), "city {:?} should be rejected", city);
        }
    }

    #[test]
    fn test_doctor_long_city_reports_both_rules() {
        let mut payload = doctor();
        payload.city = "Faridabad Sector Twenty One".to_string();

        let errors = payload.validate().unwrap_err();
        let city_violations = errors
            .violations()
            .iter()
            .filter(|v| v.field == "city")
            .count();
        assert_eq!(city_violations, 2);
    }

    #[test]
    fn test_patient_city_is_free_text() {
        let mut payload = patient();
        payload.city = "Bengaluru".to_string();
        assert!(payload.validate().is_ok());

        payload.city = "x".repeat(21);
        let errors = payload.validate().unwrap_err();
        assert!(errors.has_field("city"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_length_counts_characters() {
        let mut payload = patient();
        // 20 个字符，超过 20 字节
        payload.city = "दिल्लीदिल्लीदिल्लीदि".chars().take(20).collect();
        assert_eq!(payload.city.chars().count(), 20);
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_enumerations_are_case_sensitive() {
        let mut payload = doctor();
        payload.speciality = "orthopaedic".to_string();
        assert!(payload.validate().unwrap_err().has_field("speciality"));

        let mut payload = patient();
        payload.symptom = "Skin burn".to_string();
        assert!(payload.validate().unwrap_err().has_field("symptom"));

        payload.symptom = "skin burn".to_string();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_multiple_violations_reported() {
        let payload = NewPatient {
            name: "Jo".to_string(),
            city: "Delhi".to_string(),
            email: "not-an-email".to_string(),
            phone: "12345".to_string(),
            symptom: "Migraine".to_string(),
        };

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        for field in ["name", "email", "phone", "symptom"] {
            assert!(errors.has_field(field));
        }
        assert!(errors.to_string().contains("symptom: Invalid symptom"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a.b+tag@mail.example.co.in"));
        assert!(is_valid_email("doctor@localhost"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("space in@name.com"));
        assert!(!is_valid_email("dot@.com"));
        assert!(!is_valid_email("trailing@domain."));
    }

    #[test]
    fn test_email_local_part_is_dot_atom() {
        assert!(is_valid_email("first.last@example.com"));
        assert!(!is_valid_email(".lead@example.com"));
        assert!(!is_valid_email("trail.@example.com"));
        assert!(!is_valid_email("a..b@example.com"));
    }

    #[test]
    fn test_email_local_part_length() {
        let longest = format!("{}@example.com", "a".repeat(64));
        let too_long = format!("{}@example.com", "a".repeat(65));

        assert!(is_valid_email(&longest));
        assert!(!is_valid_email(&too_long));
    }

    #[test]
    fn test_email_accepts_non_ascii() {
        assert!(is_valid_email("josé@example.com"));
        assert!(is_valid_email("डॉक्टर@example.in"));
    }

    #[test]
    fn test_doctor_with_malformed_email_rejected() {
        let mut payload = doctor();
        payload.email = "a..b@example.com".to_string();

        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.has_field("email"));
    }

    #[test]
    fn test_violations_serialize_as_list() {
        let mut errors = ValidationErrors::new();
        errors.add_violation("phone", "Phone number must be at least 10 digits");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"field": "phone", "message": "Phone number must be at least 10 digits"}])
        );
    }
}
