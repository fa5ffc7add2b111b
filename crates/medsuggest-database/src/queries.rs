//! 数据库查询操作

use crate::connection::DatabasePool;
use crate::models::*;
use async_trait::async_trait;
use medsuggest_core::{
    Doctor, DoctorRepository, EntityId, NewDoctor, NewPatient, Patient, PatientRepository,
    Result, SuggestError,
};

/// 数据库查询操作接口
#[derive(Debug, Clone)]
pub struct DatabaseQueries {
    pool: DatabasePool,
}

impl DatabaseQueries {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// 创建数据库表
    ///
    /// AUTOINCREMENT 保证标识符单调递增且删除后不会复用。
    pub async fn create_tables(&self) -> Result<()> {
        let pool = self.pool.pool();

        // 创建医生表
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS doctors (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city VARCHAR(20) NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                speciality TEXT NOT NULL
            )
        "#,
        )
        .execute(pool)
        .await
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        // 创建患者表
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS patients (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city VARCHAR(20) NOT NULL,
                email TEXT NOT NULL,
                phone TEXT NOT NULL,
                symptom TEXT NOT NULL
            )
        "#,
        )
        .execute(pool)
        .await
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_doctors_city_speciality ON doctors(city, speciality)",
        )
        .execute(pool)
        .await
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        tracing::info!("Database tables created successfully");
        Ok(())
    }
}

#[async_trait]
impl DoctorRepository for DatabaseQueries {
    /// 创建新医生
    async fn create_doctor(&self, doctor: &NewDoctor) -> Result<Doctor> {
        let pool = self.pool.pool();

        let id = sqlx::query(
            r#"
            INSERT INTO doctors (name, city, email, phone, speciality)
            VALUES (?, ?, ?, ?, ?)
        "#,
        )
        .bind(&doctor.name)
        .bind(&doctor.city)
        .bind(&doctor.email)
        .bind(&doctor.phone)
        .bind(&doctor.speciality)
        .execute(pool)
        .await
        .map(|result| result.last_insert_rowid())
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        tracing::info!("Created doctor {} ({}, {})", id, doctor.city, doctor.speciality);
        Ok(doctor.clone().into_doctor(id))
    }

    /// 根据ID查找医生
    async fn get_doctor_by_id(&self, id: EntityId) -> Result<Option<Doctor>> {
        let pool = self.pool.pool();

        let result = sqlx::query_as::<_, DbDoctor>("SELECT * FROM doctors WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| SuggestError::Database(e.to_string()))?;

        Ok(result.map(Doctor::from))
    }

    /// 删除医生
    async fn delete_doctor(&self, id: EntityId) -> Result<()> {
        let pool = self.pool.pool();

        let affected = sqlx::query("DELETE FROM doctors WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| SuggestError::Database(e.to_string()))?
            .rows_affected();

        if affected == 0 {
            return Err(SuggestError::NotFound(format!("Doctor {} not found", id)));
        }

        tracing::info!("Deleted doctor {}", id);
        Ok(())
    }

    /// 根据城市和专长查找医生
    async fn find_doctors_by_city_and_speciality(
        &self,
        city: &str,
        speciality: &str,
    ) -> Result<Vec<Doctor>> {
        let pool = self.pool.pool();

        let results = sqlx::query_as::<_, DbDoctor>(
            "SELECT * FROM doctors WHERE city = ? AND speciality = ? ORDER BY id",
        )
        .bind(city)
        .bind(speciality)
        .fetch_all(pool)
        .await
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        tracing::debug!(
            "Found {} doctors in {} for {}",
            results.len(),
            city,
            speciality
        );
        Ok(results.into_iter().map(Doctor::from).collect())
    }
}

#[async_trait]
impl PatientRepository for DatabaseQueries {
    /// 创建新患者
    async fn create_patient(&self, patient: &NewPatient) -> Result<Patient> {
        let pool = self.pool.pool();

        let id = sqlx::query(
            r#"
            INSERT INTO patients (name, city, email, phone, symptom)
            VALUES (?, ?, ?, ?, ?)
        "#,
        )
        .bind(&patient.name)
        .bind(&patient.city)
        .bind(&patient.email)
        .bind(&patient.phone)
        .bind(&patient.symptom)
        .execute(pool)
        .await
        .map(|result| result.last_insert_rowid())
        .map_err(|e| SuggestError::Database(e.to_string()))?;

        tracing::info!("Created patient {} ({}, {})", id, patient.city, patient.symptom);
        Ok(patient.clone().into_patient(id))
    }

    /// 根据ID查找患者
    async fn get_patient_by_id(&self, id: EntityId) -> Result<Option<Patient>> {
        let pool = self.pool.pool();

        let result = sqlx::query_as::<_, DbPatient>("SELECT * FROM patients WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| SuggestError::Database(e.to_string()))?;

        Ok(result.map(Patient::from))
    }

    /// 删除患者
    async fn delete_patient(&self, id: EntityId) -> Result<()> {
        let pool = self.pool.pool();

        let affected = sqlx::query("DELETE FROM patients WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| SuggestError::Database(e.to_string()))?
            .rows_affected();

        if affected == 0 {
            return Err(SuggestError::NotFound(format!("Patient {} not found", id)));
        }

        tracing::info!("Deleted patient {}", id);
        Ok(())
    }
}
