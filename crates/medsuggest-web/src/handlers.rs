//! HTTP处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use medsuggest_core::{
    Doctor, DoctorRepository, EntityId, NewDoctor, NewPatient, Patient, PatientRepository,
    SuggestError, Validate,
};
use medsuggest_engine::Suggestion;
use serde_json::json;
use tracing::{error, info, warn};

use crate::state::ApiState;

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// API根路径处理器
pub async fn api_root() -> impl IntoResponse {
    Json(json!({
        "service": "Doctor Suggestion API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "api": "/api",
            "docs": "/api-docs"
        }
    }))
}

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// ========== 医生 ==========

/// 新增医生
pub async fn create_doctor(
    State(state): State<ApiState>,
    payload: Result<Json<NewDoctor>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Doctor>)> {
    let Json(payload) = payload.map_err(reject_body)?;

    if let Err(errors) = payload.validate() {
        warn!("Rejected doctor payload: {}", errors);
        return Err(SuggestError::Validation(errors).into());
    }

    let doctor = state.store.create_doctor(&payload).await?;
    Ok((StatusCode::CREATED, Json(doctor)))
}

/// 查询医生
pub async fn get_doctor(
    State(state): State<ApiState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Doctor>> {
    let Path(id) = id.map_err(reject_path)?;

    state
        .store
        .get_doctor_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| SuggestError::NotFound(format!("Doctor {} not found", id)).into())
}

/// 删除医生
pub async fn delete_doctor(
    State(state): State<ApiState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(reject_path)?;

    state.store.delete_doctor(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ========== 患者 ==========

/// 新增患者
pub async fn create_patient(
    State(state): State<ApiState>,
    payload: Result<Json<NewPatient>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Patient>)> {
    let Json(payload) = payload.map_err(reject_body)?;

    if let Err(errors) = payload.validate() {
        warn!("Rejected patient payload: {}", errors);
        return Err(SuggestError::Validation(errors).into());
    }

    let patient = state.store.create_patient(&payload).await?;
    Ok((StatusCode::CREATED, Json(patient)))
}

/// 查询患者
pub async fn get_patient(
    State(state): State<ApiState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<Json<Patient>> {
    let Path(id) = id.map_err(reject_path)?;

    state
        .store
        .get_patient_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| SuggestError::NotFound(format!("Patient {} not found", id)).into())
}

/// 删除患者
pub async fn delete_patient(
    State(state): State<ApiState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(reject_path)?;

    state.store.delete_patient(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ========== 推荐 ==========

/// 为患者推荐医生
///
/// 医生列表返回JSON数组，否定结果返回JSON字符串。患者不存在时状态码为404。
pub async fn suggest_doctor(
    State(state): State<ApiState>,
    patient_id: Result<Path<EntityId>, PathRejection>,
) -> ApiResult<(StatusCode, Json<Suggestion>)> {
    let Path(patient_id) = patient_id.map_err(reject_path)?;

    let suggestion = state.engine.suggest(patient_id).await?;
    let status = match suggestion {
        Suggestion::PatientNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::OK,
    };

    Ok((status, Json(suggestion)))
}

fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!("Malformed request body: {}", rejection.body_text());
    SuggestError::BadRequest(rejection.body_text()).into()
}

fn reject_path(rejection: PathRejection) -> ApiError {
    SuggestError::BadRequest(rejection.body_text()).into()
}

/// 错误处理
///
/// 包装核心错误类型，转换为统一的JSON错误响应。
#[derive(Debug)]
pub struct ApiError(pub SuggestError);

impl From<SuggestError> for ApiError {
    fn from(error: SuggestError) -> Self {
        ApiError(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self.0 {
            SuggestError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            SuggestError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            SuggestError::Validation(_) => {
                (StatusCode::BAD_REQUEST, "Validation failed".to_string())
            }
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            info!("Request rejected with {}: {}", status, error_message);
        }

        let mut body = json!({
            "error": true,
            "message": error_message,
            "status": status.as_u16()
        });
        if let SuggestError::Validation(errors) = &self.0 {
            body["violations"] = json!(errors);
        }

        (status, Json(body)).into_response()
    }
}
