//! API文档
//!
//! 以OpenAPI 3格式描述所有接口。

use axum::response::{IntoResponse, Json};
use medsuggest_core::{Speciality, DOCTOR_CITIES, SYMPTOMS};
use serde_json::{json, Map, Value};

/// API文档处理器
pub async fn api_docs() -> impl IntoResponse {
    Json(openapi_document())
}

/// 生成OpenAPI文档
pub fn openapi_document() -> Value {
    json!({
        "openapi": "3.0.1",
        "info": {
            "title": "Doctor Suggestion API",
            "description": "API to manage doctors, patients and suggest doctors based on symptoms",
            "version": "1.0.0"
        },
        "paths": paths(),
        "components": { "schemas": schemas() }
    })
}

fn paths() -> Map<String, Value> {
    let mut paths = Map::new();

    for (resource, entity) in [("doctors", "Doctor"), ("patients", "Patient")] {
        paths.insert(
            format!("/api/{}", resource),
            json!({
                "post": {
                    "summary": format!("Add a {}", entity.to_lowercase()),
                    "requestBody": json_body(&format!("#/components/schemas/New{}", entity)),
                    "responses": {
                        "201": json_response(
                            &format!("Stored {}", entity.to_lowercase()),
                            &format!("#/components/schemas/{}", entity)
                        ),
                        "400": json_response("Validation failed", "#/components/schemas/Error")
                    }
                }
            }),
        );

        let not_found = format!("{} not found", entity);
        paths.insert(
            format!("/api/{}/{{id}}", resource),
            json!({
                "get": {
                    "summary": format!("Get a {}", entity.to_lowercase()),
                    "parameters": id_param("id"),
                    "responses": {
                        "200": json_response(entity, &format!("#/components/schemas/{}", entity)),
                        "404": json_response(&not_found, "#/components/schemas/Error")
                    }
                },
                "delete": {
                    "summary": format!("Delete a {}", entity.to_lowercase()),
                    "parameters": id_param("id"),
                    "responses": {
                        "204": { "description": "Deleted" },
                        "404": json_response(&not_found, "#/components/schemas/Error")
                    }
                }
            }),
        );
    }

    paths.insert(
        "/api/suggest-doctor/{patientId}".to_string(),
        json!({
            "get": {
                "summary": "Suggest doctors for a patient",
                "parameters": id_param("patientId"),
                "responses": {
                    "200": json_response(
                        "Matching doctors, or a message when no suggestion can be made",
                        "#/components/schemas/Suggestion"
                    ),
                    "404": {
                        "description": "Patient not found",
                        "content": { "application/json": { "schema": { "type": "string" } } }
                    }
                }
            }
        }),
    );

    paths
}

fn schemas() -> Map<String, Value> {
    let specialities: Vec<&str> = Speciality::ALL.iter().map(|s| s.as_str()).collect();
    let mut schemas = Map::new();

    schemas.insert(
        "NewDoctor".to_string(),
        json!({
            "type": "object",
            "required": ["name", "city", "email", "phone", "speciality"],
            "properties": {
                "name": { "type": "string", "minLength": 3 },
                "city": { "type": "string", "maxLength": 20, "enum": DOCTOR_CITIES },
                "email": { "type": "string", "format": "email" },
                "phone": { "type": "string", "minLength": 10 },
                "speciality": { "type": "string", "enum": specialities }
            }
        }),
    );
    schemas.insert(
        "NewPatient".to_string(),
        json!({
            "type": "object",
            "required": ["name", "city", "email", "phone", "symptom"],
            "properties": {
                "name": { "type": "string", "minLength": 3 },
                "city": { "type": "string", "maxLength": 20 },
                "email": { "type": "string", "format": "email" },
                "phone": { "type": "string", "minLength": 10 },
                "symptom": { "type": "string", "enum": SYMPTOMS }
            }
        }),
    );
    for entity in ["Doctor", "Patient"] {
        schemas.insert(
            entity.to_string(),
            json!({
                "allOf": [
                    { "$ref": format!("#/components/schemas/New{}", entity) },
                    { "type": "object", "properties": { "id": { "type": "integer", "format": "int64" } } }
                ]
            }),
        );
    }
    schemas.insert(
        "Suggestion".to_string(),
        json!({
            "oneOf": [
                { "type": "array", "items": { "$ref": "#/components/schemas/Doctor" } },
                { "type": "string" }
            ]
        }),
    );
    schemas.insert(
        "Error".to_string(),
        json!({
            "type": "object",
            "properties": {
                "error": { "type": "boolean" },
                "message": { "type": "string" },
                "status": { "type": "integer" },
                "violations": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "field": { "type": "string" },
                            "message": { "type": "string" }
                        }
                    }
                }
            }
        }),
    );

    schemas
}

fn id_param(name: &str) -> Value {
    json!([{
        "name": name,
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    }])
}

fn json_body(schema_ref: &str) -> Value {
    json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": schema_ref } } }
    })
}

fn json_response(description: &str, schema_ref: &str) -> Value {
    json!({
        "description": description,
        "content": { "application/json": { "schema": { "$ref": schema_ref } } }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();

        for path in [
            "/api/doctors",
            "/api/doctors/{id}",
            "/api/patients",
            "/api/patients/{id}",
            "/api/suggest-doctor/{patientId}",
        ] {
            assert!(paths.contains_key(path), "missing {}", path);
        }
        assert_eq!(doc["info"]["title"], "Doctor Suggestion API");
    }

    #[test]
    fn test_document_enumerations() {
        let doc = openapi_document();
        let schemas = &doc["components"]["schemas"];

        assert_eq!(
            schemas["NewDoctor"]["properties"]["speciality"]["enum"],
            json!(["Orthopaedic", "Gynecology", "Dermatology", "ENT"])
        );
        assert_eq!(
            schemas["NewDoctor"]["properties"]["city"]["enum"],
            json!(["Delhi", "Noida", "Faridabad"])
        );
        assert_eq!(
            schemas["NewPatient"]["properties"]["symptom"]["enum"]
                .as_array()
                .unwrap()
                .len(),
            7
        );
        assert!(schemas["NewPatient"]["properties"]["city"].get("enum").is_none());
    }
}
