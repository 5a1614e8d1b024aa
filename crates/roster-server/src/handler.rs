use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use roster_store::{StudentDraft, StudentFilter, StudentPatch, StudentStore};
use roster_types::StudentId;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StudentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }
}

type ApiResult<T> = Result<T, ApiError>;

/// A path id that does not parse cannot name any student.
fn parse_id(raw: &str) -> ApiResult<StudentId> {
    raw.parse().map_err(|_| ApiError::student_not_found())
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Liveness text at `/`.
pub async fn root_handler() -> &'static str {
    "server is running"
}

/// Health check handler.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": "roster-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub active: Option<String>,
    pub grade: Option<String>,
    pub subject: Option<String>,
}

impl From<ListQuery> for StudentFilter {
    fn from(q: ListQuery) -> Self {
        Self {
            // Any value other than "true" selects inactive students.
            is_active: q.active.map(|a| a == "true"),
            grade: non_empty(q.grade),
            subject: non_empty(q.subject),
        }
    }
}

pub async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let listing = state.store.list(&query.into())?;
    Ok(Json(json!({ "total": listing.count, "students": listing.students })))
}

pub async fn student_stats(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let stats = state.store.stats()?;
    Ok(Json(json!(stats)))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search_students(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Value>> {
    let listing = state
        .store
        .search(query.q.as_deref())
        .map_err(|_| ApiError::BadRequest("Search term \"q\" is required.".into()))?;
    Ok(Json(json!({ "count": listing.count, "students": listing.students })))
}

pub async fn students_by_grade(
    State(state): State<AppState>,
    Path(grade): Path<String>,
) -> ApiResult<Json<Value>> {
    let listing = state.store.by_grade(&grade)?;
    Ok(Json(json!({ "count": listing.count, "students": listing.students })))
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let student = state.store.get(parse_id(&id)?)?;
    Ok(Json(json!(student)))
}

pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let student = state.store.create(body(payload)?)?;
    tracing::info!(id = %student.id, "student created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Student created successfully", "student": student })),
    ))
}

pub async fn create_students_bulk(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let report = state.store.create_bulk(&body(payload)?)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Bulk operation completed",
            "successCount": report.success_count(),
            "errorCount": report.error_count(),
            "addedStudents": report.added,
            "errors": report.errors,
        })),
    ))
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let student = state.store.update(id, &body(payload)?)?;
    Ok(Json(json!({ "message": "Student updated successfully", "student": student })))
}

#[derive(Debug, Default, Deserialize)]
pub struct GradeBody {
    pub grade: Option<String>,
}

pub async fn update_student_grade(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GradeBody>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let id = parse_id(&id)?;
    let grade = body(payload)?.grade;
    let student = state.store.update_grade(id, grade.as_deref())?;
    Ok(Json(json!({ "message": "Student grade updated", "student": student })))
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Value>> {
    let student = state.store.delete(parse_id(&id)?)?;
    tracing::info!(id = %student.id, "student deleted");
    Ok(Json(json!({ "message": "Student deleted", "student": student })))
}
