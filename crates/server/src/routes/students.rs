use axum::{
    extract::{Path, State},
    Json,
};
use models::Student;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::ServerState;

/// POST /students/ — append the record as given; duplicate ids are allowed.
pub async fn create(
    State(state): State<ServerState>,
    Json(student): Json<Student>,
) -> Json<Value> {
    let stored = state.students.create(student).await;
    Json(json!({"message": "Student added successfully", "student": stored}))
}

/// GET /students/
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Student>> {
    Json(state.students.list().await)
}

/// PUT /students/:student_id — wholesale replacement of the first match.
pub async fn update(
    State(state): State<ServerState>,
    Path(student_id): Path<i64>,
    Json(student): Json<Student>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.students.update(student_id, student).await?;
    Ok(Json(json!({"message": "Student updated successfully", "student": updated})))
}

/// DELETE /students/:student_id
pub async fn remove(
    State(state): State<ServerState>,
    Path(student_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.students.delete(student_id).await?;
    Ok(Json(json!({"message": "Student deleted successfully", "student": deleted})))
}
