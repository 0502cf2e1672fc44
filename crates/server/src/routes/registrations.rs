use axum::{
    extract::{Path, Query, State},
    Json,
};
use models::Student;
use serde::Deserialize;
use serde_json::{json, Value};
use service::roster::RegisterOutcome;

use crate::errors::ApiError;
use crate::state::ServerState;

#[derive(Debug, Deserialize)]
pub struct RegisterParams {
    pub student_id: i64,
    pub class_id: i64,
}

/// POST /register/?student_id=&class_id= — ids travel as query parameters.
pub async fn register(
    State(state): State<ServerState>,
    Query(params): Query<RegisterParams>,
) -> Result<Json<Value>, ApiError> {
    let outcome = state
        .registrations
        .register(params.student_id, params.class_id)
        .await?;
    let message = match outcome {
        RegisterOutcome::Registered => format!(
            "Student {} registered to class {}",
            params.student_id, params.class_id
        ),
        RegisterOutcome::AlreadyRegistered => {
            "Student already registered for this class".to_string()
        }
    };
    Ok(Json(json!({"message": message})))
}

/// GET /classes/:class_id/students — empty list when nothing is registered,
/// whether or not the class exists.
pub async fn students_in_class(
    State(state): State<ServerState>,
    Path(class_id): Path<i64>,
) -> Json<Vec<Student>> {
    Json(state.registrations.students_in_class(class_id).await)
}
