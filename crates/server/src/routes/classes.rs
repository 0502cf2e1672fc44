use axum::{
    extract::{Path, State},
    Json,
};
use models::Class;
use serde_json::{json, Value};

use crate::errors::ApiError;
use crate::state::ServerState;

/// POST /classes/
pub async fn create(State(state): State<ServerState>, Json(class): Json<Class>) -> Json<Value> {
    let stored = state.classes.create(class).await;
    Json(json!({"message": "Class created successfully", "class": stored}))
}

/// GET /classes/
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Class>> {
    Json(state.classes.list().await)
}

/// PUT /classes/:class_id
pub async fn update(
    State(state): State<ServerState>,
    Path(class_id): Path<i64>,
    Json(class): Json<Class>,
) -> Result<Json<Value>, ApiError> {
    let updated = state.classes.update(class_id, class).await?;
    Ok(Json(json!({"message": "Class updated successfully", "class": updated})))
}

/// DELETE /classes/:class_id
pub async fn remove(
    State(state): State<ServerState>,
    Path(class_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let deleted = state.classes.delete(class_id).await?;
    Ok(Json(json!({"message": "Class deleted successfully", "class": deleted})))
}
