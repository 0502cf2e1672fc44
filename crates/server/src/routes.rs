pub mod classes;
pub mod registrations;
pub mod students;

use axum::{
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::{Health, Welcome};

use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn root() -> Json<Welcome> {
    Json(Welcome { message: "Welcome to the Student-Class Management API" })
}

/// Build the full application router over the shared roster state.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/students/", post(students::create).get(students::list))
        .route("/students/:student_id", put(students::update).delete(students::remove))
        .route("/classes/", post(classes::create).get(classes::list))
        .route("/classes/:class_id", put(classes::update).delete(classes::remove))
        .route("/classes/:class_id/students", get(registrations::students_in_class))
        .route("/register/", post(registrations::register))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
