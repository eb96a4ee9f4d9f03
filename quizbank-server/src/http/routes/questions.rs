//! Question endpoints
//!
//! Creation and deletion answer 200 with a body, not 201/204.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use quizbank_core::{Question, QuestionFilter, QuestionInput};

use crate::http::error::ApiError;
use crate::http::extractors::{QuestionIdPath, RandomCount, ValidJson, ValidQuery};
use crate::http::server::AppState;

/// Query parameters for listing
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
    pub n: Option<i64>,
}

/// Delete confirmation
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

/// GET /questions - list, optionally filtered by tag and limited to n
async fn list_questions(
    State(state): State<Arc<AppState>>,
    ValidQuery(params): ValidQuery<ListParams>,
) -> Json<Vec<Question>> {
    let questions = state.questions.get_questions(QuestionFilter {
        tag: params.tag.as_deref(),
        limit: params.n,
    });
    Json(questions)
}

/// GET /questions/random - sample n questions
async fn random_questions(
    State(state): State<Arc<AppState>>,
    RandomCount(n): RandomCount,
) -> Json<Vec<Question>> {
    Json(state.questions.get_random_questions(n))
}

/// GET /questions/{id} - get a single question
async fn get_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questions
        .get_question(id)
        .ok_or_else(ApiError::question_not_found)?;

    Ok(Json(question))
}

/// POST /questions - create a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidJson(input): ValidJson<QuestionInput>,
) -> Result<Json<Question>, ApiError> {
    let question = state.questions.create_question(input)?;
    tracing::info!(id = %question.id, "question created");
    Ok(Json(question))
}

/// PUT /questions/{id} - replace a question
async fn update_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
    ValidJson(input): ValidJson<QuestionInput>,
) -> Result<Json<Question>, ApiError> {
    let question = state
        .questions
        .modify_question(id, input)?
        .ok_or_else(ApiError::question_not_found)?;

    Ok(Json(question))
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<Json<DeleteResponse>, ApiError> {
    state
        .questions
        .delete_question(id)
        .ok_or_else(ApiError::question_not_found)?;

    tracing::info!(%id, "question deleted");
    Ok(Json(DeleteResponse { status: "deleted" }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/", get(list_questions).post(create_question))
        .route("/questions/random", get(random_questions))
        .route(
            "/questions/{id}",
            get(get_question).put(update_question).delete(delete_question),
        )
}
