//! quizbank-server: HTTP surface for the question bank
//!
//! Wires a [`QuestionService`] into an axum router under `/questions`.

pub mod http;

pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use quizbank_core::QuestionService;
