//! Custom Axum extractors
//!
//! Wrap the stock extractors so every rejection renders as an [`ApiError`]
//! with a `{"detail": ...}` body instead of axum's plain-text default.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use quizbank_core::QuestionId;

use super::error::ApiError;

/// Extract and validate an integer question id from the path
pub struct QuestionIdPath(pub QuestionId);

impl<S> FromRequestParts<S> for QuestionIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::InvalidRequest {
                message: "id: value is not a valid integer".to_string(),
            })?;

        Ok(Self(QuestionId::from(id)))
    }
}

/// Query string extractor with JSON error bodies
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: QueryRejection| ApiError::InvalidRequest {
                message: e.body_text(),
            })?;

        Ok(Self(value))
    }
}

/// JSON body extractor with JSON error bodies
///
/// Unparseable or mistyped bodies are 422. Other rejections keep axum's
/// status (415 without a JSON content type, 413 over the body limit).
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| match rejection {
                JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                    ApiError::InvalidRequest {
                        message: rejection.body_text(),
                    }
                }
                other => ApiError::Rejected {
                    status: other.status(),
                    message: other.body_text(),
                },
            })?;

        Ok(Self(value))
    }
}

#[derive(Deserialize)]
struct RandomParams {
    #[serde(default = "default_random_count")]
    n: i64,
}

fn default_random_count() -> i64 {
    1
}

/// `n` for random sampling: defaults to 1, rejected when below 1
pub struct RandomCount(pub i64);

impl<S> FromRequestParts<S> for RandomCount
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let ValidQuery(params) = ValidQuery::<RandomParams>::from_request_parts(parts, state).await?;

        if params.n < 1 {
            return Err(ApiError::Constraint {
                field: "n",
                message: "must be greater than or equal to 1",
            });
        }

        Ok(Self(params.n))
    }
}
