use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::post,
    Json, Router,
};

use super::applicant::ApplicantSubmission;
use super::client::AlloyClient;
use super::cors::allow_any_origin;
use super::outcome::EvaluationResponse;
use crate::error::AppError;

/// Router builder exposing the evaluation relay endpoint.
pub fn evaluation_router(client: Arc<AlloyClient>) -> Router {
    Router::new()
        .route("/evaluate", post(evaluate_handler))
        .layer(middleware::from_fn(allow_any_origin))
        .with_state(client)
}

pub(crate) async fn evaluate_handler(
    State(client): State<Arc<AlloyClient>>,
    payload: Result<Json<ApplicantSubmission>, JsonRejection>,
) -> Result<Json<EvaluationResponse>, AppError> {
    let Json(submission) = payload?;
    let response = client.evaluate(submission).await?;
    Ok(Json(response))
}
