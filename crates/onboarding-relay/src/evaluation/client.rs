use axum::http::StatusCode;
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info, warn};

use super::applicant::{AlloyApplicantPayload, ApplicantSubmission};
use super::error::RelayError;
use super::outcome::EvaluationResponse;
use crate::config::AlloyConfig;

/// Submits applicants to the Alloy evaluations endpoint.
///
/// Holds one pooled HTTP client and is shared across handlers behind an `Arc`.
pub struct AlloyClient {
    http: Client,
    config: AlloyConfig,
}

impl AlloyClient {
    pub fn new(config: AlloyConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(RelayError::Client)?;

        Ok(Self { http, config })
    }

    pub async fn evaluate(
        &self,
        submission: ApplicantSubmission,
    ) -> Result<EvaluationResponse, RelayError> {
        let payload = AlloyApplicantPayload::from(submission);
        let result = self.submit(&payload).await;

        match &result {
            Ok(response) => info!(outcome = response.outcome_label(), "evaluation completed"),
            Err(RelayError::Rejected { status, .. }) => {
                warn!(status = status.as_u16(), "Alloy API rejected evaluation")
            }
            Err(err) => error!(error = %err, "evaluation relay failed"),
        }

        result
    }

    async fn submit(
        &self,
        payload: &AlloyApplicantPayload,
    ) -> Result<EvaluationResponse, RelayError> {
        let mut request = self
            .http
            .post(self.config.evaluation_url.clone())
            .json(payload);

        if let Some(token) = &self.config.token {
            request = request.basic_auth(token, self.config.secret.as_deref());
        }

        let response = request.send().await.map_err(RelayError::from_send)?;
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if !status.is_success() {
            // A non-JSON error body is reported by status alone.
            let body = match response.bytes().await {
                Ok(bytes) => serde_json::from_slice::<Value>(&bytes).ok(),
                Err(err) if err.is_timeout() => return Err(RelayError::from_body(err)),
                Err(_) => None,
            };
            return Err(RelayError::Rejected { status, body });
        }

        let body: Value = response.json().await.map_err(RelayError::from_body)?;
        Ok(EvaluationResponse::from_upstream(&body))
    }
}
