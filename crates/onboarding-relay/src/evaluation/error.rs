use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use std::fmt;

pub const CONNECT_FAILURE_MESSAGE: &str = "Failed to connect to Alloy API";
pub const TIMEOUT_MESSAGE: &str = "Alloy API request timed out";

/// Failure modes of a single relayed evaluation.
#[derive(Debug)]
pub enum RelayError {
    /// The HTTP client could not be constructed.
    Client(reqwest::Error),
    /// No response arrived: DNS, refused connection, TLS, and similar.
    Transport(reqwest::Error),
    Timeout(reqwest::Error),
    /// The upstream answered with a non-success status.
    Rejected {
        status: StatusCode,
        body: Option<Value>,
    },
    /// A success status whose body was not JSON.
    Decode(reqwest::Error),
}

impl RelayError {
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Transport(err)
        }
    }

    pub(crate) fn from_body(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Decode(err)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Rejected { status, .. } => *status,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Client(_) | RelayError::Transport(_) | RelayError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelayError::Client(err) => write!(f, "failed to build Alloy client: {}", err),
            RelayError::Transport(err) => write!(f, "{}: {}", CONNECT_FAILURE_MESSAGE, err),
            RelayError::Timeout(err) => write!(f, "{}: {}", TIMEOUT_MESSAGE, err),
            RelayError::Rejected {
                status,
                body: Some(body),
            } => write!(f, "Alloy API rejected evaluation ({}): {}", status, body),
            RelayError::Rejected { status, body: None } => {
                write!(f, "Alloy API rejected evaluation ({})", status)
            }
            RelayError::Decode(err) => write!(f, "Alloy API returned an unreadable body: {}", err),
        }
    }
}

impl std::error::Error for RelayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RelayError::Client(err)
            | RelayError::Transport(err)
            | RelayError::Timeout(err)
            | RelayError::Decode(err) => Some(err),
            RelayError::Rejected { .. } => None,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            RelayError::Rejected {
                body: Some(body), ..
            } => body,
            RelayError::Rejected { status, body: None } => json!({
                "error": format!("Alloy API responded with status {}", status.as_u16()),
            }),
            RelayError::Timeout(_) => json!({ "error": TIMEOUT_MESSAGE }),
            RelayError::Client(_) | RelayError::Transport(_) | RelayError::Decode(_) => {
                json!({ "error": CONNECT_FAILURE_MESSAGE })
            }
        };

        (status, Json(body)).into_response()
    }
}
