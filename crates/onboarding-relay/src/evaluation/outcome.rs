use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body returned to the form once the upstream evaluation succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResponse {
    pub outcome: Option<Value>,
}

impl EvaluationResponse {
    pub fn from_upstream(body: &Value) -> Self {
        Self {
            outcome: extract_outcome(body),
        }
    }

    pub fn outcome_label(&self) -> &str {
        match &self.outcome {
            Some(Value::String(label)) => label,
            Some(_) => "<non-string>",
            None => "<none>",
        }
    }
}

/// Reads `summary.outcome`; any gap along the path yields `None`.
pub fn extract_outcome(body: &Value) -> Option<Value> {
    body.get("summary")
        .and_then(|summary| summary.get("outcome"))
        .filter(|outcome| !outcome.is_null())
        .cloned()
}
