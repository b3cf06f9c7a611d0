//! Relay of applicant submissions to the Alloy evaluations endpoint.
//!
//! Form fields are renamed into Alloy's schema, posted with the workflow
//! credentials, and the upstream decision is reduced to `summary.outcome`.
//! Upstream rejections are passed back to the caller untouched.

pub mod applicant;
pub mod client;
pub mod cors;
pub mod error;
pub mod outcome;
pub mod router;

#[cfg(test)]
mod tests;

pub use applicant::{AlloyApplicantPayload, ApplicantSubmission};
pub use client::AlloyClient;
pub use error::{RelayError, CONNECT_FAILURE_MESSAGE, TIMEOUT_MESSAGE};
pub use outcome::{extract_outcome, EvaluationResponse};
pub use router::evaluation_router;
