use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use httpmock::MockServer;
use serde_json::{json, Value};
use url::Url;

use crate::config::AlloyConfig;
use crate::evaluation::AlloyClient;

pub(super) const EVALUATIONS_PATH: &str = "/v1/evaluations";
// base64("workflow-token:workflow-secret")
pub(super) const EXPECTED_AUTHORIZATION: &str = "Basic d29ya2Zsb3ctdG9rZW46d29ya2Zsb3ctc2VjcmV0";

pub(super) fn alloy_config(server: &MockServer) -> AlloyConfig {
    let url = Url::parse(&server.url(EVALUATIONS_PATH)).expect("mock url parses");
    AlloyConfig::new(
        url,
        Some("workflow-token".to_string()),
        Some("workflow-secret".to_string()),
    )
    .with_timeout(Duration::from_secs(5))
}

pub(super) fn client(config: AlloyConfig) -> Arc<AlloyClient> {
    Arc::new(AlloyClient::new(config).expect("client builds"))
}

/// A loopback address with nothing listening on it.
pub(super) fn refused_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    Url::parse(&format!("http://{addr}{EVALUATIONS_PATH}")).expect("refused url parses")
}

pub(super) fn form_submission() -> Value {
    json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "addressLine1": "12 St James's Square",
        "addressLine2": "",
        "city": "Richmond",
        "state": "VA",
        "zipCode": "23220",
        "country": "US",
        "dob": "1985-12-10",
        "ssn": "123456789",
        "email": "ada@example.com"
    })
}

pub(super) fn alloy_payload() -> Value {
    json!({
        "name_first": "Ada",
        "name_last": "Lovelace",
        "address_line_1": "12 St James's Square",
        "address_line_2": "",
        "address_city": "Richmond",
        "address_state": "VA",
        "address_postal_code": "23220",
        "address_country_code": "US",
        "birth_date": "1985-12-10",
        "document_ssn": "123456789",
        "email_address": "ada@example.com"
    })
}

pub(super) fn evaluate_request(body: &Value) -> Request<Body> {
    Request::post("/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).expect("serialize body")))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
