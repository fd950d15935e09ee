use crate::request::{Body, HttpRequest};
use anyhow::{Context, anyhow};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskConfig {
    pub endpoint_url: String,
}

/// Builds the question POST. The endpoint expects `{"question": ...}` and
/// answers with `{"answer": ...}`; no authentication is involved.
pub fn build_ask_request(cfg: &AskConfig, question: &str) -> HttpRequest {
    let payload = json!({ "question": question });

    HttpRequest {
        method: "POST".into(),
        url: cfg.endpoint_url.clone(),
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: Body::Json(payload.to_string()),
    }
}

/// Rejects endpoint URLs the executor could not dispatch to.
pub fn validate_endpoint_url(raw: &str) -> anyhow::Result<url::Url> {
    let parsed = url::Url::parse(raw).with_context(|| format!("invalid endpoint URL: {raw}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(anyhow!("unsupported endpoint scheme: {other}")),
    }
}
