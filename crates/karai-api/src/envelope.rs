//! Canonical response decoding.
//!
//! The backend's endpoints disagree on envelope shape: most wrap payloads in
//! `{ "success": true, "data": ... }` and failures in
//! `{ "success": false, "message": ... }`, some fail with `{ "error": ... }`,
//! and the session endpoint returns a bare payload. One decoder absorbs all
//! of them so the rest of the workspace sees a single `Result` contract.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Decode a response body against the canonical contract.
pub fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ApiError> {
    if body.is_empty() && status.is_success() {
        // 204-style responses decode as null.
        return from_payload(Value::Null);
    }
    let value: Value = match serde_json::from_slice(body) {
        Ok(v) => v,
        // Non-JSON body: classify by status alone.
        Err(_) => return Err(status_error(status, None)),
    };

    if let Some(success) = value.get("success").and_then(Value::as_bool) {
        if success {
            let data = value.get("data").cloned().unwrap_or(Value::Null);
            return from_payload(data);
        }
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_owned);
        return Err(status_error(status, message));
    }

    if let Some(error) = value.get("error") {
        if !error.is_null() {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .or_else(|| error.as_str())
                .map(str::to_owned);
            return Err(status_error(status, message));
        }
    }

    if !status.is_success() {
        return Err(status_error(status, None));
    }

    // Bare payload; a lone `data` field is unwrapped.
    if let Some(object) = value.as_object() {
        if object.len() == 1 {
            if let Some(data) = object.get("data") {
                return from_payload(data.clone());
            }
        }
    }
    from_payload(value)
}

fn from_payload<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::backend(format!("unexpected response shape: {e}")))
}

fn status_error(status: StatusCode, message: Option<String>) -> ApiError {
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Authorization,
        _ => ApiError::Backend {
            message: message.unwrap_or_else(|| format!("request failed with status {status}")),
        },
    }
}
