//! Request orchestration: credentials check, body decoding, validation, rendering,
//! delivery, and the JSON response contract shared by every form.

mod router;

use std::collections::BTreeMap;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::clock::Clock;
use crate::config::{ConfigError, MailConfig};
use crate::forms::FormKind;
use crate::mail::{MailTransport, OutboundMail, TransportError};
use crate::record::{RecordError, SubmissionRecord};
use crate::validation::ValidationErrors;

pub use router::form_router;

const VALIDATION_FAILED: &str = "Validation failed. Please check the errors below.";
const BODY_MISSING: &str = "Request body is missing";
const INVALID_JSON: &str = "Invalid JSON format in request body.";
const CONFIG_FAILED: &str = "Server configuration error. Please contact support.";
const SEND_FAILED: &str = "Failed to send email. Please try again later.";
const UNEXPECTED_FAILURE: &str = "An unexpected error occurred. Please try again later.";

/// Inbound request descriptor; only `body` is read.
///
/// `body` is either a JSON-encoded string or an already decoded object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct InvocationRequest {
    #[serde(default)]
    pub body: Option<Value>,
}

impl InvocationRequest {
    pub fn from_json_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(body.into())),
        }
    }

    /// Wrap raw HTTP bytes; an empty payload is treated as no body at all.
    pub fn from_raw_body(bytes: &[u8]) -> Result<Self, RecordError> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from_json_body(text))
    }
}

/// Outbound response descriptor: status, headers, and a JSON-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InvocationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl InvocationResponse {
    fn json(status: StatusCode, payload: &Value) -> Self {
        Self {
            status_code: status.as_u16(),
            headers: default_headers(),
            body: payload.to_string(),
        }
    }

    pub fn success(form: FormKind) -> Self {
        Self::json(StatusCode::OK, &json!({ "message": form.success_message() }))
    }

    pub fn from_error(error: &RelayError) -> Self {
        Self::json(error.status(), &error.response_body())
    }

    /// CORS preflight answer for browsers posting cross-origin.
    pub fn preflight() -> Self {
        let mut headers = default_headers();
        headers.insert(
            "Access-Control-Allow-Methods".to_string(),
            "POST, OPTIONS".to_string(),
        );
        headers.insert(
            "Access-Control-Allow-Headers".to_string(),
            "Content-Type".to_string(),
        );
        Self {
            status_code: StatusCode::OK.as_u16(),
            headers,
            body: "{}".to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Decoded `body`, or `Value::Null` when it is not JSON.
    pub fn body_json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

impl IntoResponse for InvocationResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut response = (status, self.body).into_response();
        let headers = response.headers_mut();
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }
        response
    }
}

/// Every way a submission can end without a 200.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("smtp credentials not configured: {0}")]
    Config(#[source] ConfigError),
    #[error("request body is missing")]
    MissingBody,
    #[error("invalid json in request body: {0}")]
    Malformed(#[from] RecordError),
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(ValidationErrors),
    #[error("mail transport failed: {0}")]
    Transport(#[source] TransportError),
    #[error("unexpected failure: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MissingBody | RelayError::Malformed(_) | RelayError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            RelayError::Config(_) | RelayError::Transport(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body returned to the caller. Server-side detail stays in the logs.
    pub fn response_body(&self) -> Value {
        match self {
            RelayError::Config(_) => json!({
                "message": CONFIG_FAILED,
                "error": "SMTP credentials missing",
            }),
            RelayError::MissingBody => json!({
                "message": BODY_MISSING,
                "errors": {},
            }),
            RelayError::Malformed(err) => json!({
                "message": INVALID_JSON,
                "error": err.to_string(),
            }),
            RelayError::Validation(errors) => json!({
                "message": VALIDATION_FAILED,
                "errors": errors,
            }),
            RelayError::Transport(_) => json!({
                "message": SEND_FAILED,
                "error": "SMTP error",
            }),
            RelayError::Internal(_) => json!({
                "message": UNEXPECTED_FAILURE,
                "error": "Internal server error",
            }),
        }
    }
}

impl From<TransportError> for RelayError {
    fn from(value: TransportError) -> Self {
        if value.is_delivery_failure() {
            RelayError::Transport(value)
        } else {
            RelayError::Internal(value.to_string())
        }
    }
}

/// Decode the request body into a record.
///
/// Absent, `null`, `false`, zero, `""`, `{}` and `[]` bodies are "missing". Strings are
/// decoded as JSON; anything else must already be an object.
pub fn decode_body(body: Option<Value>) -> Result<SubmissionRecord, RelayError> {
    let body = match body {
        None | Some(Value::Null) | Some(Value::Bool(false)) => {
            return Err(RelayError::MissingBody)
        }
        Some(Value::Number(number)) if number.as_f64() == Some(0.0) => {
            return Err(RelayError::MissingBody)
        }
        Some(Value::String(text)) if text.is_empty() => return Err(RelayError::MissingBody),
        Some(Value::Object(map)) if map.is_empty() => return Err(RelayError::MissingBody),
        Some(Value::Array(items)) if items.is_empty() => return Err(RelayError::MissingBody),
        Some(body) => body,
    };

    let record = match body {
        Value::String(text) => SubmissionRecord::from_json_str(&text)?,
        other => SubmissionRecord::from_json(other)?,
    };
    Ok(record)
}

/// Runs one submission through the pipeline and always produces a response.
pub struct SubmissionHandler<T, C> {
    config: MailConfig,
    transport: T,
    clock: C,
}

impl<T, C> SubmissionHandler<T, C>
where
    T: MailTransport,
    C: Clock,
{
    pub fn new(config: MailConfig, transport: T, clock: C) -> Self {
        Self {
            config,
            transport,
            clock,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn handle(&self, form: FormKind, request: InvocationRequest) -> InvocationResponse {
        match self.process(form, request) {
            Ok(()) => InvocationResponse::success(form),
            Err(err) => {
                log_failure(form, &err);
                InvocationResponse::from_error(&err)
            }
        }
    }

    /// Answer a request that failed before it could be handed to [`Self::handle`].
    pub fn reject(&self, form: FormKind, error: RelayError) -> InvocationResponse {
        log_failure(form, &error);
        InvocationResponse::from_error(&error)
    }

    fn process(&self, form: FormKind, request: InvocationRequest) -> Result<(), RelayError> {
        self.config.credentials().map_err(RelayError::Config)?;

        let record = decode_body(request.body)?;
        let report = form
            .review(&record, &self.clock)
            .map_err(RelayError::Validation)?;

        let mail = OutboundMail {
            from: self.config.from.clone(),
            to: self.config.to.clone(),
            subject: form.subject(&record),
            body: report.into_string(),
        };
        self.transport.send(&mail)?;

        tracing::info!(form = %form, subject = %mail.subject, "email sent successfully");
        Ok(())
    }
}

fn log_failure(form: FormKind, error: &RelayError) {
    match error {
        RelayError::Config(err) => {
            tracing::error!(form = %form, error = %err, "smtp credentials not configured");
        }
        RelayError::MissingBody => {
            tracing::info!(form = %form, "request body is missing");
        }
        RelayError::Malformed(err) => {
            tracing::warn!(form = %form, error = %err, "request body is not valid json");
        }
        RelayError::Validation(errors) => {
            let fields: Vec<&str> = errors.fields().collect();
            tracing::info!(form = %form, fields = ?fields, "submission failed validation");
        }
        RelayError::Transport(err) => {
            tracing::error!(form = %form, error = %err, "failed to send email");
        }
        RelayError::Internal(detail) => {
            tracing::error!(form = %form, error = %detail, "unexpected failure handling submission");
        }
    }
}
