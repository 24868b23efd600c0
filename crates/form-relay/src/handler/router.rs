use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::{InvocationRequest, InvocationResponse, RelayError, SubmissionHandler};
use crate::clock::Clock;
use crate::forms::FormKind;
use crate::mail::MailTransport;

/// Router builder exposing one POST endpoint per form.
pub fn form_router<T, C>(handler: Arc<SubmissionHandler<T, C>>) -> Router
where
    T: MailTransport + 'static,
    C: Clock + 'static,
{
    Router::new()
        .route(
            "/api/v1/forms/:form",
            post(submit_handler::<T, C>).options(preflight_handler),
        )
        .with_state(handler)
}

pub(crate) async fn submit_handler<T, C>(
    State(handler): State<Arc<SubmissionHandler<T, C>>>,
    Path(form): Path<String>,
    body: Bytes,
) -> Response
where
    T: MailTransport + 'static,
    C: Clock + 'static,
{
    let form = match form.parse::<FormKind>() {
        Ok(form) => form,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::NOT_FOUND, axum::Json(payload)).into_response();
        }
    };

    let request = match InvocationRequest::from_raw_body(&body) {
        Ok(request) => request,
        Err(err) => return handler.reject(form, RelayError::from(err)).into_response(),
    };

    // SMTP delivery blocks; keep it off the async workers.
    match tokio::task::spawn_blocking(move || handler.handle(form, request)).await {
        Ok(response) => response.into_response(),
        Err(err) => {
            tracing::error!(form = %form, error = %err, "submission handler aborted");
            InvocationResponse::from_error(&RelayError::Internal(err.to_string())).into_response()
        }
    }
}

pub(crate) async fn preflight_handler() -> Response {
    InvocationResponse::preflight().into_response()
}
