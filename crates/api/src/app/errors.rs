use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use rationboard_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    tracing::warn!(error = %err, "request rejected");
    match err {
        DomainError::InvalidArgument(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg),
        DomainError::NotFound(name) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("item not found: {name}"))
        }
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn query_rejection_to_response(rejection: QueryRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_request", rejection.body_text())
}

pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_request", rejection.body_text())
}
