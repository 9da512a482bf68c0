use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use techcell_core::{UnknownStatusError, ValidationError};
use techcell_orders::OrderStatus;

pub fn validation_error_to_response(err: ValidationError) -> axum::response::Response {
    let message = err.to_string();
    (
        StatusCode::BAD_REQUEST,
        axum::Json(json!({
            "error": "validation_error",
            "message": message,
            "violations": err.violations().iter().map(|v| json!({
                "field": v.field,
                "reason": v.reason,
                "message": format!("{v}"),
            })).collect::<Vec<_>>(),
        })),
    )
        .into_response()
}

pub fn unknown_status_to_response(err: UnknownStatusError) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "unknown_status", err.to_string())
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

/// Parse a status taken from a path or query parameter.
pub fn parse_order_status(s: &str) -> Result<OrderStatus, axum::response::Response> {
    OrderStatus::parse(s).map_err(unknown_status_to_response)
}
