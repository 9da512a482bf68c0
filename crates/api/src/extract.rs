use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use techcell_validation::{Record, RequestValidator};

use crate::errors;

/// JSON body extractor that only yields records which passed validation.
///
/// The validator is taken from an `Extension<RequestValidator>` layer when one
/// is installed, otherwise a default-configured one is used. The body is
/// parsed as JSON regardless of `Content-Type`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedJson<R>(pub R);

#[async_trait]
impl<R, S> FromRequest<S> for ValidatedJson<R>
where
    R: Record,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let validator = req
            .extensions()
            .get::<RequestValidator>()
            .cloned()
            .unwrap_or_default();

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(record = R::NAME, error = %e, "rejecting non-JSON body");
            errors::json_error(StatusCode::BAD_REQUEST, "invalid_json", e.to_string())
        })?;

        validator
            .validate::<R>(&value)
            .map(ValidatedJson)
            .map_err(errors::validation_error_to_response)
    }
}
