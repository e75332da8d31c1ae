use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;

use crate::error::ApiError;

/// Serialize a payload into the standard JSON response.
pub fn json<T: Serialize>(status: StatusCode, payload: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(payload)?.into())
        .map_err(Box::new)?)
}

/// Render an ApiError as its fixed error envelope.
pub fn error(err: &ApiError) -> Result<Response<Body>, Error> {
    tracing::error!("request failed ({}): {}", err.status_code(), err);
    Ok(Response::builder()
        .status(err.status_code())
        .header("Content-Type", "application/json")
        .body(
            serde_json::json!({ "error": err.to_string() })
                .to_string()
                .into(),
        )
        .map_err(Box::new)?)
}
