/*
 * Copyright 2025 Leasehold Software
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Application error type that implements Axum's `IntoResponse`.
//!
//! Every error is returned as `APIResponse<APIError>` with
//! `success: false`, paired with the appropriate HTTP status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use leasehold_types::{APIError, APIResponse};

/// Application-level error that pairs an HTTP status code with an
/// [`APIError`].
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub body: APIError,
}

impl AppError {
    pub fn new(status: StatusCode, body: APIError) -> Self {
        Self { status, body }
    }

    pub fn invalid_payload(detail: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, APIError::invalid_payload(detail))
    }

    pub fn internal(detail: &str) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            APIError::internal_error(detail),
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = APIResponse::error(self.body);
        (self.status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        tracing::error!("Database error: {err}");
        Self::internal(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http_body_util::BodyExt;

    /// Consume the response body and deserialize it to
    /// `APIResponse<APIError>`.
    async fn read_error_body(resp: Response) -> (StatusCode, APIResponse<APIError>) {
        let status = resp.status();
        let bytes = Body::new(resp.into_body())
            .collect()
            .await
            .expect("collect body")
            .to_bytes();
        let parsed: APIResponse<APIError> =
            serde_json::from_slice(&bytes).expect("deserialize error body");
        (status, parsed)
    }

    #[tokio::test]
    async fn invalid_payload_produces_400_with_correct_code() {
        let err = AppError::invalid_payload("pixel_ratio must be a positive number");
        let resp = err.into_response();
        let (status, body) = read_error_body(resp).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.success);
        assert_eq!(body.result.code, "INVALID_PAYLOAD");
    }

    #[tokio::test]
    async fn internal_carries_engineering_error() {
        let err = AppError::internal("db exploded");
        let resp = err.into_response();
        let (status, body) = read_error_body(resp).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.result.code, "INTERNAL_ERROR");
        assert_eq!(
            body.result.engineering_error.as_deref(),
            Some("db exploded")
        );
    }
}
