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

//! API error types.
//!
//! Every failed API response is returned as `APIResponse<APIError>` with
//! `success: false`.

use serde::{Deserialize, Serialize};

/// Structured error returned in the `result` field of a failed
/// [`crate::APIResponse`].
///
/// The `code` field is a machine-readable identifier (e.g.
/// `"INVALID_PAYLOAD"`). The `message` field is a human-readable
/// description. The `engineering_error` field carries debug-level detail
/// that should be stripped or redacted in production.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIError {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn invalid_payload(detail: &str) -> Self {
        Self {
            code: "INVALID_PAYLOAD".to_string(),
            message: format!("Invalid telemetry payload: {detail}"),
            engineering_error: None,
        }
    }

    pub fn internal_error(detail: &str) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "An internal error occurred".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}
