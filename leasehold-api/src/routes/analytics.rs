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

//! Handlers for the telemetry endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use leasehold_types::responses::{HealthResponse, LogAnalyticsResponse};
use leasehold_types::{APIResponse, TelemetryPayload};
use tracing::info;

use crate::db::analytics as db_analytics;
use crate::error::AppError;
use crate::session::SessionUser;
use crate::state::AppState;

const MAX_USER_AGENT_LEN: usize = 1024;

fn validate_payload(payload: &TelemetryPayload) -> Result<(), AppError> {
    if !payload.pixel_ratio.is_finite() || payload.pixel_ratio <= 0.0 {
        return Err(AppError::invalid_payload(
            "pixel_ratio must be a positive number",
        ));
    }
    if payload.user_agent.len() > MAX_USER_AGENT_LEN {
        return Err(AppError::invalid_payload(&format!(
            "user_agent cannot exceed {MAX_USER_AGENT_LEN} characters"
        )));
    }
    Ok(())
}

/// Parse the client's ISO-8601 timestamp. `None` on failure: telemetry
/// is best-effort and a broken client clock must not lose the row.
fn parse_client_timestamp(timestamp: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// POST /api/log-analytics
pub async fn log_analytics(
    State(state): State<AppState>,
    SessionUser(username): SessionUser,
    Json(payload): Json<TelemetryPayload>,
) -> Result<Json<APIResponse<LogAnalyticsResponse>>, AppError> {
    validate_payload(&payload)?;

    let reported_at = parse_client_timestamp(&payload.timestamp);
    let row = db_analytics::insert(&state.db, &payload, reported_at, username.as_deref()).await?;

    info!(
        "Stored environment report {} ({} / {} / {}) from {}",
        row.id,
        payload.browser,
        payload.os,
        payload.device_type,
        username.as_deref().unwrap_or("anonymous"),
    );

    Ok(Json(APIResponse::ok(LogAnalyticsResponse { id: row.id })))
}

/// GET /healthz
pub async fn health() -> Json<APIResponse<HealthResponse>> {
    Json(APIResponse::ok(HealthResponse {
        status: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasehold_types::environment::DeviceType;

    fn payload() -> TelemetryPayload {
        TelemetryPayload {
            browser: "Chrome 120.0".to_string(),
            os: "Linux".to_string(),
            device_type: DeviceType::Desktop,
            screen_width: 1920,
            screen_height: 1080,
            pixel_ratio: 1.0,
            user_agent: "Mozilla/5.0".to_string(),
            language: "en-US".to_string(),
            timestamp: "2025-06-01T12:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn well_formed_payload_validates() {
        assert!(validate_payload(&payload()).is_ok());
    }

    #[test]
    fn non_positive_pixel_ratio_is_rejected() {
        let mut bad = payload();
        bad.pixel_ratio = 0.0;
        assert!(validate_payload(&bad).is_err());

        bad.pixel_ratio = f64::NAN;
        assert!(validate_payload(&bad).is_err());
    }

    #[test]
    fn oversized_user_agent_is_rejected() {
        let mut bad = payload();
        bad.user_agent = "x".repeat(MAX_USER_AGENT_LEN + 1);
        assert!(validate_payload(&bad).is_err());
    }

    #[test]
    fn iso8601_timestamp_parses_and_garbage_does_not() {
        assert!(parse_client_timestamp("2025-06-01T12:00:00.000Z").is_some());
        assert!(parse_client_timestamp("2025-06-01T12:00:00+02:00").is_some());
        assert!(parse_client_timestamp("last tuesday").is_none());
    }
}
