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

//! Telemetry reporter.
//!
//! Posts the environment report to the backend as a best-effort side
//! channel. Failures of any kind are logged and swallowed; nothing here
//! may ever affect page behavior.

use crate::constants::ANONYMOUS_PATH_MARKERS;
#[cfg(target_arch = "wasm32")]
use leasehold_types::TelemetryPayload;

/// Heuristic "logged in" gate. The portal serves `/login` and `/setup`
/// to anonymous visitors and everything else behind a session, so the
/// page path approximates session state. This is only an approximation;
/// it has no knowledge of the actual session.
pub fn should_report(path: &str) -> bool {
    !ANONYMOUS_PATH_MARKERS
        .iter()
        .any(|marker| path.contains(marker))
}

/// Send one telemetry report. Fire-and-forget: the caller spawns this
/// and never observes the outcome except through the console log.
#[cfg(target_arch = "wasm32")]
pub async fn log_analytics(payload: TelemetryPayload) {
    use crate::constants::ANALYTICS_ENDPOINT;
    use reqwasm::http::Request;

    let path = gloo_utils::window()
        .location()
        .pathname()
        .unwrap_or_default();
    if !should_report(&path) {
        log::debug!("analytics: not reporting from anonymous page {path}");
        return;
    }

    let body = match serde_json::to_string(&payload) {
        Ok(body) => body,
        Err(e) => {
            log::warn!("analytics: failed to serialize payload: {e}");
            return;
        }
    };

    match Request::post(ANALYTICS_ENDPOINT)
        .header("Content-Type", "application/json")
        .body(body)
        .send()
        .await
    {
        Ok(response) => match response.status() {
            200..=299 => log::debug!("analytics: report accepted"),
            status => log::warn!("analytics: server returned status {status}"),
        },
        Err(e) => {
            log::warn!("analytics: network error: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_and_setup_paths_are_suppressed() {
        assert!(!should_report("/login"));
        assert!(!should_report("/auth/login?next=/dashboard"));
        assert!(!should_report("/setup"));
    }

    #[test]
    fn session_paths_are_reported() {
        assert!(should_report("/"));
        assert!(should_report("/dashboard"));
        assert!(should_report("/tenant/request/new"));
    }
}
