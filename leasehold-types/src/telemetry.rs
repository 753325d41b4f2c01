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

//! Telemetry wire payload.
//!
//! The body of `POST /api/log-analytics`. Field names are the wire
//! contract; the backend and any downstream consumers key off them, so
//! they must not be renamed.

use serde::{Deserialize, Serialize};

use crate::environment::DeviceType;

/// One environment report, constructed fresh per page load.
///
/// `browser` and `os` carry the human-readable labels (family plus
/// version when known, e.g. `"Chrome 120.0"`, `"Windows 10/11"`).
/// `timestamp` is an ISO-8601 string produced by the client clock.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TelemetryPayload {
    pub browser: String,
    pub os: String,
    pub device_type: DeviceType,
    pub screen_width: u32,
    pub screen_height: u32,
    pub pixel_ratio: f64,
    pub user_agent: String,
    pub language: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let payload = TelemetryPayload {
            browser: "Chrome 120.0".to_string(),
            os: "macOS 10.15.7".to_string(),
            device_type: DeviceType::Desktop,
            screen_width: 2560,
            screen_height: 1440,
            pixel_ratio: 2.0,
            user_agent: "Mozilla/5.0".to_string(),
            language: "en-US".to_string(),
            timestamp: "2025-06-01T12:00:00.000Z".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        for key in [
            "browser",
            "os",
            "device_type",
            "screen_width",
            "screen_height",
            "pixel_ratio",
            "user_agent",
            "language",
            "timestamp",
        ] {
            assert!(value.get(key).is_some(), "missing wire field {key}");
        }
        assert_eq!(value["device_type"], "Desktop");
        assert_eq!(value["screen_width"], 2560);
    }
}
