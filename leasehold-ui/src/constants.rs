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

/// Same-origin endpoint the telemetry report is POSTed to.
pub const ANALYTICS_ENDPOINT: &str = "/api/log-analytics";

/// Footer slot element ids. Every slot is optional; pages that do not
/// render one are skipped silently.
pub const FOOTER_BROWSER_ID: &str = "footer-browser";
pub const FOOTER_OS_ID: &str = "footer-os";
pub const FOOTER_DEVICE_ID: &str = "footer-device";
pub const FOOTER_SCREEN_ID: &str = "footer-screen";

/// Path substrings served to anonymous visitors; telemetry is not
/// reported from them.
pub const ANONYMOUS_PATH_MARKERS: [&str; 2] = ["/login", "/setup"];
