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

//! Environment detection.
//!
//! Classifies the visitor's browser, operating system, device class, and
//! screen geometry from the identifying strings the browser exposes.
//! The classifiers are pure functions over borrowed strings so they can
//! be unit-tested off-browser; the ambient readers at the bottom gather
//! their inputs from `web_sys` and are compiled for wasm only.
//!
//! A detection miss is never an error: every classifier falls back to a
//! documented `Unknown` value.

use leasehold_types::environment::{
    BrowserInfo, BrowserName, DeviceType, OsInfo, OsName, ScreenInfo,
};
use leasehold_types::TelemetryPayload;
use once_cell::sync::Lazy;
use regex::Regex;

static EDGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Edg/([0-9.]+)").unwrap());
static OPERA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"OPR/([0-9.]+)").unwrap());
static CHROME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Chrome/([0-9.]+)").unwrap());
static SAFARI_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Version/([0-9.]+).*Safari").unwrap());
static FIREFOX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Firefox/([0-9.]+)").unwrap());
static MSIE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"MSIE ([0-9.]+)").unwrap());
static TRIDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Trident/.*rv:([0-9.]+)").unwrap());

static IOS_DEVICE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"iPhone|iPad|iPod").unwrap());
static IOS_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"OS (\d+(?:[_.]\d+)*) like Mac OS X").unwrap());
static ANDROID_VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Android ([0-9.]+)").unwrap());
static MAC_VERSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mac OS X (\d+(?:[_.]\d+)*)").unwrap());
static WINDOWS_NT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"Windows NT (\d+\.\d+)").unwrap());

static TABLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)iPad|Tablet|Kindle|Silk|PlayBook").unwrap());
static MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Mobi|iPhone|iPod|Android|BlackBerry|Opera Mini|IEMobile").unwrap());

/// Classify the browser family and version from a user-agent string.
///
/// The matcher table is priority-ordered and the first match wins: Edge
/// and Opera also advertise a Chrome marker, and Chrome advertises a
/// Safari marker, so the ordering carries the disambiguation. The
/// version is the matching pattern's capture group, empty when the
/// pattern carried none.
pub fn detect_browser(ua: &str) -> BrowserInfo {
    let matchers: [(BrowserName, &Regex); 7] = [
        (BrowserName::Edge, &EDGE_RE),
        (BrowserName::Opera, &OPERA_RE),
        (BrowserName::Chrome, &CHROME_RE),
        (BrowserName::Safari, &SAFARI_RE),
        (BrowserName::Firefox, &FIREFOX_RE),
        (BrowserName::Ie, &MSIE_RE),
        (BrowserName::Ie, &TRIDENT_RE),
    ];
    for (name, re) in matchers {
        if let Some(caps) = re.captures(ua) {
            let version = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            return BrowserInfo::new(name, version);
        }
    }
    BrowserInfo::unknown()
}

/// Classify the operating system from the user-agent and platform
/// strings. Mobile markers are checked before desktop platform strings
/// because Android reports a Linux platform and iPads report a Mac one.
pub fn detect_os(ua: &str, platform: &str) -> OsInfo {
    // Some in-app browsers on Windows phones spoofed iPhone tokens while
    // setting an MSStream flag; those are not iOS.
    if IOS_DEVICE_RE.is_match(ua) && !ua.contains("MSStream") {
        let version = IOS_VERSION_RE
            .captures(ua)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace('_', "."))
            .unwrap_or_default();
        return OsInfo::new(OsName::Ios, version);
    }
    if ua.contains("Android") {
        let version = ANDROID_VERSION_RE
            .captures(ua)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        return OsInfo::new(OsName::Android, version);
    }
    if platform.starts_with("Mac") {
        let version = MAC_VERSION_RE
            .captures(ua)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().replace('_', "."))
            .unwrap_or_default();
        return OsInfo::new(OsName::MacOs, version);
    }
    if platform.starts_with("Win") || ua.contains("Windows") {
        let version = WINDOWS_NT_RE
            .captures(ua)
            .and_then(|c| c.get(1))
            .map(|m| windows_marketing_name(m.as_str()))
            .unwrap_or_default();
        return OsInfo::new(OsName::Windows, version);
    }
    if platform.contains("Linux") {
        return OsInfo::new(OsName::Linux, "");
    }
    OsInfo::unknown()
}

/// Map an NT kernel version to the marketing name. NT 10.0 is ambiguous
/// between Windows 10 and 11, which hide the difference from the UA.
fn windows_marketing_name(nt: &str) -> String {
    match nt {
        "10.0" => "10/11",
        "6.3" => "8.1",
        "6.2" => "8",
        "6.1" => "7",
        _ => "",
    }
    .to_string()
}

/// Classify the device class. Tablet tokens are checked first
/// (case-insensitively) because tablet user agents also match the
/// generic mobile tokens.
pub fn detect_device_type(ua: &str) -> DeviceType {
    if TABLET_RE.is_match(ua) {
        DeviceType::Tablet
    } else if MOBILE_RE.is_match(ua) {
        DeviceType::Mobile
    } else {
        DeviceType::Desktop
    }
}

/// Everything detected in one pass over the ambient environment.
#[derive(Clone, Debug, PartialEq)]
pub struct EnvironmentSnapshot {
    pub browser: BrowserInfo,
    pub os: OsInfo,
    pub device: DeviceType,
    pub screen: ScreenInfo,
    pub user_agent: String,
    pub language: String,
}

impl EnvironmentSnapshot {
    /// Build the wire payload for this snapshot. `timestamp` comes from
    /// the caller so the snapshot itself stays a pure value.
    pub fn to_payload(&self, timestamp: String) -> TelemetryPayload {
        TelemetryPayload {
            browser: self.browser.to_string(),
            os: self.os.to_string(),
            device_type: self.device,
            screen_width: self.screen.width,
            screen_height: self.screen.height,
            pixel_ratio: self.screen.pixel_ratio,
            user_agent: self.user_agent.clone(),
            language: self.language.clone(),
            timestamp,
        }
    }
}

/// Read the screen geometry. The device pixel ratio defaults to 1.0
/// when the browser reports a non-finite or non-positive value.
#[cfg(target_arch = "wasm32")]
pub fn screen_info(window: &web_sys::Window) -> ScreenInfo {
    let mut info = ScreenInfo::default();
    if let Ok(screen) = window.screen() {
        if let Ok(width) = screen.width() {
            info.width = width.max(0) as u32;
        }
        if let Ok(height) = screen.height() {
            info.height = height.max(0) as u32;
        }
    }
    let ratio = window.device_pixel_ratio();
    if ratio.is_finite() && ratio > 0.0 {
        info.pixel_ratio = ratio;
    }
    info
}

/// Gather a full snapshot from the ambient window. Runs the classifiers
/// exactly once; missing navigator fields degrade to empty strings.
#[cfg(target_arch = "wasm32")]
pub fn snapshot() -> anyhow::Result<EnvironmentSnapshot> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window found"))?;
    let navigator = window.navigator();

    let user_agent = navigator.user_agent().unwrap_or_default();
    let platform = navigator.platform().unwrap_or_default();
    let language = navigator.language().unwrap_or_default();

    Ok(EnvironmentSnapshot {
        browser: detect_browser(&user_agent),
        os: detect_os(&user_agent, &platform),
        device: detect_device_type(&user_agent),
        screen: screen_info(&window),
        user_agent,
        language,
    })
}
