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

//! Browser environment classification types.
//!
//! These are the results of inspecting the user-agent and platform
//! strings: a browser family plus version, an operating system plus
//! version, a device class, and the screen geometry. Each value is built
//! once per detection pass and never mutated.

use serde::{Deserialize, Serialize};

/// Browser families we can recognize from a user-agent string.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BrowserName {
    Chrome,
    Safari,
    Firefox,
    Edge,
    Opera,
    Ie,
    Unknown,
}

impl BrowserName {
    /// Icon shown next to the browser label in the footer.
    pub fn icon(&self) -> &'static str {
        match self {
            BrowserName::Chrome => "🌐",
            BrowserName::Safari => "🧭",
            BrowserName::Firefox => "🦊",
            BrowserName::Edge => "🌊",
            BrowserName::Opera => "🎭",
            BrowserName::Ie => "📘",
            BrowserName::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for BrowserName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserName::Chrome => write!(f, "Chrome"),
            BrowserName::Safari => write!(f, "Safari"),
            BrowserName::Firefox => write!(f, "Firefox"),
            BrowserName::Edge => write!(f, "Edge"),
            BrowserName::Opera => write!(f, "Opera"),
            BrowserName::Ie => write!(f, "Internet Explorer"),
            BrowserName::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A classified browser: family, version string (possibly empty), icon.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BrowserInfo {
    pub name: BrowserName,
    pub version: String,
    pub icon: String,
}

impl BrowserInfo {
    pub fn new(name: BrowserName, version: impl Into<String>) -> Self {
        Self {
            name,
            version: version.into(),
            icon: name.icon().to_string(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(BrowserName::Unknown, "")
    }
}

impl std::fmt::Display for BrowserInfo {
    /// Human-readable label, version suffix omitted when empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// Operating systems we can recognize.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum OsName {
    Ios,
    Android,
    MacOs,
    Windows,
    Linux,
    Unknown,
}

impl OsName {
    pub fn icon(&self) -> &'static str {
        match self {
            OsName::Ios => "📱",
            OsName::Android => "🤖",
            OsName::MacOs => "🍎",
            OsName::Windows => "🪟",
            OsName::Linux => "🐧",
            OsName::Unknown => "❓",
        }
    }
}

impl std::fmt::Display for OsName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OsName::Ios => write!(f, "iOS"),
            OsName::Android => write!(f, "Android"),
            OsName::MacOs => write!(f, "macOS"),
            OsName::Windows => write!(f, "Windows"),
            OsName::Linux => write!(f, "Linux"),
            OsName::Unknown => write!(f, "Unknown"),
        }
    }
}

/// A classified operating system.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct OsInfo {
    pub name: OsName,
    pub version: String,
    pub icon: String,
}

impl OsInfo {
    pub fn new(name: OsName, version: impl Into<String>) -> Self {
        Self {
            name,
            version: version.into(),
            icon: name.icon().to_string(),
        }
    }

    pub fn unknown() -> Self {
        Self::new(OsName::Unknown, "")
    }
}

impl std::fmt::Display for OsInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.name, self.version)
        }
    }
}

/// Device class. Serializes as `"Tablet"` / `"Mobile"` / `"Desktop"`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeviceType {
    Tablet,
    Mobile,
    Desktop,
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceType::Tablet => write!(f, "Tablet"),
            DeviceType::Mobile => write!(f, "Mobile"),
            DeviceType::Desktop => write!(f, "Desktop"),
        }
    }
}

/// Screen geometry in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Default for ScreenInfo {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            pixel_ratio: 1.0,
        }
    }
}
