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

//! Footer updater.
//!
//! Takes one environment snapshot per page load, writes the summary into
//! whichever footer slots the current page renders, and hands the same
//! snapshot to the telemetry reporter. Pages without footer slots are
//! fine; each slot is looked up independently and skipped when absent.

use leasehold_types::environment::{BrowserInfo, DeviceType, OsInfo, ScreenInfo};

/// Icon-prefixed browser label, e.g. `"🌐 Chrome 120.0"`.
pub fn browser_label(browser: &BrowserInfo) -> String {
    format!("{} {}", browser.icon, browser)
}

/// Icon-prefixed OS label, e.g. `"🪟 Windows 10/11"`.
pub fn os_label(os: &OsInfo) -> String {
    format!("{} {}", os.icon, os)
}

/// Device label with a per-class icon chosen at format time; the
/// device class itself carries none.
pub fn device_label(device: DeviceType) -> String {
    let icon = match device {
        DeviceType::Tablet => "📟",
        DeviceType::Mobile => "📱",
        DeviceType::Desktop => "💻",
    };
    format!("{icon} {device}")
}

/// Screen label, e.g. `"🖥️ 2560×1440 @2x"`. The ratio suffix is
/// omitted at the default ratio of 1.
pub fn screen_label(screen: &ScreenInfo) -> String {
    if screen.pixel_ratio == 1.0 {
        format!("🖥️ {}×{}", screen.width, screen.height)
    } else {
        format!("🖥️ {}×{} @{}x", screen.width, screen.height, screen.pixel_ratio)
    }
}

/// Fill every footer slot the page renders and report the snapshot.
///
/// Runs the detectors once, sets the text of each of the four slots
/// that exists, and spawns the telemetry send without awaiting it. A
/// page with zero slots gets no DOM mutation at all.
#[cfg(target_arch = "wasm32")]
pub fn update_footer(document: &web_sys::Document) {
    use crate::constants::{
        FOOTER_BROWSER_ID, FOOTER_DEVICE_ID, FOOTER_OS_ID, FOOTER_SCREEN_ID,
    };

    let snapshot = match crate::environment::snapshot() {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("footer: environment unavailable: {e}");
            return;
        }
    };

    log::debug!(
        "footer: detected {} / {} / {}",
        snapshot.browser,
        snapshot.os,
        snapshot.device
    );

    set_slot(document, FOOTER_BROWSER_ID, &browser_label(&snapshot.browser));
    set_slot(document, FOOTER_OS_ID, &os_label(&snapshot.os));
    set_slot(document, FOOTER_DEVICE_ID, &device_label(snapshot.device));
    set_slot(document, FOOTER_SCREEN_ID, &screen_label(&snapshot.screen));

    let timestamp = String::from(js_sys::Date::new_0().to_iso_string());
    let payload = snapshot.to_payload(timestamp);
    wasm_bindgen_futures::spawn_local(crate::analytics::log_analytics(payload));
}

#[cfg(target_arch = "wasm32")]
fn set_slot(document: &web_sys::Document, id: &str, text: &str) {
    if let Some(element) = document.get_element_by_id(id) {
        element.set_text_content(Some(text));
    }
}

/// Run the footer update exactly once per page load.
///
/// The slots live in server-rendered markup, so when the document is
/// still loading the update is deferred to `DOMContentLoaded`;
/// otherwise it runs immediately.
#[cfg(target_arch = "wasm32")]
pub fn run() {
    use gloo::events::EventListener;

    let document = gloo_utils::document();
    if document.ready_state() == "loading" {
        let listener = EventListener::once(&document, "DOMContentLoaded", move |_| {
            update_footer(&gloo_utils::document());
        });
        listener.forget();
    } else {
        update_footer(&document);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leasehold_types::environment::{BrowserName, OsName};

    #[test]
    fn labels_are_icon_prefixed() {
        let label = browser_label(&BrowserInfo::new(BrowserName::Firefox, "121.0"));
        assert_eq!(label, "🦊 Firefox 121.0");

        let label = os_label(&OsInfo::new(OsName::Linux, ""));
        assert_eq!(label, "🐧 Linux");
    }

    #[test]
    fn unknown_browser_gets_placeholder_icon_and_no_version() {
        assert_eq!(browser_label(&BrowserInfo::unknown()), "❓ Unknown");
    }

    #[test]
    fn device_label_picks_icon_per_class() {
        assert_eq!(device_label(DeviceType::Desktop), "💻 Desktop");
        assert_eq!(device_label(DeviceType::Mobile), "📱 Mobile");
        assert_eq!(device_label(DeviceType::Tablet), "📟 Tablet");
    }

    #[test]
    fn screen_label_hides_the_default_pixel_ratio() {
        let base = ScreenInfo {
            width: 1920,
            height: 1080,
            pixel_ratio: 1.0,
        };
        assert_eq!(screen_label(&base), "🖥️ 1920×1080");

        let retina = ScreenInfo {
            pixel_ratio: 2.0,
            ..base
        };
        assert_eq!(screen_label(&retina), "🖥️ 1920×1080 @2x");
    }
}
