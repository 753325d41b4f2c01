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

//! Browser integration tests for the footer updater.
//!
//! These run against the real browser environment, so they assert shape
//! rather than exact detected values: the harness browser decides what
//! the labels say.

#![cfg(target_arch = "wasm32")]

mod support;

use leasehold_ui::constants::{
    FOOTER_BROWSER_ID, FOOTER_DEVICE_ID, FOOTER_OS_ID, FOOTER_SCREEN_ID,
};
use leasehold_ui::footer::update_footer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn fills_every_slot_the_page_renders() {
    let slots: Vec<_> = [
        FOOTER_BROWSER_ID,
        FOOTER_OS_ID,
        FOOTER_DEVICE_ID,
        FOOTER_SCREEN_ID,
    ]
    .into_iter()
    .map(support::create_slot)
    .collect();

    update_footer(&gloo_utils::document());

    for id in [
        FOOTER_BROWSER_ID,
        FOOTER_OS_ID,
        FOOTER_DEVICE_ID,
        FOOTER_SCREEN_ID,
    ] {
        let text = support::slot_text(id).expect("slot exists");
        assert!(!text.is_empty(), "slot {id} was not filled");
    }

    // The device label is one of the three classes.
    let device = support::slot_text(FOOTER_DEVICE_ID).unwrap();
    assert!(
        device.ends_with("Tablet") || device.ends_with("Mobile") || device.ends_with("Desktop"),
        "unexpected device label: {device}"
    );

    for slot in &slots {
        support::cleanup(slot);
    }
}

#[wasm_bindgen_test]
fn missing_slots_are_skipped_independently() {
    // Only the OS slot exists; the other three lookups must be no-ops.
    let os_slot = support::create_slot(FOOTER_OS_ID);

    update_footer(&gloo_utils::document());

    assert!(support::slot_text(FOOTER_OS_ID).is_some_and(|t| !t.is_empty()));
    assert!(support::slot_text(FOOTER_BROWSER_ID).is_none());
    assert!(support::slot_text(FOOTER_DEVICE_ID).is_none());
    assert!(support::slot_text(FOOTER_SCREEN_ID).is_none());

    support::cleanup(&os_slot);
}

#[wasm_bindgen_test]
fn zero_matching_slots_does_not_mutate_or_throw() {
    let document = gloo_utils::document();
    let children_before = document.body().unwrap().child_element_count();

    // No slots mounted; the telemetry send it spawns targets a relative
    // endpoint the test server does not implement, which must also be
    // swallowed silently.
    update_footer(&document);

    assert_eq!(document.body().unwrap().child_element_count(), children_before);
}
