// Copyright 2025 Leasehold Software
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for leasehold-ui browser tests.
//
// Provides footer-slot mount/cleanup helpers so individual test files
// stay focused on assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not
// every function is used in every compilation unit.
#![allow(dead_code)]

/// Create a `<span>` with the given id, attach it to `<body>`, and
/// return it.
pub fn create_slot(id: &str) -> web_sys::Element {
    let document = gloo_utils::document();
    let span = document.create_element("span").unwrap();
    span.set_id(id);
    document.body().unwrap().append_child(&span).unwrap();
    span
}

/// Remove an element from `<body>` so subsequent tests start clean.
pub fn cleanup(element: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(element)
        .ok();
}

/// Text content of the element with the given id, or `None` when the
/// element is absent.
pub fn slot_text(id: &str) -> Option<String> {
    gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|e| e.text_content())
}
