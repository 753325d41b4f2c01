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

//! Browser entry point. Initializes logging and schedules the footer
//! update; everything else lives in the library so tests can reach it.

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Debug).expect("failed to init console logger");
        leasehold_ui::footer::run();
    }
}
