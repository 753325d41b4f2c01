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

//! leasehold-ui library root.
//!
//! Re-exports public modules so that integration tests (under `tests/`)
//! can import them. The binary entry-point lives in `main.rs`.

pub mod analytics;
pub mod constants;
pub mod environment;
pub mod footer;
