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

//! Shared types for the Leasehold tenant portal.
//!
//! This crate defines the contract between the browser fragment and the
//! portal backend: environment classification types, the telemetry wire
//! payload, the response envelope, and the closed enumerations mirrored
//! by the database schema. It is intentionally framework-agnostic — no
//! web-sys, no axum, no database types.

pub mod domain;
pub mod environment;
pub mod error;
pub mod responses;
pub mod telemetry;

pub use error::APIError;
pub use responses::APIResponse;
pub use telemetry::TelemetryPayload;
