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

//! Leasehold backend API library.
//!
//! This crate provides the Axum router, application state, and
//! configuration for the portal backend. The binary entry point
//! (`main.rs`) is a thin wrapper that calls into this library.

pub mod config;
pub mod db;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;
