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

//! Axum router configuration for the Leasehold backend.

pub mod analytics;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(analytics::health))
        .route("/api/log-analytics", post(analytics::log_analytics))
}
