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

//! `device_analytics` table queries.

use chrono::{DateTime, Utc};
use leasehold_types::TelemetryPayload;
use sqlx::PgPool;

/// Row returned from the `device_analytics` table.
#[derive(Debug, sqlx::FromRow)]
#[allow(dead_code)]
pub struct DeviceAnalyticsRow {
    pub id: i64,
    pub browser: String,
    pub os: String,
    pub device_type: String,
    pub screen_width: i32,
    pub screen_height: i32,
    pub pixel_ratio: f64,
    pub user_agent: String,
    pub language: String,
    pub username: Option<String>,
    pub reported_at: Option<DateTime<Utc>>,
    pub received_at: DateTime<Utc>,
}

/// Store one environment report. `reported_at` is the parsed client
/// timestamp; `received_at` always comes from the server clock.
pub async fn insert(
    pool: &PgPool,
    payload: &TelemetryPayload,
    reported_at: Option<DateTime<Utc>>,
    username: Option<&str>,
) -> Result<DeviceAnalyticsRow, sqlx::Error> {
    sqlx::query_as::<_, DeviceAnalyticsRow>(
        r#"
        INSERT INTO device_analytics
            (browser, os, device_type, screen_width, screen_height, pixel_ratio,
             user_agent, language, username, reported_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING id, browser, os, device_type, screen_width, screen_height,
                  pixel_ratio, user_agent, language, username, reported_at, received_at
        "#,
    )
    .bind(&payload.browser)
    .bind(&payload.os)
    .bind(payload.device_type.to_string())
    .bind(payload.screen_width as i32)
    .bind(payload.screen_height as i32)
    .bind(payload.pixel_ratio)
    .bind(&payload.user_agent)
    .bind(&payload.language)
    .bind(username)
    .bind(reported_at)
    .fetch_one(pool)
    .await
}

/// Recent reports, newest first.
pub async fn list_recent(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<DeviceAnalyticsRow>, sqlx::Error> {
    sqlx::query_as::<_, DeviceAnalyticsRow>(
        r#"
        SELECT id, browser, os, device_type, screen_width, screen_height,
               pixel_ratio, user_agent, language, username, reported_at, received_at
        FROM device_analytics
        ORDER BY received_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}
