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

//! Axum extractor that reads the portal session's `username` cookie.
//!
//! Unlike a real auth guard this never rejects: telemetry must be
//! accepted from every page load, and the cookie is used only to
//! attribute the report when one happens to be present.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::convert::Infallible;

/// Extractor that resolves the session username from the `username`
/// cookie, or `None` when the cookie is absent or empty.
///
/// Usage in a handler:
/// ```ignore
/// async fn my_handler(SessionUser(username): SessionUser) { ... }
/// ```
#[derive(Debug)]
pub struct SessionUser(pub Option<String>);

impl<S: Send + Sync> FromRequestParts<S> for SessionUser {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        for pair in cookie_header.split(';') {
            let pair = pair.trim();
            if let Some(value) = pair.strip_prefix("username=") {
                let username = value.trim();
                if !username.is_empty() {
                    return Ok(SessionUser(Some(username.to_string())));
                }
            }
        }

        Ok(SessionUser(None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    /// Helper: run the SessionUser extractor against a request with the
    /// given cookie header.
    async fn extract_session(cookie_header: Option<&str>) -> SessionUser {
        let mut builder = Request::builder().uri("/test").method("POST");
        if let Some(val) = cookie_header {
            builder = builder.header(header::COOKIE, val);
        }
        let req = builder.body(()).unwrap();
        let (mut parts, _body) = req.into_parts();
        SessionUser::from_request_parts(&mut parts, &())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn username_cookie_is_attributed() {
        let user = extract_session(Some("theme=dark; username=alice")).await;
        assert_eq!(user.0.as_deref(), Some("alice"));
    }

    #[tokio::test]
    async fn missing_cookie_header_is_anonymous() {
        let user = extract_session(None).await;
        assert!(user.0.is_none());
    }

    #[tokio::test]
    async fn empty_username_cookie_is_anonymous() {
        let user = extract_session(Some("username=")).await;
        assert!(user.0.is_none());
    }
}
