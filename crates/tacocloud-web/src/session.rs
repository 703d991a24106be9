//! Cookie-based session identification.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};
use tacocloud_core::MemorySessionStore;

use crate::error::{Result, WebError};

/// Cookie carrying the session id.
pub const SESSION_COOKIE: &str = "TACOSESSION";

/// The session a request belongs to.
#[derive(Debug, Clone)]
pub struct ResolvedSession {
    pub id: String,
    /// Opened by this request; the response must hand out the cookie.
    pub is_new: bool,
}

impl ResolvedSession {
    /// Find the live session named by the request cookie, or open a new one.
    pub fn resolve(store: &MemorySessionStore, headers: &HeaderMap) -> Result<Self> {
        if let Some(id) = cookie_value(headers, SESSION_COOKIE) {
            if store.has_session(id) {
                return Ok(Self {
                    id: id.to_string(),
                    is_new: false,
                });
            }
            tracing::debug!(session = %id, "Ignoring unknown or expired session cookie");
        }

        let id = store.create_session()?;
        Ok(Self { id, is_new: true })
    }

    /// Replace this session with a newly opened one.
    pub fn reopen(&mut self, store: &MemorySessionStore) -> Result<()> {
        self.id = store.create_session()?;
        self.is_new = true;
        Ok(())
    }

    /// Add `Set-Cookie` to `response` when the session was just opened.
    pub fn attach_cookie(&self, response: &mut Response) -> Result<()> {
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            let value = HeaderValue::from_str(&cookie)
                .map_err(|e| WebError::Internal(format!("invalid session cookie: {e}")))?;
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        Ok(())
    }
}

fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Background task to periodically drop expired sessions
pub async fn cleanup_task(store: Arc<MemorySessionStore>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    loop {
        ticker.tick().await;
        let cleaned = store.cleanup_expired();
        if cleaned > 0 {
            tracing::info!("Cleaned up {} expired sessions", cleaned);
        }
    }
}
