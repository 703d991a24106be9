use crate::config::WebConfig;
use crate::views::Views;
use std::sync::Arc;
use tacocloud_core::MemorySessionStore;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<MemorySessionStore>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(config: &WebConfig) -> Result<Self, minijinja::Error> {
        Ok(Self {
            sessions: Arc::new(MemorySessionStore::new(
                config.max_sessions,
                config.session_timeout,
            )),
            views: Arc::new(Views::new()?),
        })
    }
}
