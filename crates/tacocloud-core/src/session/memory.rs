use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use parking_lot::Mutex;

use super::{SessionStore, SessionValue};
use crate::error::{Error, Result};

/// One user session and its attributes.
struct Session {
    last_activity: Mutex<Instant>,
    attributes: DashMap<String, SessionValue>,
}

impl Session {
    fn new() -> Self {
        Self {
            last_activity: Mutex::new(Instant::now()),
            attributes: DashMap::new(),
        }
    }

    fn touch(&self) {
        *self.last_activity.lock() = Instant::now();
    }

    fn idle(&self) -> Duration {
        self.last_activity.lock().elapsed()
    }

    fn is_expired(&self, timeout: Duration) -> bool {
        self.idle() > timeout
    }
}

/// In-process session store keyed by random session ids.
pub struct MemorySessionStore {
    sessions: DashMap<String, Arc<Session>>,
    max_sessions: usize,
    idle_timeout: Duration,
}

impl MemorySessionStore {
    pub fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            max_sessions,
            idle_timeout,
        }
    }

    /// Open a new, empty session and return its id.
    ///
    /// Expired sessions still held by the store do not count against the limit.
    pub fn create_session(&self) -> Result<String> {
        if self.sessions.len() >= self.max_sessions {
            let cleaned = self.cleanup_expired();
            if cleaned > 0 {
                tracing::debug!(cleaned, "Dropped expired sessions to make room");
            }
            if self.sessions.len() >= self.max_sessions {
                return Err(Error::TooManySessions(self.max_sessions));
            }
        }

        let id = uuid::Uuid::new_v4().to_string();
        self.sessions.insert(id.clone(), Arc::new(Session::new()));
        tracing::debug!(session = %id, "Opened session");

        Ok(id)
    }

    /// Whether `id` names a session that has not yet expired.
    pub fn has_session(&self, id: &str) -> bool {
        self.live_session(id).is_some()
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn max_sessions(&self) -> usize {
        self.max_sessions
    }

    /// Drop sessions idle for longer than the configured timeout.
    pub fn cleanup_expired(&self) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, session| !session.is_expired(self.idle_timeout));
        before - self.sessions.len()
    }

    fn live_session(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions
            .get(id)
            .map(|entry| entry.value().clone())
            .filter(|session| !session.is_expired(self.idle_timeout))
    }
}

impl SessionStore for MemorySessionStore {
    fn get_or_create(
        &self,
        session_id: &str,
        key: &str,
        factory: &dyn Fn() -> SessionValue,
    ) -> Result<SessionValue> {
        let session = self
            .live_session(session_id)
            .ok_or_else(|| Error::SessionNotFound(session_id.to_string()))?;
        session.touch();

        let value = session
            .attributes
            .entry(key.to_string())
            .or_insert_with(|| {
                tracing::debug!(session = %session_id, key, "Creating session attribute");
                factory()
            })
            .value()
            .clone();

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::session_attribute;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> MemorySessionStore {
        MemorySessionStore::new(4, Duration::from_secs(60))
    }

    #[test]
    fn test_factory_runs_once_per_key() {
        let store = store();
        let id = store.create_session().unwrap();
        let calls = AtomicUsize::new(0);
        let factory = || {
            calls.fetch_add(1, Ordering::SeqCst);
            Arc::new(7u32) as SessionValue
        };

        let first = store.get_or_create(&id, "answer", &factory).unwrap();
        let second = store.get_or_create(&id, "answer", &factory).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = store();
        let a = store.create_session().unwrap();
        let b = store.create_session().unwrap();
        assert_ne!(a, b);

        let in_a = session_attribute(&store, &a, "name", || String::from("a")).unwrap();
        let in_b = session_attribute(&store, &b, "name", || String::from("b")).unwrap();

        assert_eq!(*in_a, "a");
        assert_eq!(*in_b, "b");
    }

    #[test]
    fn test_unknown_session() {
        let store = store();
        let err = session_attribute(&store, "missing", "key", || 1u8).unwrap_err();
        assert!(matches!(err, Error::SessionNotFound(_)));
    }

    #[test]
    fn test_attribute_type_mismatch() {
        let store = store();
        let id = store.create_session().unwrap();
        session_attribute(&store, &id, "key", || 1u8).unwrap();

        let err = session_attribute(&store, &id, "key", String::new).unwrap_err();
        assert!(matches!(err, Error::AttributeType { .. }));
    }

    #[test]
    fn test_max_sessions() {
        let store = MemorySessionStore::new(2, Duration::from_secs(60));
        store.create_session().unwrap();
        store.create_session().unwrap();

        assert!(matches!(
            store.create_session(),
            Err(Error::TooManySessions(2))
        ));
    }

    #[test]
    fn test_expired_sessions_make_room_for_new_ones() {
        let store = MemorySessionStore::new(1, Duration::from_millis(5));
        let stale = store.create_session().unwrap();
        std::thread::sleep(Duration::from_millis(20));

        let fresh = store.create_session().unwrap();
        assert_ne!(stale, fresh);
        assert!(store.has_session(&fresh));
        assert_eq!(store.session_count(), 1);
    }

    #[test]
    fn test_live_sessions_still_count_against_limit() {
        let store = MemorySessionStore::new(1, Duration::from_secs(60));
        let id = store.create_session().unwrap();

        assert!(matches!(
            store.create_session(),
            Err(Error::TooManySessions(1))
        ));
        assert!(store.has_session(&id));
    }

    #[test]
    fn test_cleanup_expired() {
        let store = MemorySessionStore::new(4, Duration::from_millis(5));
        let id = store.create_session().unwrap();
        std::thread::sleep(Duration::from_millis(20));

        assert!(!store.has_session(&id));
        assert_eq!(store.cleanup_expired(), 1);
        assert_eq!(store.session_count(), 0);
    }

    #[test]
    fn test_cleanup_keeps_active_sessions() {
        let store = store();
        store.create_session().unwrap();
        assert_eq!(store.cleanup_expired(), 0);
        assert_eq!(store.session_count(), 1);
    }
}
