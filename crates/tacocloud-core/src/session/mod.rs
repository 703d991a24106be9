//! Session-scoped attribute storage.
//!
//! Handlers never touch a concrete store: they ask a [`SessionStore`] for an
//! attribute and get back the instance already bound to the session, or a
//! new one produced by the factory.

mod memory;

pub use memory::MemorySessionStore;

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};

/// A value bound to a session under a string key.
pub type SessionValue = Arc<dyn Any + Send + Sync>;

/// Capability to read or lazily create session attributes.
pub trait SessionStore: Send + Sync {
    /// Return the attribute stored under `key`, calling `factory` only when absent.
    ///
    /// Every call for the same session and key returns the same instance.
    fn get_or_create(
        &self,
        session_id: &str,
        key: &str,
        factory: &dyn Fn() -> SessionValue,
    ) -> Result<SessionValue>;
}

/// Typed access to a session attribute.
///
/// Fails with [`Error::AttributeType`] if the key already holds a value of another type.
pub fn session_attribute<T, F>(
    store: &dyn SessionStore,
    session_id: &str,
    key: &str,
    factory: F,
) -> Result<Arc<T>>
where
    T: Any + Send + Sync,
    F: Fn() -> T,
{
    let value = store.get_or_create(session_id, key, &|| Arc::new(factory()) as SessionValue)?;
    value.downcast::<T>().map_err(|_| Error::AttributeType {
        key: key.to_string(),
    })
}
