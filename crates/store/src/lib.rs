//! `schoolgate-store` — persisted session-token slot.
//!
//! The token is the only shared mutable state in the session core, and it is
//! single-writer in practice: login, logout, and the session manager's scrub
//! of an unusable token. The store is synchronous; guard evaluation never
//! waits on it.

pub mod file;
pub mod memory;

pub use file::{FileStore, StoreError};
pub use memory::MemoryStore;

/// Storage boundary for the session token.
///
/// One opaque string slot. The token's content is the decoder's concern; the
/// store never inspects it.
pub trait SessionStore {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;

    /// Store a newly issued token, replacing any previous one.
    fn set(&mut self, token: &str);

    /// Delete the stored token. A no-op when nothing is stored.
    fn clear(&mut self);
}
