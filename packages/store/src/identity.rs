//! # Persisted identity — durable key-value storage for the user id
//!
//! The client remembers which user it belongs to across reloads by keeping the
//! user id under a fixed key. [`IdentityStore`] abstracts that storage so the
//! identity resolver can run against browser `localStorage`
//! ([`crate::LocalStorageStore`]), the filesystem ([`crate::FileStore`]), or an
//! in-memory map in tests ([`crate::MemoryStore`]).
//!
//! Implementations swallow storage errors: a read failure looks like a missing
//! value and a failed write is logged and dropped. The worst outcome is a fresh
//! random user on the next load.

/// Async interface over a string key-value store.
pub trait IdentityStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}
