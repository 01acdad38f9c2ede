//! # Browser `localStorage` identity store
//!
//! [`LocalStorageStore`] is the [`IdentityStore`] used on the **web platform**.
//! Values live in `window.localStorage`, so the user id survives page reloads
//! and is shared by every tab on the same origin.
//!
//! ## Error handling
//!
//! `localStorage` can be missing (privacy modes, sandboxed iframes) or full.
//! Reads degrade to `None` and writes are logged and dropped, so the worst
//! case is a fresh random user on the next load.

use web_sys::Storage;

use crate::identity::IdentityStore;

/// `window.localStorage`-backed IdentityStore.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl IdentityStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            tracing::warn!("localStorage unavailable, {key} not persisted");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {key} to localStorage");
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = self.storage() {
            let _ = storage.remove_item(key);
        }
    }
}
