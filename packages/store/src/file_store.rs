//! # Filesystem-backed identity store
//!
//! [`FileStore`] is the [`IdentityStore`] used on native targets, where there
//! is no browser storage. Each key is one small file holding its value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # file containing the value, e.g. "userId"
//! ```
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base
//! (`~/.local/share/acme-notes/` on Linux).

use std::path::PathBuf;

use crate::identity::IdentityStore;

/// Filesystem-backed IdentityStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl IdentityStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.entry_path(key)).ok()?;
        let value = content.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    async fn set(&self, key: &str, value: &str) {
        let path = self.entry_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("Failed to persist {key} at {}: {e}", path.display());
        }
    }

    async fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = std::env::temp_dir().join(format!("acme_notes_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert!(store.get("userId").await.is_none());
        store.set("userId", "u-42").await;

        // Re-open from same directory
        let reopened = FileStore::new(dir.clone());
        assert_eq!(reopened.get("userId").await.as_deref(), Some("u-42"));

        reopened.remove("userId").await;
        assert!(store.get("userId").await.is_none());

        // Removing a missing key is fine
        reopened.remove("userId").await;

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
