//! Platform glue shared by every frontend.
//!
//! - [`make_identity_store`] returns the [`store::IdentityStore`] for the target:
//!   **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStorageStore`];
//!   **Native**: one file per key under `<data_dir>/acme-notes/` via [`store::FileStore`].
//! - [`load_config`] builds the [`store::NotesConfig`], applying the override points
//!   described below.

use store::NotesConfig;

/// Environment variable overriding the API base URL.
pub const API_URL_VAR: &str = "NOTES_API_URL";

/// Create the platform-appropriate persisted identity store.
pub fn make_identity_store() -> impl store::IdentityStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorageStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("acme-notes");
        store::FileStore::new(base)
    }
}

/// Build the client configuration.
///
/// - **Web**: defaults, with the base URL taken from `NOTES_API_URL` at compile time if set.
/// - **Native**: `notes.toml` in the working directory if present, then the
///   `NOTES_API_URL` environment variable (`.env` files are honoured).
pub fn load_config() -> NotesConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match option_env!("NOTES_API_URL") {
            Some(url) => NotesConfig::default().with_base_url(url),
            None => NotesConfig::default(),
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();

        let mut config = match std::fs::read_to_string(NotesConfig::filename()) {
            Ok(text) => NotesConfig::from_toml(&text).unwrap_or_else(|e| {
                tracing::warn!("Ignoring invalid {}: {e}", NotesConfig::filename());
                NotesConfig::default()
            }),
            Err(_) => NotesConfig::default(),
        };
        if let Ok(url) = std::env::var(API_URL_VAR) {
            config = config.with_base_url(url);
        }
        config
    }
}
