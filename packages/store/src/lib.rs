pub mod config;
pub mod identity;
pub mod models;
pub mod notes;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::NotesConfig;
pub use identity::IdentityStore;
pub use models::{Note, NoteChanges, NoteDraft, User};
pub use notes::{NoteCounts, NoteMutation};
