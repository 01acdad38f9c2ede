//! # API crate — client for the Acme notes REST service
//!
//! Everything that talks to the remote service lives here. The UI never issues
//! HTTP requests itself; it goes through the session functions, which go
//! through [`NotesApi`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`NotesApi`] trait and the `reqwest`-backed [`ApiClient`] |
//! | [`error`] | [`ApiError`], [`IdentityError`], [`LoadError`] |
//! | [`identity`] | Bounded identity resolution over a persisted user id |
//! | [`session`] | Startup load and the create/update/destroy call sequencing |

pub mod client;
pub mod error;
pub mod identity;
pub mod session;

#[cfg(test)]
mod fake;

pub use client::{ApiClient, NotesApi};
pub use error::{ApiError, IdentityError, LoadError};
pub use identity::resolve_user;
pub use session::{load_session, Session};

pub use store::{Note, NoteChanges, NoteDraft, NoteMutation, NotesConfig, User};
