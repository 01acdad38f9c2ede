//! # Session orchestration
//!
//! API-call sequencing for the application shell. [`load_session`] runs once
//! at startup; [`create`], [`update`] and [`destroy`] perform one service call
//! each and return the [`NoteMutation`] the shell applies to its latest
//! collection. Applying against the latest collection (not a snapshot taken
//! before the call) keeps out-of-order responses from losing each other's
//! changes.

use store::{IdentityStore, Note, NoteDraft, NoteMutation, NotesConfig, User};

use crate::client::NotesApi;
use crate::error::{ApiError, LoadError};
use crate::identity::resolve_user;

/// The user and their notes, as loaded at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub user: User,
    pub notes: Vec<Note>,
}

/// Resolve the user, then list their notes.
pub async fn load_session<A, S>(
    api: &A,
    identity: &S,
    config: &NotesConfig,
) -> Result<Session, LoadError>
where
    A: NotesApi,
    S: IdentityStore,
{
    let user = resolve_user(
        api,
        identity,
        &config.identity.storage_key,
        config.identity.max_attempts,
    )
    .await?;
    let notes = api.list_notes(&user.id).await?;
    tracing::info!("Loaded {} notes for {}", notes.len(), user.id);
    Ok(Session { user, notes })
}

pub async fn create<A: NotesApi>(
    api: &A,
    user_id: &str,
    draft: &NoteDraft,
) -> Result<NoteMutation, ApiError> {
    let note = api.create_note(user_id, draft).await?;
    Ok(NoteMutation::Created(note))
}

/// Send the note's current text and archived flag.
pub async fn update<A: NotesApi>(
    api: &A,
    user_id: &str,
    note: &Note,
) -> Result<NoteMutation, ApiError> {
    let updated = api.update_note(user_id, &note.id, &note.changes()).await?;
    Ok(NoteMutation::Updated(updated))
}

pub async fn destroy<A: NotesApi>(
    api: &A,
    user_id: &str,
    note: &Note,
) -> Result<NoteMutation, ApiError> {
    api.delete_note(user_id, &note.id).await?;
    Ok(NoteMutation::Destroyed(note.id.clone()))
}
