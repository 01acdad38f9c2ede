//! # Identity resolution
//!
//! Establishes which user's notes are shown for the session. The user id is
//! persisted in an [`IdentityStore`]; when it is missing a random user is
//! requested from the service and its id is stored.
//!
//! A stored id that no longer resolves (the user was deleted server-side) is
//! cleared and a random user is requested within the same attempt. An attempt
//! fails only when no user could be obtained at all, and after `max_attempts`
//! failed attempts resolution stops with [`IdentityError::Exhausted`] instead
//! of looping.

use store::{IdentityStore, User};

use crate::client::NotesApi;
use crate::error::{ApiError, IdentityError};

/// Resolve the session's user, creating one if needed.
pub async fn resolve_user<A, S>(
    api: &A,
    identity: &S,
    key: &str,
    max_attempts: u32,
) -> Result<User, IdentityError>
where
    A: NotesApi,
    S: IdentityStore,
{
    let max_attempts = max_attempts.max(1);
    let mut attempts = 0;
    loop {
        attempts += 1;
        let error = match lookup(api, identity, key).await {
            Ok(user) => return Ok(user),
            Err(e) => e,
        };
        if attempts >= max_attempts {
            return Err(IdentityError::Exhausted {
                attempts,
                source: error,
            });
        }
    }
}

async fn lookup<A, S>(api: &A, identity: &S, key: &str) -> Result<User, ApiError>
where
    A: NotesApi,
    S: IdentityStore,
{
    if let Some(id) = identity.get(key).await {
        match api.user_by_id(&id).await {
            Ok(user) => {
                tracing::info!("Resumed user {}", user.id);
                return Ok(user);
            }
            Err(e) => {
                tracing::warn!("Stored user {id} did not resolve, clearing it: {e}");
                identity.remove(key).await;
            }
        }
    }

    let user = api.random_user().await?;
    identity.set(key, &user.id).await;
    tracing::info!("Created random user {}", user.id);
    Ok(user)
}
