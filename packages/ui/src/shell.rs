//! Application shell: the single owner of the current user and the note collection.
//!
//! [`ShellProvider`] loads the session once on mount and exposes a [`Shell`]
//! handle through context. Views read state from it and request mutations
//! through [`Shell::create`], [`Shell::update`] and [`Shell::destroy`]; nothing
//! else writes the collection.

use std::future::Future;

use api::{session, ApiClient, ApiError, NotesApi};
use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures::channel::oneshot;
use store::{Note, NoteDraft, NoteMutation, NotesConfig, User};

use crate::platform::make_identity_store;

#[derive(Clone, Debug, PartialEq)]
pub enum ShellStatus {
    Loading,
    Ready,
    /// Startup gave up; carries the reason shown to the user.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ShellState {
    pub user: Option<User>,
    pub notes: Vec<Note>,
    pub status: ShellStatus,
}

impl Default for ShellState {
    fn default() -> Self {
        Self {
            user: None,
            notes: Vec::new(),
            status: ShellStatus::Loading,
        }
    }
}

/// Handle to the shell state and the API client. Cheap to copy into closures.
#[derive(Clone, Copy, PartialEq)]
pub struct Shell {
    state: Signal<ShellState>,
    client: Signal<ApiClient>,
}

impl Shell {
    pub fn state(&self) -> Signal<ShellState> {
        self.state
    }

    fn client(&self) -> ApiClient {
        self.client.peek().clone()
    }

    fn user_id(&self) -> Option<String> {
        self.state.peek().user.as_ref().map(|u| u.id.clone())
    }

    fn apply(&self, mutation: NoteMutation) {
        let mut state = self.state;
        let next = mutation.apply(&state.peek().notes);
        state.write().notes = next;
    }

    /// Create a note and append it. The error is returned for inline display.
    ///
    /// The request and the append run in the root scope; only the wait for the
    /// outcome belongs to the caller, so leaving the Create view keeps the note.
    pub async fn create(self, draft: NoteDraft) -> Result<(), ApiError> {
        let (reply, outcome) = oneshot::channel();
        spawn_forever(run_and_reply(
            async move {
                let user_id = self.user_id().ok_or(ApiError::MissingUser)?;
                let mutation = session::create(&self.client(), &user_id, &draft).await?;
                self.apply(mutation);
                Ok::<(), ApiError>(())
            },
            reply,
        ));
        outcome.await.unwrap_or(Err(ApiError::Interrupted))
    }

    /// Save the note's text and archived flag. Failures are only logged.
    ///
    /// Runs in the root scope so that navigating away does not drop the result.
    pub fn update(self, note: Note) {
        spawn_forever(async move {
            let result = match self.user_id() {
                Some(user_id) => session::update(&self.client(), &user_id, &note).await,
                None => Err(ApiError::MissingUser),
            };
            match result {
                Ok(mutation) => self.apply(mutation),
                Err(e) => tracing::error!("Failed to update note {}: {e}", note.id),
            }
        });
    }

    /// Delete the note. Failures are only logged.
    pub fn destroy(self, note: Note) {
        spawn_forever(async move {
            let result = match self.user_id() {
                Some(user_id) => session::destroy(&self.client(), &user_id, &note).await,
                None => Err(ApiError::MissingUser),
            };
            match result {
                Ok(mutation) => self.apply(mutation),
                Err(e) => tracing::error!("Failed to delete note {}: {e}", note.id),
            }
        });
    }

    /// Fresh copy of a user's notes straight from the service.
    pub async fn fetch_notes(&self, user_id: &str) -> Result<Vec<Note>, ApiError> {
        self.client().list_notes(user_id).await
    }
}

/// Drive `work` to completion, then hand its output to `reply`.
///
/// A receiver that has gone away does not stop the work.
async fn run_and_reply<T>(work: impl Future<Output = T>, reply: oneshot::Sender<T>) {
    let output = work.await;
    let _ = reply.send(output);
}

/// Consume the [`Shell`] from context.
pub fn use_shell() -> Shell {
    use_context::<Shell>()
}

/// Id of the current user; only notifies subscribers when the user changes.
pub fn use_user_id() -> Memo<Option<String>> {
    let shell = use_shell();
    use_memo(move || shell.state().read().user.as_ref().map(|u| u.id.clone()))
}

/// Loads the session on mount and provides the [`Shell`] to its children.
#[component]
pub fn ShellProvider(config: NotesConfig, children: Element) -> Element {
    let mut state = use_signal(ShellState::default);
    let client = use_signal({
        let config = config.clone();
        move || ApiClient::from_config(&config)
    });

    let _loader = use_resource(move || {
        let config = config.clone();
        async move {
            let api = client.peek().clone();
            let identity = make_identity_store();
            match session::load_session(&api, &identity, &config).await {
                Ok(loaded) => state.set(ShellState {
                    user: Some(loaded.user),
                    notes: loaded.notes,
                    status: ShellStatus::Ready,
                }),
                Err(e) => {
                    tracing::error!("Startup failed: {e}");
                    state.set(ShellState {
                        status: ShellStatus::Failed(e.to_string()),
                        ..ShellState::default()
                    });
                }
            }
        }
    });

    use_context_provider(|| Shell { state, client });

    rsx! {
        {children}
    }
}

/// Page heading with the user's name, or the startup failure.
#[component]
pub fn ShellHeader() -> Element {
    let shell = use_shell();
    let state = shell.state();
    let state = state.read();

    let name = state
        .user
        .as_ref()
        .map(|u| u.full_name.clone())
        .unwrap_or_default();

    rsx! {
        h3 { "Acme Note--taker for {name}" }
        if let ShellStatus::Failed(reason) = &state.status {
            div {
                class: "error",
                "{reason}"
            }
        }
    }
}
