//! In-memory stand-in for the notes service, used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use store::{Note, NoteChanges, NoteDraft, User};

use crate::client::NotesApi;
use crate::error::ApiError;

#[derive(Default)]
pub(crate) struct FakeApi {
    users: RefCell<Vec<User>>,
    notes: RefCell<HashMap<String, Vec<Note>>>,
    next_id: Cell<u32>,
    /// Number of upcoming `random_user` calls that fail.
    pub(crate) random_failures: Cell<u32>,
    pub(crate) calls: RefCell<Vec<String>>,
}

impl FakeApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_user(self, id: &str, full_name: &str, notes: &[(&str, bool)]) -> Self {
        self.users.borrow_mut().push(User {
            id: id.to_string(),
            full_name: full_name.to_string(),
        });
        let notes = notes
            .iter()
            .map(|(text, archived)| Note {
                id: self.fresh_id("note"),
                text: text.to_string(),
                archived: *archived,
            })
            .collect();
        self.notes.borrow_mut().insert(id.to_string(), notes);
        self
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn fresh_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}-{id}")
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }

    fn not_found() -> ApiError {
        ApiError::from_body(404, r#"{"message":"not found"}"#)
    }
}

impl NotesApi for FakeApi {
    async fn random_user(&self) -> Result<User, ApiError> {
        self.record("random_user".to_string());
        if self.random_failures.get() > 0 {
            self.random_failures.set(self.random_failures.get() - 1);
            return Err(ApiError::from_body(503, ""));
        }
        let user = User {
            id: self.fresh_id("user"),
            full_name: "Random Person".to_string(),
        };
        self.users.borrow_mut().push(user.clone());
        self.notes.borrow_mut().insert(user.id.clone(), Vec::new());
        Ok(user)
    }

    async fn user_by_id(&self, id: &str) -> Result<User, ApiError> {
        self.record(format!("user_by_id {id}"));
        self.users
            .borrow()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn list_notes(&self, user_id: &str) -> Result<Vec<Note>, ApiError> {
        self.record(format!("list_notes {user_id}"));
        self.notes
            .borrow()
            .get(user_id)
            .cloned()
            .ok_or_else(Self::not_found)
    }

    async fn create_note(&self, user_id: &str, draft: &NoteDraft) -> Result<Note, ApiError> {
        self.record(format!("create_note {user_id}"));
        if draft.text.is_empty() {
            return Err(ApiError::from_body(500, r#"{"message":"text is required"}"#));
        }
        let note = Note {
            id: self.fresh_id("note"),
            text: draft.text.clone(),
            archived: false,
        };
        self.notes
            .borrow_mut()
            .get_mut(user_id)
            .ok_or_else(Self::not_found)?
            .push(note.clone());
        Ok(note)
    }

    async fn update_note(
        &self,
        user_id: &str,
        note_id: &str,
        changes: &NoteChanges,
    ) -> Result<Note, ApiError> {
        self.record(format!("update_note {user_id} {note_id}"));
        let mut notes = self.notes.borrow_mut();
        let note = notes
            .get_mut(user_id)
            .and_then(|notes| notes.iter_mut().find(|n| n.id == note_id))
            .ok_or_else(Self::not_found)?;
        note.text = changes.text.clone();
        note.archived = changes.archived;
        Ok(note.clone())
    }

    async fn delete_note(&self, user_id: &str, note_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_note {user_id} {note_id}"));
        let mut notes = self.notes.borrow_mut();
        let notes = notes.get_mut(user_id).ok_or_else(Self::not_found)?;
        let before = notes.len();
        notes.retain(|n| n.id != note_id);
        if notes.len() == before {
            return Err(Self::not_found());
        }
        Ok(())
    }
}

impl FakeApi {
    /// Simulate the service deleting a user.
    pub(crate) fn remove_user(&self, id: &str) {
        self.users.borrow_mut().retain(|u| u.id != id);
        self.notes.borrow_mut().remove(id);
    }
}
