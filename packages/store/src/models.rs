//! # Domain models for users and notes
//!
//! Defines the data structures exchanged with the notes REST service. These
//! types are `Serialize + Deserialize` so the API client can decode responses
//! and encode request bodies directly.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | The note owner. Wire form is `{ "id", "fullName" }`. |
//! | [`Note`] | A user-owned text record with an `archived` flag. The id is assigned by the server. |
//! | [`NoteDraft`] | Body of a create request: just the text. |
//! | [`NoteChanges`] | Body of an update request: the full mutable state of a note. |
//!
//! Notes are treated as values. Edits go through [`Note::with_text`] and
//! [`Note::toggled`], which return a new note and leave the original untouched.

use serde::{Deserialize, Serialize};

/// The owner of a set of notes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
}

/// A note as stored by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub archived: bool,
}

impl Note {
    /// Copy of this note with the archived flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            archived: !self.archived,
            ..self.clone()
        }
    }

    /// Copy of this note with new text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    /// The fields sent on update.
    pub fn changes(&self) -> NoteChanges {
        NoteChanges {
            text: self.text.clone(),
            archived: self.archived,
        }
    }
}

/// Request body for creating a note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub text: String,
}

/// Request body for updating a note.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteChanges {
    pub text: String,
    pub archived: bool,
}

/// Build a draft from form input. Empty input yields no draft.
///
/// The create form's submit handler returns early on `None`, so this is the
/// check that keeps empty notes off the network.
pub fn draft_from_input(text: &str) -> Option<NoteDraft> {
    if text.is_empty() {
        None
    } else {
        Some(NoteDraft {
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note() -> Note {
        Note {
            id: "n-1".to_string(),
            text: "buy milk".to_string(),
            archived: false,
        }
    }

    #[test]
    fn test_toggled_flips_only_archived() {
        let original = note();
        let toggled = original.toggled();
        assert!(toggled.archived);
        assert_eq!(toggled.id, original.id);
        assert_eq!(toggled.text, original.text);
        assert_eq!(toggled.toggled(), original);
        // Source value is untouched
        assert!(!original.archived);
    }

    #[test]
    fn test_with_text_builds_new_value() {
        let original = note();
        let edited = original.with_text("buy oat milk");
        assert_eq!(edited.text, "buy oat milk");
        assert_eq!(edited.id, "n-1");
        assert!(!edited.archived);
        assert_eq!(original.text, "buy milk");
    }

    #[test]
    fn test_draft_from_input_rejects_empty() {
        assert_eq!(draft_from_input(""), None);
        assert_eq!(
            draft_from_input("hello"),
            Some(NoteDraft {
                text: "hello".to_string()
            })
        );
        // Only emptiness is checked
        assert!(draft_from_input("  ").is_some());
    }

    #[test]
    fn test_user_wire_format() {
        let user: User = serde_json::from_str(
            r#"{"id":"u-7","fullName":"Ada Lovelace","email":"ada@acme.com"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "u-7");
        assert_eq!(user.full_name, "Ada Lovelace");
    }

    #[test]
    fn test_note_archived_defaults_to_false() {
        let note: Note = serde_json::from_str(r#"{"id":"n-2","text":"hi","userId":"u-7"}"#).unwrap();
        assert!(!note.archived);
    }

    #[test]
    fn test_note_changes_carry_full_state() {
        let changes = note().toggled().changes();
        assert_eq!(
            changes,
            NoteChanges {
                text: "buy milk".to_string(),
                archived: true,
            }
        );
    }
}
