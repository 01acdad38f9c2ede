//! # Note collection operations
//!
//! The in-memory collection held by the application shell is never edited in
//! place. Every change is expressed as a [`NoteMutation`] and applied with
//! [`NoteMutation::apply`], which builds a new `Vec` from the previous one by
//! appending, mapping or filtering.
//!
//! Read-side helpers used by the list and navigation views also live here:
//! [`filter_by_archived`] and [`NoteCounts`].

use crate::models::Note;

/// A confirmed change to the collection, produced after the service accepted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NoteMutation {
    /// A new note returned by the service; goes to the end.
    Created(Note),
    /// The service's copy of an updated note; replaces the note with the same id.
    Updated(Note),
    /// Id of a deleted note.
    Destroyed(String),
}

impl NoteMutation {
    /// Build the next collection from `notes`.
    pub fn apply(self, notes: &[Note]) -> Vec<Note> {
        match self {
            NoteMutation::Created(note) => {
                let mut next = notes.to_vec();
                next.push(note);
                next
            }
            NoteMutation::Updated(updated) => notes
                .iter()
                .map(|note| {
                    if note.id == updated.id {
                        updated.clone()
                    } else {
                        note.clone()
                    }
                })
                .collect(),
            NoteMutation::Destroyed(id) => notes
                .iter()
                .filter(|note| note.id != id)
                .cloned()
                .collect(),
        }
    }
}

/// Notes whose archived flag equals `archived`, in collection order.
pub fn filter_by_archived(notes: &[Note], archived: bool) -> Vec<&Note> {
    notes.iter().filter(|note| note.archived == archived).collect()
}

/// Counts shown in the navigation bar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoteCounts {
    pub active: usize,
    pub archived: usize,
}

impl NoteCounts {
    pub fn of(notes: &[Note]) -> Self {
        let archived = notes.iter().filter(|note| note.archived).count();
        Self {
            active: notes.len() - archived,
            archived,
        }
    }
}
