//! Paths of the client-side routes, shared by links in every component.

pub const ACTIVE_NOTES: &str = "/notes";
pub const ARCHIVED_NOTES: &str = "/archived";
pub const CREATE_NOTE: &str = "/notes/create";

/// Path of the edit view for one note.
pub fn edit_note(id: &str) -> String {
    format!("/notes/{id}")
}
