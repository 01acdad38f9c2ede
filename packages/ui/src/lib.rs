//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{load_config, make_identity_store, API_URL_VAR};

pub mod routes;

mod shell;
pub use shell::{use_shell, use_user_id, Shell, ShellHeader, ShellProvider, ShellState, ShellStatus};

mod navbar;
pub use navbar::{nav_links, NavLink, Navbar};

mod note_list;
pub use note_list::{archive_label, NoteList};

mod create_form;
pub use create_form::CreateNoteForm;

mod update_form;
pub use update_form::UpdateNoteForm;
