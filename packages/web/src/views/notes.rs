use dioxus::prelude::*;

use ui::{use_shell, NoteList};

#[component]
pub fn ActiveNotes() -> Element {
    rsx! {
        ShellNotes { archived: false }
    }
}

#[component]
pub fn ArchivedNotes() -> Element {
    rsx! {
        ShellNotes { archived: true }
    }
}

/// The shell's notes, wired to the shell's mutations.
#[component]
fn ShellNotes(archived: bool) -> Element {
    let shell = use_shell();
    let notes = shell.state().read().notes.clone();

    rsx! {
        NoteList {
            notes,
            archived,
            on_update: move |note| shell.update(note),
            on_destroy: move |note| shell.destroy(note),
        }
    }
}
