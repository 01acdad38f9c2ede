use dioxus::prelude::*;
use store::Note;

use crate::shell::{use_shell, use_user_id};

/// Edit form for one note.
///
/// The note is fetched fresh from the service for the current user and picked
/// by `note_id`; an unknown id leaves the form empty. The fetch belongs to this
/// view, so leaving the page drops it and a late response is never applied.
/// Saving hands the whole note to the shell and calls `on_saved` right away.
#[component]
pub fn UpdateNoteForm(note_id: String, on_saved: EventHandler<()>) -> Element {
    let shell = use_shell();
    let user_id = use_user_id();
    let mut note = use_signal(|| Option::<Note>::None);

    // Track the id in a signal so the loader re-runs when the route param changes
    let mut id_signal = use_signal(|| note_id.clone());
    if *id_signal.peek() != note_id {
        id_signal.set(note_id.clone());
    }

    let _loader = use_resource(move || {
        let id = id_signal();
        let user_id = user_id();
        async move {
            let Some(user_id) = user_id else {
                return;
            };
            match shell.fetch_notes(&user_id).await {
                Ok(notes) => note.set(notes.into_iter().find(|n| n.id == id)),
                Err(e) => tracing::error!("Failed to load note {id}: {e}"),
            }
        }
    });

    let handle_input = move |evt: FormEvent| {
        let current = note.peek().clone();
        if let Some(current) = current {
            note.set(Some(current.with_text(evt.value())));
        }
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Some(current) = note() {
            shell.update(current);
        }
        on_saved.call(());
    };

    let text = note().map(|n| n.text).unwrap_or_default();

    rsx! {
        div {
            h3 { "You are editing your note." }
            form {
                onsubmit: handle_submit,
                div {
                    class: "form-group",
                    input {
                        class: "form-control",
                        r#type: "text",
                        name: "text",
                        value: text,
                        oninput: handle_input,
                    }
                }
                button {
                    class: "btn btn-outline-primary btn-sm",
                    r#type: "submit",
                    "Save"
                }
            }
        }
    }
}
