use dioxus::prelude::*;
use store::models::draft_from_input;

use crate::shell::use_shell;

/// Form for creating a note.
///
/// Submitting is disabled while the text is empty. A failed create shows the
/// service's message and keeps the text; the message stays until the next
/// failure replaces it or `on_created` navigates away.
#[component]
pub fn CreateNoteForm(on_created: EventHandler<()>) -> Element {
    let shell = use_shell();
    let mut text = use_signal(String::new);
    let mut error = use_signal(String::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Empty text stops here and never reaches the service.
        let Some(draft) = draft_from_input(&text()) else {
            return;
        };
        // Only the wait is scoped to this view; the shell appends the note regardless.
        spawn(async move {
            match shell.create(draft).await {
                Ok(()) => on_created.call(()),
                Err(e) => {
                    tracing::warn!("Create failed: {e}");
                    error.set(e.message());
                }
            }
        });
    };

    rsx! {
        form {
            onsubmit: handle_submit,
            if !error().is_empty() {
                div { class: "error", "{error}" }
            }
            div {
                class: "form-group",
                input {
                    class: "form-control",
                    value: text(),
                    placeholder: "create new note",
                    oninput: move |evt: FormEvent| text.set(evt.value()),
                }
                button {
                    class: "btn btn-outline-primary",
                    r#type: "submit",
                    disabled: text().is_empty(),
                    "Create"
                }
            }
        }
    }
}
