use dioxus::prelude::*;

use ui::CreateNoteForm;

use crate::Route;

#[component]
pub fn CreateNote() -> Element {
    let nav = use_navigator();

    rsx! {
        CreateNoteForm {
            on_created: move |_| {
                nav.push(Route::ActiveNotes {});
            },
        }
    }
}
