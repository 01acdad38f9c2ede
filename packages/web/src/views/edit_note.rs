use dioxus::prelude::*;

use ui::UpdateNoteForm;

use crate::Route;

#[component]
pub fn EditNote(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        UpdateNoteForm {
            note_id: id,
            on_saved: move |_| {
                nav.push(Route::ActiveNotes {});
            },
        }
    }
}
