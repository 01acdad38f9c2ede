use dioxus::prelude::*;
use store::notes::filter_by_archived;
use store::Note;

use crate::icons::{FaBoxArchive, FaBoxOpen, FaTrashCan};
use crate::routes;
use crate::Icon;

/// Label of the archive toggle for a note.
pub fn archive_label(note: &Note) -> &'static str {
    if note.archived {
        "De-Archive"
    } else {
        "Archive"
    }
}

/// Cards for the notes whose archived flag equals `archived`, in collection order.
///
/// The toggle sends the note with only `archived` inverted; destroy sends it unchanged.
#[component]
pub fn NoteList(
    notes: Vec<Note>,
    archived: bool,
    on_update: EventHandler<Note>,
    on_destroy: EventHandler<Note>,
) -> Element {
    let visible = filter_by_archived(&notes, archived);

    rsx! {
        div {
            class: "all-notes-container",
            for (number, note) in visible.into_iter().enumerate().map(|(i, n)| (i + 1, n)) {
                div {
                    key: "{note.id}",
                    class: "card note-card",
                    div {
                        class: "card-body",
                        div { class: "card-title", "Note {number}" }
                        Link {
                            to: routes::edit_note(&note.id),
                            class: "card-text",
                            "{note.text}"
                        }
                        div {
                            class: "card-btn-container",
                            button {
                                class: "btn btn-outline-primary btn-sm",
                                onclick: {
                                    let note = note.clone();
                                    move |_| on_update.call(note.toggled())
                                },
                                if note.archived {
                                    Icon { icon: FaBoxOpen, width: 12, height: 12 }
                                } else {
                                    Icon { icon: FaBoxArchive, width: 12, height: 12 }
                                }
                                span { {archive_label(note)} }
                            }
                            button {
                                class: "btn btn-outline-danger btn-sm",
                                onclick: {
                                    let note = note.clone();
                                    move |_| on_destroy.call(note.clone())
                                },
                                Icon { icon: FaTrashCan, width: 12, height: 12 }
                                span { "Destroy" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_label_follows_flag() {
        let note = Note {
            id: "n-1".to_string(),
            text: "x".to_string(),
            archived: false,
        };
        assert_eq!(archive_label(&note), "Archive");
        assert_eq!(archive_label(&note.toggled()), "De-Archive");
    }
}
