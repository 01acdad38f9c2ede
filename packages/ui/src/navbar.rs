use dioxus::prelude::*;
use store::{Note, NoteCounts};

use crate::routes;

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub to: &'static str,
    pub label: String,
    pub selected: bool,
}

/// Links with live counts, marking the one matching `current_path`.
pub fn nav_links(current_path: &str, notes: &[Note]) -> Vec<NavLink> {
    let counts = NoteCounts::of(notes);
    [
        (routes::ACTIVE_NOTES, format!("Notes ({})", counts.active)),
        (routes::ARCHIVED_NOTES, format!("Archived ({})", counts.archived)),
        (routes::CREATE_NOTE, "Create".to_string()),
    ]
    .into_iter()
    .map(|(to, label)| NavLink {
        to,
        label,
        selected: current_path == to,
    })
    .collect()
}

#[component]
pub fn Navbar(current_path: String, notes: Vec<Note>) -> Element {
    rsx! {
        nav {
            class: "navbar navbar-dark bg-dark",
            for link in nav_links(&current_path, &notes) {
                Link {
                    key: "{link.to}",
                    to: link.to,
                    class: if link.selected { "selected".to_string() } else { String::new() },
                    "{link.label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(flags: &[bool]) -> Vec<Note> {
        flags
            .iter()
            .enumerate()
            .map(|(i, archived)| Note {
                id: format!("n-{i}"),
                text: format!("note {i}"),
                archived: *archived,
            })
            .collect()
    }

    #[test]
    fn test_labels_carry_counts() {
        let links = nav_links("/notes", &notes(&[false, true, false, false]));
        let labels: Vec<&str> = links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["Notes (3)", "Archived (1)", "Create"]);
    }

    #[test]
    fn test_only_current_path_is_selected() {
        for path in [routes::ACTIVE_NOTES, routes::ARCHIVED_NOTES, routes::CREATE_NOTE] {
            let links = nav_links(path, &[]);
            let selected: Vec<&str> = links.iter().filter(|l| l.selected).map(|l| l.to).collect();
            assert_eq!(selected, vec![path]);
        }
    }

    #[test]
    fn test_edit_path_selects_nothing() {
        let links = nav_links(&routes::edit_note("n-1"), &notes(&[false]));
        assert!(links.iter().all(|l| !l.selected));
    }

    #[test]
    fn test_counts_always_sum_to_total() {
        for flags in [vec![], vec![true], vec![false; 5], vec![true, false, true, true]] {
            let collection = notes(&flags);
            let counts = NoteCounts::of(&collection);
            assert_eq!(counts.active + counts.archived, collection.len());
        }
    }
}
