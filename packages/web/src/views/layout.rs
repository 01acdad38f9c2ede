use dioxus::prelude::*;

use ui::{use_shell, Navbar, ShellHeader};

use crate::Route;

/// Navigation bar and heading around every notes page.
#[component]
pub fn AppLayout() -> Element {
    let shell = use_shell();
    let route = use_route::<Route>();
    let notes = shell.state().read().notes.clone();

    rsx! {
        Navbar {
            current_path: route.to_string(),
            notes,
        }
        ShellHeader {}
        Outlet::<Route> {}
    }
}
