use dioxus::logger::tracing::{debug, Level};
use dioxus::prelude::*;

use views::{ActiveNotes, AppLayout, ArchivedNotes, CreateNote, EditNote};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/notes")]
        ActiveNotes {},
        #[route("/archived")]
        ArchivedNotes {},
        #[route("/notes/create")]
        CreateNote {},
        #[route("/notes/:id")]
        EditNote { id: String },
    #[end_layout]
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to initialize logger");

    // Routes live in the URL fragment (`#/notes`), so any static host can serve the app.
    #[cfg(feature = "web")]
    {
        let history = std::rc::Rc::new(dioxus::web::HashHistory::new(false));
        dioxus::LaunchBuilder::new()
            .with_cfg(dioxus::web::Config::new().history(history))
            .launch(App);
    }

    #[cfg(not(feature = "web"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        ui::ShellProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Redirect `/` to `/notes`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::ActiveNotes {});
    rsx! {}
}

/// Redirect unknown paths to `/notes`
#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    debug!("No route for /{}, redirecting", segments.join("/"));
    nav.replace(Route::ActiveNotes {});
    rsx! {}
}
