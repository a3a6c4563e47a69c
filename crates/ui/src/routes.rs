use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AdminView, GreetingsLessonView, GreetingsTabView, HomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lessons/greetings", GreetingsLessonView)] Greetings {},
        #[route("/lessons/greetings/:tab", GreetingsTabView)] GreetingsTab { tab: String },
        #[route("/admin", AdminView)] Admin {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Sign Lessons" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Greetings {}, "Basic Greetings" } }
                li { Link { to: Route::Admin {}, "Admin" } }
            }
        }
    }
}
