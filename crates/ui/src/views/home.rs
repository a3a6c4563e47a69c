use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use signs_core::model::GreetingId;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let identity = ctx.identity();

    let launch_ctx = ctx.clone();
    use_effect(move || {
        if let Some(id) = launch_ctx.take_lesson_on_launch() {
            let _ = navigator.push(Route::GreetingsTab {
                tab: id.key().to_string(),
            });
        }
    });

    let resource = use_resource(move || {
        let identity = identity.clone();
        async move {
            let user = identity.current_user().await.map_err(|err| {
                tracing::warn!(error = %err, "could not load the signed-in user");
                ViewError::Unknown
            })?;
            Ok::<_, ViewError>(user.map(|user| user.display_name().to_string()))
        }
    });
    let state = view_state_from_resource(&resource);
    let lesson_titles = GreetingId::ALL
        .into_iter()
        .map(|id| signs_core::greeting(id).title())
        .collect::<Vec<_>>()
        .join(" · ");

    rsx! {
        div { class: "page home-page",
            header { class: "view-header",
                h2 { class: "view-title", "Learn Sign Language" }
                match state {
                    ViewState::Idle | ViewState::Loading => rsx! {
                        p { class: "view-subtitle", "Loading..." }
                    },
                    ViewState::Ready(Some(name)) => rsx! {
                        p { class: "view-subtitle", "Welcome back, {name}." }
                    },
                    ViewState::Ready(None) => rsx! {
                        p { class: "view-subtitle", "Welcome! Sign in to keep your place." }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: move |_| {
                                let mut resource = resource;
                                resource.restart();
                            },
                            "Retry"
                        }
                    },
                }
            }
            div { class: "view-divider" }
            div { class: "home-lessons",
                div { class: "home-lesson-card",
                    h3 { "Common Greetings in ASL" }
                    p { class: "home-lesson-topics", "{lesson_titles}" }
                    Link { class: "btn btn-primary", to: Route::Greetings {}, "Start lesson" }
                }
            }
        }
    }
}
