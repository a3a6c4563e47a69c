use dioxus::prelude::*;
use signs_core::model::IdentityState;
use signs_core::{AccessDecision, CATALOG, decide_access};

use crate::context::AppContext;
use crate::vm::{identity_state_from_result, map_dictionary_rows};

pub(crate) const UNAUTHORIZED_BANNER: &str = "You are not authorized to access this page";

#[component]
pub fn AdminView() -> Element {
    let ctx = use_context::<AppContext>();
    let identity = ctx.identity();

    let resource = use_resource(move || {
        let identity = identity.clone();
        async move { identity_state_from_result(identity.current_user().await) }
    });
    let state = resource
        .value()
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(IdentityState::Loading);

    match decide_access(&state) {
        AccessDecision::Loading => rsx! {
            div { class: "page admin-page",
                div { class: "spinner", role: "status", aria_label: "Loading" }
            }
        },
        AccessDecision::Failed(message) => rsx! {
            div { class: "page admin-page",
                p { class: "admin-error", "{message}" }
            }
        },
        AccessDecision::Unauthorized => rsx! {
            div { class: "page admin-page",
                div { class: "banner banner--error", role: "alert", "{UNAUTHORIZED_BANNER}" }
            }
        },
        AccessDecision::Granted => rsx! {
            AdminPanel {}
        },
    }
}

/// Only built once the gate grants access.
#[component]
fn AdminPanel() -> Element {
    let rows = map_dictionary_rows(&CATALOG);

    rsx! {
        div { class: "page admin-page",
            header { class: "view-header",
                h2 { class: "view-title", "Admin Dashboard" }
                p { class: "view-subtitle", "Sign dictionary" }
            }
            div { class: "view-divider" }
            table { class: "dictionary",
                thead {
                    tr {
                        th { "Sign" }
                        th { "Description" }
                        th { "Quiz answer" }
                        th { "Options" }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.id}",
                            td { "{row.title}" }
                            td { "{row.description}" }
                            td { "{row.answer}" }
                            td { "{row.option_count}" }
                        }
                    }
                }
            }
        }
    }
}
