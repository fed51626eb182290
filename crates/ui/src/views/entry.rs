use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

#[component]
pub fn EntryView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.profile_service();

    let resource = use_resource(move || {
        let service = service.clone();
        async move { Ok::<_, ViewError>(service.is_logged_in().await) }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page entry",
            h2 { "Welcome" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(true) => rsx! {
                    Link { class: "button", to: Route::Profile {}, "Open your profile" }
                },
                ViewState::Ready(false) => rsx! {
                    p { "No active session." }
                    p { class: "hint",
                        "Run `app session --token <token> --username <name>` to sign in."
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
