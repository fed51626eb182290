use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{EntryView, ProfileView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", EntryView)] Entry {},
        #[route("/profile", ProfileView)] Profile {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::Entry {}, "Learn" }
                nav {
                    Link { to: Route::Profile {}, "Profile" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
