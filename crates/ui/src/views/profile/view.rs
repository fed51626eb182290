use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use profile_core::model::PRESET_AVATAR_SEEDS;

use crate::context::AppContext;
use crate::views::{AlertToast, use_alert};
use crate::vm::{ProfileVm, map_avatar_options};

use super::actions::{
    build_avatar_action, build_logout_action, build_photo_action, build_submit_action, load_page,
};
use super::components::{AvatarPicker, PhotoInput, ProfileForm, ProfileHeader, StatsPanel};
use super::state::{ProfileServices, use_profile_state};

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let services = ProfileServices {
        profile: ctx.profile_service(),
    };
    let navigator = use_navigator();
    let alerts = use_alert();
    let state = use_profile_state();

    let load_service = Arc::clone(&services.profile);
    use_future(move || load_page(Arc::clone(&load_service), state, alerts, navigator));

    let on_submit = build_submit_action(state, &services, alerts);
    let on_avatar = build_avatar_action(state, &services, alerts);
    let on_file = build_photo_action(state, &services, alerts);
    let on_logout = build_logout_action(&services, alerts, navigator);

    #[cfg(test)]
    {
        use_hook(|| {
            if let Some(handles) = try_consume_context::<super::state::ProfileTestHandles>() {
                handles.register(on_submit, state);
            }
        });
    }

    let profile_vm = state.profile.read().as_ref().map(ProfileVm::from);
    let email = profile_vm
        .as_ref()
        .map(|vm| vm.email.clone())
        .unwrap_or_default();
    let avatar_options = map_avatar_options(PRESET_AVATAR_SEEDS, state.selected_avatar.read().as_ref());
    let stats = state.stats.read().clone();
    let saving = *state.saving.read();

    rsx! {
        div { class: "page profile",
            AlertToast { alert: alerts.current() }
            ProfileHeader { profile: profile_vm, on_logout }
            StatsPanel { stats }
            section { class: "photo-section",
                h3 { "Profile photo" }
                PhotoInput { on_file }
                p { class: "hint", "Or pick an avatar:" }
                AvatarPicker { options: avatar_options, on_select: on_avatar }
            }
            ProfileForm {
                username: state.username,
                bio: state.bio,
                email,
                saving,
                on_submit,
            }
        }
    }
}
