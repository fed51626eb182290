use std::path::PathBuf;
use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::Navigator;
use services::ProfileService;
use tracing::{debug, info};

use crate::routes::Route;
use crate::views::AlertHandle;
use crate::vm::{AlertVm, StatsVm, UPDATE_SUCCESS_MESSAGE};

use super::state::{ProfileServices, ProfileState};

/// Auth gate, then profile, then statistics, strictly in that order.
pub(super) async fn load_page(
    service: Arc<ProfileService>,
    state: ProfileState,
    alerts: AlertHandle,
    navigator: Navigator,
) {
    if !service.is_logged_in().await {
        debug!("no active session, leaving the profile page");
        navigator.replace(Route::Entry {});
        return;
    }

    let profile = match service.load_profile().await {
        Ok(profile) => profile,
        Err(err) => {
            alerts.show(AlertVm::error(err.to_string()));
            return;
        }
    };
    state.display(&profile, None);

    // Failures are logged by the service; the placeholders stay.
    if let Some(stats) = service.load_stats().await {
        let mut stats_signal = state.stats;
        stats_signal.set(StatsVm::from(stats));
    }
}

pub(super) fn build_submit_action(
    state: ProfileState,
    services: &ProfileServices,
    alerts: AlertHandle,
) -> Callback<()> {
    let service = Arc::clone(&services.profile);
    use_callback(move |()| {
        let mut saving = state.saving;
        if saving() {
            return;
        }
        let service = Arc::clone(&service);
        let username = state.username.read().clone();
        let bio = state.bio.read().clone();

        spawn(async move {
            saving.set(true);
            match service.submit_update(&username, &bio).await {
                Ok(profile) => {
                    alerts.show(AlertVm::success(UPDATE_SUCCESS_MESSAGE));
                    state.display(&profile, service.selected_avatar());
                }
                Err(err) => alerts.show(AlertVm::error(err.to_string())),
            }
            saving.set(false);
        });
    })
}

pub(super) fn build_avatar_action(
    state: ProfileState,
    services: &ProfileServices,
    alerts: AlertHandle,
) -> Callback<String> {
    let service = Arc::clone(&services.profile);
    use_callback(move |seed: String| match service.select_avatar(&seed) {
        Ok(_) => state.refresh_photo(&service),
        Err(err) => alerts.show(AlertVm::error(err.to_string())),
    })
}

pub(super) fn build_photo_action(
    state: ProfileState,
    services: &ProfileServices,
    alerts: AlertHandle,
) -> Callback<PathBuf> {
    let service = Arc::clone(&services.profile);
    use_callback(move |path: PathBuf| {
        let service = Arc::clone(&service);
        spawn(async move {
            match service.select_photo_file(&path).await {
                Ok(_) => state.refresh_photo(&service),
                Err(err) => alerts.show(AlertVm::error(err.to_string())),
            }
        });
    })
}

pub(super) fn build_logout_action(
    services: &ProfileServices,
    alerts: AlertHandle,
    navigator: Navigator,
) -> Callback<()> {
    let service = Arc::clone(&services.profile);
    use_callback(move |()| {
        let service = Arc::clone(&service);
        spawn(async move {
            match service.logout().await {
                Ok(()) => {
                    info!("signed out");
                    navigator.replace(Route::Entry {});
                }
                Err(err) => alerts.show(AlertVm::error(err.to_string())),
            }
        });
    })
}
