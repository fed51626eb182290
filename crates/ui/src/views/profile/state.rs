#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use profile_core::model::{AvatarSeed, Profile};
use services::ProfileService;

use crate::vm::StatsVm;

/// Signals backing the profile page.
#[derive(Clone, Copy)]
pub(super) struct ProfileState {
    pub(super) profile: Signal<Option<Profile>>,
    pub(super) stats: Signal<StatsVm>,
    pub(super) username: Signal<String>,
    pub(super) bio: Signal<String>,
    pub(super) selected_avatar: Signal<Option<AvatarSeed>>,
    pub(super) saving: Signal<bool>,
}

impl ProfileState {
    /// Render `profile` into the header and reset the form inputs from it.
    pub(super) fn display(self, profile: &Profile, selected_avatar: Option<AvatarSeed>) {
        let mut username = self.username;
        let mut bio = self.bio;
        let mut current = self.profile;
        let mut selected = self.selected_avatar;
        username.set(profile.username.clone());
        bio.set(profile.bio_or_empty().to_owned());
        current.set(Some(profile.clone()));
        selected.set(selected_avatar);
    }

    /// Re-read the pending photo from the service without touching the form inputs.
    pub(super) fn refresh_photo(self, service: &ProfileService) {
        let mut current = self.profile;
        let mut selected = self.selected_avatar;
        current.set(service.current_profile());
        selected.set(service.selected_avatar());
    }
}

pub(super) fn use_profile_state() -> ProfileState {
    ProfileState {
        profile: use_signal(|| None),
        stats: use_signal(StatsVm::placeholder),
        username: use_signal(String::new),
        bio: use_signal(String::new),
        selected_avatar: use_signal(|| None),
        saving: use_signal(|| false),
    }
}

#[derive(Clone)]
pub(super) struct ProfileServices {
    pub(super) profile: Arc<ProfileService>,
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ProfileTestHandles {
    submit: Rc<RefCell<Option<Callback<()>>>>,
    username: Rc<RefCell<Option<Signal<String>>>>,
    bio: Rc<RefCell<Option<Signal<String>>>>,
}

#[cfg(test)]
impl ProfileTestHandles {
    pub(super) fn register(&self, submit: Callback<()>, state: ProfileState) {
        *self.submit.borrow_mut() = Some(submit);
        *self.username.borrow_mut() = Some(state.username);
        *self.bio.borrow_mut() = Some(state.bio);
    }

    pub(crate) fn submit(&self) -> Callback<()> {
        (*self.submit.borrow()).expect("profile submit registered")
    }

    pub(crate) fn username(&self) -> Signal<String> {
        (*self.username.borrow()).expect("username signal registered")
    }

    pub(crate) fn bio(&self) -> Signal<String> {
        (*self.bio.borrow()).expect("bio signal registered")
    }
}
