use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use profile_core::model::{Profile, ProfileLevel, ProfileUpdate, ProgressEntry, SessionUser};
use profile_core::time::fixed_now;
use services::{ApiError, AuthSession, BearerToken, ProfileApi, ProfileService, StatusCode};
use storage::Storage;

use crate::context::{UiApp, build_app_context};
use crate::views::{EntryView, ProfileTestHandles, ProfileView};

/// Backend double answering from canned data.
pub struct FakeProfileApi {
    pub profile: Option<Profile>,
    pub progress: Option<Vec<ProgressEntry>>,
}

impl FakeProfileApi {
    pub fn healthy() -> Self {
        Self {
            profile: Some(sample_profile()),
            progress: Some(vec![
                ProgressEntry {
                    completed: true,
                    score: Some(80.0),
                },
                ProgressEntry {
                    completed: false,
                    score: None,
                },
                ProgressEntry {
                    completed: true,
                    score: Some(100.0),
                },
            ]),
        }
    }

    pub fn failing() -> Self {
        Self {
            profile: None,
            progress: None,
        }
    }
}

fn unauthorized() -> ApiError {
    ApiError::Status {
        status: StatusCode::UNAUTHORIZED,
        message: None,
    }
}

#[async_trait]
impl ProfileApi for FakeProfileApi {
    async fn fetch_profile(&self, _token: &BearerToken) -> Result<Profile, ApiError> {
        self.profile.clone().ok_or_else(unauthorized)
    }

    async fn update_profile(
        &self,
        _token: &BearerToken,
        update: &ProfileUpdate,
    ) -> Result<Profile, ApiError> {
        let mut profile = self.profile.clone().ok_or_else(unauthorized)?;
        profile.username.clone_from(&update.username);
        profile.bio = Some(update.bio.clone());
        profile.profile_photo.clone_from(&update.profile_photo);
        Ok(profile)
    }

    async fn fetch_progress(&self, _token: &BearerToken) -> Result<Vec<ProgressEntry>, ApiError> {
        self.progress.clone().ok_or_else(unauthorized)
    }
}

pub fn sample_profile() -> Profile {
    Profile {
        username: "ana".into(),
        email: "a@x.com".into(),
        bio: None,
        level: ProfileLevel::new("beginner"),
        profile_photo: None,
        created_at: Some(fixed_now()),
    }
}

struct TestApp {
    profile: Arc<ProfileService>,
}

impl UiApp for TestApp {
    fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Entry,
    Profile,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    profile_handles: ProfileTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.profile_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<ViewKind>() {
        ViewKind::Entry => rsx! { EntryView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub profile: Arc<ProfileService>,
    pub profile_handles: ProfileTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive pending tasks until the page settles.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    /// Edit the profile form and submit it, as a user would.
    pub fn submit_form(&mut self, username: &str, bio: &str) {
        let handles = self.profile_handles.clone();
        let (username, bio) = (username.to_owned(), bio.to_owned());
        self.dom.in_runtime(|| {
            handles.username().set(username);
            handles.bio().set(bio);
            handles.submit().call(());
        });
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(
    view: ViewKind,
    api: FakeProfileApi,
    signed_in: bool,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let auth = AuthSession::new(Arc::clone(&storage.session));
    if signed_in {
        auth.sign_in("test-token", &SessionUser::new("ana", Some("a@x.com".into())))
            .await
            .expect("sign in");
    }
    let profile = Arc::new(ProfileService::new(Arc::new(api), auth));
    let app = Arc::new(TestApp {
        profile: Arc::clone(&profile),
    });

    let profile_handles = ProfileTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            profile_handles: profile_handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        profile,
        profile_handles,
    };
    harness.rebuild();
    harness
}
