use std::sync::Arc;

use services::ProfileService;

pub trait UiApp: Send + Sync {
    fn profile_service(&self) -> Arc<ProfileService>;
}

#[derive(Clone)]
pub struct AppContext {
    profile_service: Arc<ProfileService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            profile_service: app.profile_service(),
        }
    }

    #[must_use]
    pub fn profile_service(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile_service)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
