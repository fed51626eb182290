use std::sync::Arc;

use storage::Storage;

use crate::api::{ApiConfig, HttpProfileApi, ProfileApi};
use crate::auth_session::AuthSession;
use crate::error::AppServicesError;
use crate::profile_service::ProfileService;

/// Assembles app-facing services over one session store and one backend.
#[derive(Clone)]
pub struct AppServices {
    auth: AuthSession,
    profile: Arc<ProfileService>,
}

impl AppServices {
    /// Build services backed by a `SQLite` session store and the HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(db_url: &str, config: ApiConfig) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_parts(&storage, Arc::new(HttpProfileApi::new(config))))
    }

    #[must_use]
    pub fn from_parts(storage: &Storage, api: Arc<dyn ProfileApi>) -> Self {
        let auth = AuthSession::new(Arc::clone(&storage.session));
        let profile = Arc::new(ProfileService::new(api, auth.clone()));
        Self { auth, profile }
    }

    #[must_use]
    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    #[must_use]
    pub fn profile(&self) -> Arc<ProfileService> {
        Arc::clone(&self.profile)
    }
}
