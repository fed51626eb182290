use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use profile_core::model::{
    AvatarSeed, Profile, ProfilePhoto, ProgressStats, avatar_url, check_photo_size,
};

use crate::api::ProfileApi;
use crate::auth_session::AuthSession;
use crate::error::{ApiError, ProfileServiceError};

const UPDATE_FAILED_MESSAGE: &str = "Failed to update profile";

#[derive(Debug, Default)]
struct PageState {
    profile: Option<Profile>,
    selected_avatar: Option<AvatarSeed>,
}

/// Page-scoped controller for the profile page.
///
/// Holds the cached profile for one page session. The cache mirrors the
/// server until a successful update replaces it with the server's copy;
/// photo choices mutate it locally in between.
pub struct ProfileService {
    api: Arc<dyn ProfileApi>,
    auth: AuthSession,
    state: Mutex<PageState>,
}

impl ProfileService {
    #[must_use]
    pub fn new(api: Arc<dyn ProfileApi>, auth: AuthSession) -> Self {
        Self {
            api,
            auth,
            state: Mutex::new(PageState::default()),
        }
    }

    /// Login gate for the page. A store that cannot be read counts as logged out.
    pub async fn is_logged_in(&self) -> bool {
        match self.auth.is_logged_in().await {
            Ok(logged_in) => logged_in,
            Err(err) => {
                warn!(error = %err, "could not read session; treating as logged out");
                false
            }
        }
    }

    #[must_use]
    pub fn current_profile(&self) -> Option<Profile> {
        self.state().profile.clone()
    }

    #[must_use]
    pub fn selected_avatar(&self) -> Option<AvatarSeed> {
        self.state().selected_avatar.clone()
    }

    /// Fetch the profile and make it the cached copy.
    ///
    /// # Errors
    ///
    /// `LoadFailed` for a non-success status, `Connection` for transport or
    /// decode failures, `Auth` when there is no session token.
    pub async fn load_profile(&self) -> Result<Profile, ProfileServiceError> {
        let token = self.auth.token().await?;
        match self.api.fetch_profile(&token).await {
            Ok(profile) => {
                debug!(username = %profile.username, "profile loaded");
                let mut state = self.state();
                state.profile = Some(profile.clone());
                state.selected_avatar = None;
                Ok(profile)
            }
            Err(ApiError::Status { status, .. }) => {
                warn!(%status, "profile fetch rejected");
                Err(ProfileServiceError::LoadFailed { status })
            }
            Err(err) => {
                warn!(error = %err, "profile fetch failed");
                Err(ProfileServiceError::Connection(err))
            }
        }
    }

    /// Fetch progress and derive the page statistics.
    ///
    /// Failures are logged and yield `None`; the page shows no alert for them.
    pub async fn load_stats(&self) -> Option<ProgressStats> {
        let token = match self.auth.token().await {
            Ok(token) => token,
            Err(err) => {
                warn!(error = %err, "skipping stats load");
                return None;
            }
        };
        match self.api.fetch_progress(&token).await {
            Ok(entries) => Some(ProgressStats::from_entries(&entries)),
            Err(err) => {
                warn!(error = %err, "failed to load stats");
                None
            }
        }
    }

    /// Send the edited username and bio together with the cached photo.
    ///
    /// On success the cached profile is replaced by the server's copy and the
    /// session user record gets the new username.
    ///
    /// # Errors
    ///
    /// `UpdateRejected` carries the server's message (or a generic one) for a
    /// non-success status; `Connection` covers transport failures; `NotLoaded`
    /// when no profile has been loaded yet. The cache is untouched on error.
    pub async fn submit_update(
        &self,
        username: &str,
        bio: &str,
    ) -> Result<Profile, ProfileServiceError> {
        let update = self
            .state()
            .profile
            .as_ref()
            .ok_or(ProfileServiceError::NotLoaded)?
            .to_update(username, bio);
        let token = self.auth.token().await?;

        let profile = match self.api.update_profile(&token, &update).await {
            Ok(profile) => profile,
            Err(ApiError::Status { status, message }) => {
                warn!(%status, "profile update rejected");
                return Err(ProfileServiceError::UpdateRejected {
                    status,
                    message: message.unwrap_or_else(|| UPDATE_FAILED_MESSAGE.to_string()),
                });
            }
            Err(err) => {
                warn!(error = %err, "profile update failed");
                return Err(ProfileServiceError::Connection(err));
            }
        };

        self.state().profile = Some(profile.clone());

        if let Err(err) = self.auth.update_username(&profile.username).await {
            warn!(error = %err, "could not store the new username in the session");
        }

        Ok(profile)
    }

    /// Read an image file and hold it as the pending photo.
    ///
    /// The size is checked from file metadata before anything is read.
    ///
    /// # Errors
    ///
    /// `Photo` for files above 5 MiB, `PhotoRead` for I/O failures,
    /// `NotLoaded` when no profile has been loaded yet.
    pub async fn select_photo_file(&self, path: &Path) -> Result<ProfilePhoto, ProfileServiceError> {
        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(ProfileServiceError::PhotoRead)?;
        check_photo_size(metadata.len())?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(ProfileServiceError::PhotoRead)?;
        self.select_photo_bytes(path, &bytes)
    }

    /// Hold already-read image bytes as the pending photo.
    ///
    /// # Errors
    ///
    /// `Photo` for payloads above 5 MiB, `NotLoaded` when no profile has been
    /// loaded yet.
    pub fn select_photo_bytes(
        &self,
        file_name: &Path,
        bytes: &[u8],
    ) -> Result<ProfilePhoto, ProfileServiceError> {
        check_photo_size(u64::try_from(bytes.len()).unwrap_or(u64::MAX))?;
        let photo = ProfilePhoto::from_file_bytes(file_name, bytes);
        self.set_pending_photo(&photo, None)?;
        debug!(bytes = bytes.len(), "photo file selected");
        Ok(photo)
    }

    /// Hold the generated avatar for `seed` as the pending photo and mark it selected.
    ///
    /// # Errors
    ///
    /// `Avatar` for a blank seed, `NotLoaded` when no profile has been loaded yet.
    pub fn select_avatar(&self, seed: &str) -> Result<ProfilePhoto, ProfileServiceError> {
        let seed = AvatarSeed::new(seed)?;
        let photo = ProfilePhoto::Avatar(avatar_url(&seed)?);
        self.set_pending_photo(&photo, Some(seed))?;
        Ok(photo)
    }

    /// Clear the session and the cached page state.
    ///
    /// # Errors
    ///
    /// `Auth` if the session store cannot be updated.
    pub async fn logout(&self) -> Result<(), ProfileServiceError> {
        self.auth.logout().await?;
        *self.state() = PageState::default();
        Ok(())
    }

    fn set_pending_photo(
        &self,
        photo: &ProfilePhoto,
        avatar: Option<AvatarSeed>,
    ) -> Result<(), ProfileServiceError> {
        let mut state = self.state();
        let profile = state
            .profile
            .as_mut()
            .ok_or(ProfileServiceError::NotLoaded)?;
        profile.set_photo(photo);
        state.selected_avatar = avatar;
        Ok(())
    }

    fn state(&self) -> MutexGuard<'_, PageState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
