//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use profile_core::model::{AvatarError, PhotoError, SessionUserError};
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `ProfileApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// The backend answered with a non-success status. `message` is the
    /// `error` field of the response body, when there was one.
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        message: Option<String>,
    },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AuthSession`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error("not signed in")]
    NotLoggedIn,
    #[error("no user record in session")]
    MissingUser,
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    User(#[from] SessionUserError),
}

/// Errors emitted by `ProfileService`.
///
/// The `Display` text is what the profile page shows in its alert.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProfileServiceError {
    #[error("Failed to load profile")]
    LoadFailed { status: StatusCode },
    #[error("Connection error")]
    Connection(#[source] ApiError),
    #[error("{message}")]
    UpdateRejected { status: StatusCode, message: String },
    #[error("Profile is not loaded yet")]
    NotLoaded,
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error("Could not read the selected image")]
    PhotoRead(#[source] std::io::Error),
    #[error(transparent)]
    Avatar(#[from] AvatarError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
