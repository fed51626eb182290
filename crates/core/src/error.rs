use thiserror::Error;

use crate::model::{AvatarError, PhotoError, SessionUserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Photo(#[from] PhotoError),
    #[error(transparent)]
    Avatar(#[from] AvatarError),
    #[error(transparent)]
    SessionUser(#[from] SessionUserError),
}
