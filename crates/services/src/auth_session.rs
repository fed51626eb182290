use std::fmt;
use std::sync::Arc;

use profile_core::model::SessionUser;
use storage::{SessionStore, TOKEN_KEY, USER_KEY};

use crate::error::AuthError;

/// Bearer token of the signed-in user.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(..)")
    }
}

/// Login state backed by the local session store.
#[derive(Clone)]
pub struct AuthSession {
    store: Arc<dyn SessionStore>,
}

impl AuthSession {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if the session store cannot be read.
    pub async fn is_logged_in(&self) -> Result<bool, AuthError> {
        Ok(self.stored_token().await?.is_some())
    }

    /// # Errors
    ///
    /// Returns `AuthError::NotLoggedIn` when no token is stored.
    pub async fn token(&self) -> Result<BearerToken, AuthError> {
        self.stored_token()
            .await?
            .map(BearerToken::new)
            .ok_or(AuthError::NotLoggedIn)
    }

    /// # Errors
    ///
    /// Returns `AuthError` if the store cannot be read or the record is not a JSON object.
    pub async fn current_user(&self) -> Result<Option<SessionUser>, AuthError> {
        match self.store.get(USER_KEY).await? {
            Some(raw) => Ok(Some(SessionUser::from_json(&raw)?)),
            None => Ok(None),
        }
    }

    /// Rewrite the stored user's `username`, leaving every other field alone.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingUser` if there is no user record.
    pub async fn update_username(&self, username: &str) -> Result<(), AuthError> {
        let mut user = self.current_user().await?.ok_or(AuthError::MissingUser)?;
        user.set_username(username);
        self.store.set(USER_KEY, &user.to_json()?).await?;
        Ok(())
    }

    /// Store a token and user record obtained elsewhere.
    ///
    /// # Errors
    ///
    /// Returns `AuthError` if either value cannot be written.
    pub async fn sign_in(&self, token: &str, user: &SessionUser) -> Result<(), AuthError> {
        self.store.set(TOKEN_KEY, token).await?;
        self.store.set(USER_KEY, &user.to_json()?).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `AuthError::Storage` if either key cannot be removed.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(TOKEN_KEY).await?;
        self.store.remove(USER_KEY).await?;
        Ok(())
    }

    async fn stored_token(&self) -> Result<Option<String>, AuthError> {
        Ok(self
            .store
            .get(TOKEN_KEY)
            .await?
            .filter(|token| !token.trim().is_empty()))
    }
}
