use std::fmt;

use thiserror::Error;
use url::Url;

/// Endpoint of the external avatar generator. The seed goes in the `seed` query parameter.
pub const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Seeds offered by the avatar picker, in display order.
pub const PRESET_AVATAR_SEEDS: &[&str] = &["Felix", "Aneka", "Milo", "Luna", "Oliver", "Zoe"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AvatarError {
    #[error("Avatar seed cannot be empty.")]
    EmptySeed,
    #[error("invalid avatar url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AvatarSeed(String);

impl AvatarSeed {
    /// # Errors
    ///
    /// Returns `AvatarError::EmptySeed` for blank input.
    pub fn new(raw: impl Into<String>) -> Result<Self, AvatarError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(AvatarError::EmptySeed);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AvatarSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deterministic avatar image URL for a seed.
///
/// # Errors
///
/// Returns `AvatarError::InvalidUrl` if the base URL cannot be parsed.
pub fn avatar_url(seed: &AvatarSeed) -> Result<Url, AvatarError> {
    let mut url = Url::parse(AVATAR_BASE_URL)?;
    url.query_pairs_mut().append_pair("seed", seed.as_str());
    Ok(url)
}
