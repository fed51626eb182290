use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;
use url::Url;

/// Largest accepted upload, in bytes (5 MiB).
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PhotoError {
    #[error("Image size should be less than 5MB")]
    TooLarge { size: u64 },
}

/// Rejects files above [`MAX_PHOTO_BYTES`]. A file of exactly 5 MiB is accepted.
///
/// # Errors
///
/// Returns `PhotoError::TooLarge` when `size` exceeds the limit.
pub fn check_photo_size(size: u64) -> Result<(), PhotoError> {
    if size > MAX_PHOTO_BYTES {
        return Err(PhotoError::TooLarge { size });
    }
    Ok(())
}

/// Guess an image MIME type from the file extension.
#[must_use]
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        Some("avif") => "image/avif",
        _ => "application/octet-stream",
    }
}

/// Encode raw bytes as a `data:<mime>;base64,<payload>` URL.
#[must_use]
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// A locally chosen photo that has not been sent to the server yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePhoto {
    /// Uploaded file, embedded as a data URL.
    DataUrl(String),
    /// Generated avatar hosted by the avatar service.
    Avatar(Url),
}

impl ProfilePhoto {
    #[must_use]
    pub fn from_file_bytes(path: &Path, bytes: &[u8]) -> Self {
        Self::DataUrl(encode_data_url(mime_for_path(path), bytes))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ProfilePhoto::DataUrl(data) => data,
            ProfilePhoto::Avatar(url) => url.as_str(),
        }
    }
}
