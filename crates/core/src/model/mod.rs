mod avatar;
mod photo;
mod profile;
mod progress;
mod session_user;

pub use avatar::{AVATAR_BASE_URL, AvatarError, AvatarSeed, PRESET_AVATAR_SEEDS, avatar_url};
pub use photo::{
    MAX_PHOTO_BYTES, PhotoError, ProfilePhoto, check_photo_size, encode_data_url, mime_for_path,
};
pub use profile::{Profile, ProfileLevel, ProfileUpdate};
pub use progress::{ProgressEntry, ProgressStats};
pub use session_user::{SessionUser, SessionUserError};
