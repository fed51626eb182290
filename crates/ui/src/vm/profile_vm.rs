use profile_core::model::Profile;
use profile_core::time::format_member_since;

/// Photo slot of the profile header: either the image or the lettered placeholder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoVm {
    Image { src: String },
    Placeholder { initial: String },
}

impl PhotoVm {
    #[must_use]
    pub fn from_profile(profile: &Profile) -> Self {
        match profile.photo() {
            Some(src) => Self::Image {
                src: src.to_owned(),
            },
            None => Self::Placeholder {
                initial: profile
                    .username
                    .chars()
                    .next()
                    .map_or_else(|| "?".to_string(), |ch| ch.to_uppercase().collect()),
            },
        }
    }
}

/// UI-ready representation of the profile header and edit form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileVm {
    pub display_name: String,
    pub email: String,
    pub bio: String,
    pub level_label: String,
    pub member_since: String,
    pub photo: PhotoVm,
}

impl From<&Profile> for ProfileVm {
    fn from(profile: &Profile) -> Self {
        Self {
            display_name: profile.username.clone(),
            email: profile.email.clone(),
            bio: profile.bio_or_empty().to_owned(),
            level_label: profile.level.label(),
            member_since: profile
                .created_at
                .map(format_member_since)
                .unwrap_or_default(),
            photo: PhotoVm::from_profile(profile),
        }
    }
}
