use profile_core::model::{AvatarSeed, avatar_url};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarOptionVm {
    pub seed: String,
    pub image_url: String,
    pub selected: bool,
}

/// Picker options in `seeds` order. At most one option is selected.
#[must_use]
pub fn map_avatar_options(seeds: &[&str], selected: Option<&AvatarSeed>) -> Vec<AvatarOptionVm> {
    seeds
        .iter()
        .filter_map(|raw| {
            let seed = AvatarSeed::new(*raw).ok()?;
            let image_url = avatar_url(&seed).ok()?.to_string();
            Some(AvatarOptionVm {
                selected: selected == Some(&seed),
                seed: seed.as_str().to_owned(),
                image_url,
            })
        })
        .collect()
}
