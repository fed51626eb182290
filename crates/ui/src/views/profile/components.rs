use std::path::PathBuf;

use dioxus::prelude::*;

use crate::vm::{AvatarOptionVm, PhotoVm, ProfileVm, StatsVm};

#[component]
pub fn ProfileHeader(profile: Option<ProfileVm>, on_logout: Callback<()>) -> Element {
    let (name, email, level, member_since) = match &profile {
        Some(vm) => (
            vm.display_name.clone(),
            vm.email.clone(),
            vm.level_label.clone(),
            vm.member_since.clone(),
        ),
        None => (String::new(), String::new(), String::new(), String::new()),
    };
    let photo = profile.map(|vm| vm.photo);
    let (image_src, image_display, placeholder_display, initial) = match photo {
        Some(PhotoVm::Image { src }) => (src, "block", "none", String::new()),
        Some(PhotoVm::Placeholder { initial }) => (String::new(), "none", "flex", initial),
        None => (String::new(), "none", "flex", String::new()),
    };

    rsx! {
        header { class: "profile-header",
            div { class: "profile-photo",
                img {
                    id: "profilePhoto",
                    alt: "Profile photo",
                    src: "{image_src}",
                    style: "display: {image_display};",
                }
                div {
                    id: "profilePhotoPlaceholder",
                    class: "profile-photo-placeholder",
                    style: "display: {placeholder_display};",
                    "{initial}"
                }
            }
            div { class: "profile-identity",
                h1 { id: "profileName", "{name}" }
                p { id: "profileEmail", class: "profile-email", "{email}" }
                div { class: "profile-meta",
                    span { id: "currentLevel", class: "level-badge", "{level}" }
                    span { id: "memberSince", class: "member-since", "{member_since}" }
                }
            }
            button {
                id: "logoutButton",
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_logout.call(()),
                "Log out"
            }
        }
    }
}

#[component]
pub fn StatsPanel(stats: StatsVm) -> Element {
    rsx! {
        section { class: "stats-panel",
            div { class: "stat",
                span { id: "totalExercises", class: "stat-value", "{stats.total_exercises}" }
                span { class: "stat-label", "Exercises" }
            }
            div { class: "stat",
                span { id: "completedExercises", class: "stat-value", "{stats.completed_exercises}" }
                span { class: "stat-label", "Completed" }
            }
            div { class: "stat",
                span { id: "averageScore", class: "stat-value", "{stats.average_score}" }
                span { class: "stat-label", "Average score" }
            }
        }
    }
}

#[component]
pub fn AvatarPicker(options: Vec<AvatarOptionVm>, on_select: Callback<String>) -> Element {
    rsx! {
        div { class: "photo-options",
            for option in options {
                button {
                    class: if option.selected { "photo-option selected" } else { "photo-option" },
                    key: "{option.seed}",
                    r#type: "button",
                    "data-avatar": "{option.seed}",
                    aria_label: "Use avatar {option.seed}",
                    onclick: {
                        let seed = option.seed.clone();
                        move |_| on_select.call(seed.clone())
                    },
                    img { src: "{option.image_url}", alt: "{option.seed}" }
                }
            }
        }
    }
}

#[component]
pub fn PhotoInput(on_file: Callback<PathBuf>) -> Element {
    rsx! {
        label { class: "photo-upload",
            "Upload a photo"
            input {
                id: "photoInput",
                r#type: "file",
                accept: "image/*",
                onchange: move |evt: FormEvent| {
                    // Cancelling the picker yields no files; nothing changes then.
                    if let Some(file) = evt.files().into_iter().next() {
                        on_file.call(file.path());
                    }
                },
            }
        }
    }
}

#[component]
pub fn ProfileForm(
    username: Signal<String>,
    bio: Signal<String>,
    email: String,
    saving: bool,
    on_submit: Callback<()>,
) -> Element {
    let mut username = username;
    let mut bio = bio;
    let label = if saving { "Saving..." } else { "Save changes" };

    rsx! {
        form {
            id: "profileForm",
            class: "profile-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_submit.call(());
            },
            label { r#for: "username", "Username" }
            input {
                id: "username",
                r#type: "text",
                value: "{username}",
                oninput: move |evt: FormEvent| username.set(evt.value()),
            }
            label { r#for: "email", "Email" }
            input {
                id: "email",
                r#type: "email",
                readonly: true,
                value: "{email}",
            }
            label { r#for: "bio", "Bio" }
            textarea {
                id: "bio",
                rows: "4",
                value: "{bio}",
                oninput: move |evt: FormEvent| bio.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving,
                "{label}"
            }
        }
    }
}
