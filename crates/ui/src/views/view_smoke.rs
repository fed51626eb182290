use std::time::Duration;

use tokio::time::Instant;

use super::test_harness::{FakeProfileApi, ViewKind, sample_profile, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn profile_view_renders_loaded_profile_and_stats() {
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::healthy(), true).await;
    harness.settle().await;
    let html = harness.render();

    for expected in [
        "ana",
        "a@x.com",
        "Beginner",
        "Member since January 2024",
        "90%",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(
        html.contains("id=\"totalExercises\" class=\"stat-value\">3<"),
        "missing total in {html}"
    );
    assert!(
        html.contains("id=\"completedExercises\" class=\"stat-value\">2<"),
        "missing completed count in {html}"
    );
    assert!(!html.contains("alert-error"), "unexpected error alert in {html}");
    assert_eq!(harness.profile.current_profile(), Some(sample_profile()));
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_shows_placeholder_initial_without_photo() {
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::healthy(), true).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("id=\"profilePhotoPlaceholder\""), "{html}");
    assert!(html.contains(">A<"), "missing initial in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_profile_fetch_shows_error_alert() {
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::failing(), true).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Failed to load profile"), "missing alert in {html}");
    assert!(html.contains("alert-error"), "missing error class in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_stats_keep_placeholders_without_alert() {
    let api = FakeProfileApi {
        profile: Some(sample_profile()),
        progress: None,
    };
    let mut harness = setup_view_harness(ViewKind::Profile, api, true).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Beginner"), "profile missing in {html}");
    assert!(
        html.contains("id=\"averageScore\" class=\"stat-value\">-<"),
        "placeholder missing in {html}"
    );
    assert!(!html.contains("alert-error"), "unexpected alert in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn avatar_picker_lists_presets_with_none_selected() {
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::healthy(), true).await;
    harness.settle().await;
    let html = harness.render();

    assert_eq!(html.matches("class=\"photo-option\"").count(), 6, "{html}");
    assert!(!html.contains("photo-option selected"), "{html}");
    assert!(
        html.contains("https://api.dicebear.com/7.x/avataaars/svg?seed=Felix"),
        "{html}"
    );
    for seed in ["Felix", "Aneka", "Milo", "Luna", "Oliver", "Zoe"] {
        let attr = format!("data-avatar=\"{seed}\"");
        assert!(html.contains(&attr), "missing {attr} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn entry_view_links_to_profile_when_signed_in() {
    let mut harness = setup_view_harness(ViewKind::Entry, FakeProfileApi::healthy(), true).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Open your profile"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn entry_view_explains_sign_in_when_logged_out() {
    let mut harness = setup_view_harness(ViewKind::Entry, FakeProfileApi::healthy(), false).await;
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("No active session."), "{html}");
    assert!(!html.contains("Open your profile"), "{html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn error_alert_hides_after_five_seconds() {
    let start = Instant::now();
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::failing(), true).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("alert alert-error show"), "{html}");
    let shown_by = start.elapsed();

    tokio::time::advance(Duration::from_millis(4_900).saturating_sub(shown_by)).await;
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("alert alert-error show"), "hidden too early: {html}");
    assert!(html.contains("Failed to load profile"), "{html}");

    tokio::time::advance(shown_by + Duration::from_millis(200)).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("id=\"alertMessage\" class=\"alert\""), "{html}");
    assert!(!html.contains("Failed to load profile"), "still visible: {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn older_alert_timer_keeps_newer_alert() {
    let start = Instant::now();
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::failing(), true).await;
    harness.settle().await;
    assert!(harness.render().contains("Failed to load profile"));
    let first_shown_by = start.elapsed();

    tokio::time::advance(Duration::from_secs(3)).await;
    harness.submit_form("ana", "");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Profile is not loaded yet"), "{html}");

    // Past the first alert's deadline, well before the second one's.
    let first_deadline = first_shown_by + Duration::from_millis(5_200);
    tokio::time::advance(first_deadline.saturating_sub(start.elapsed())).await;
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Profile is not loaded yet"), "{html}");
    assert!(html.contains("alert alert-error show"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn submitting_the_form_shows_success_and_new_name() {
    let mut harness = setup_view_harness(ViewKind::Profile, FakeProfileApi::healthy(), true).await;
    harness.settle().await;

    harness.submit_form("ana.b", "Learning every day");
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("Profile updated successfully!"), "{html}");
    assert!(html.contains("alert alert-success show"), "{html}");
    assert!(html.contains("id=\"profileName\">ana.b<"), "{html}");
    let cached = harness.profile.current_profile().expect("profile cached");
    assert_eq!(cached.username, "ana.b");
    assert_eq!(cached.bio.as_deref(), Some("Learning every day"));
}
