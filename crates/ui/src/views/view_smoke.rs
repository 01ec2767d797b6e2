use tracker_core::model::{ThemePreference, TopicKey};

use super::test_harness::setup_view_harness;

fn key(raw: &str) -> TopicKey {
    raw.parse().expect("valid topic key")
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_smoke_renders_subjects_and_zero_progress() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Physics"), "missing Physics in {html}");
    assert!(html.contains("Chemistry"), "missing Chemistry in {html}");
    assert!(html.contains("Mathematics"), "missing Mathematics in {html}");
    assert!(html.contains("0% done"), "missing progress text in {html}");
    // Checkbox ids reuse the persistence keys.
    assert!(html.contains("physics_c0_t0"), "missing topic id in {html}");
    assert!(
        html.contains("Electric charge"),
        "missing topic label in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_smoke_restores_persisted_checkboxes() {
    let mut harness = setup_view_harness();
    harness
        .progress
        .set_completed(&key("physics_c0_t0"), true)
        .await
        .expect("persist completion");

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    // 1 of 58 rounds to 2%.
    assert!(html.contains("2% done"), "missing progress text in {html}");
    assert!(html.contains("checked"), "missing checked box in {html}");
    assert!(html.contains("1/3"), "missing chapter badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tracker_smoke_applies_persisted_dark_theme() {
    let mut harness = setup_view_harness();
    harness
        .settings
        .save_theme(ThemePreference::Dark)
        .await
        .expect("persist theme");

    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("page--dark"), "missing dark class in {html}");
    assert!(html.contains("Light mode"), "missing toggle label in {html}");
}
