use std::time::Duration;

use dioxus::prelude::*;
use quest_core::model::PointId;
use services::SECTION_COMPLETE_MESSAGE;
use storage::repository::{InMemoryRepository, KeyValueRepository, PROGRESS_KEY, Storage};

use super::test_harness::{
    TEST_CATALOG, ViewKind, drive_dom, run_dom_for, setup_view_harness,
    setup_view_harness_with_storage,
};
use super::{NoticeLayer, use_board_provider};

#[tokio::test(flavor = "current_thread")]
async fn checklist_smoke_renders_sections_closed_except_first() {
    let mut harness = setup_view_harness(ViewKind::Checklist).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("❄️ Alpha"), "missing heading in {html}");
    assert!(html.contains("Training 0/2"), "missing status in {html}");
    assert!(html.contains("Training 0/3"), "missing status in {html}");
    assert!(html.contains("magic-scroll open"), "first section should be open in {html}");
    assert_eq!(html.matches("magic-scroll open").count(), 1, "only one open in {html}");
    assert!(html.contains("detail a0"), "missing detail in {html}");
    assert!(!html.contains("checklist-item checked"), "nothing checked yet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_smoke_marks_completed_section() {
    let mut harness = setup_view_harness(ViewKind::Checklist).await;
    harness.tracker.toggle(&PointId::new("p_a_0")).await;
    harness.tracker.toggle(&PointId::new("p_a_1")).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Seal broken"), "missing done status in {html}");
    assert!(html.contains("scroll-status done"), "missing done class in {html}");
    assert!(html.contains("magic-scroll open completed"), "missing completed in {html}");
    assert!(html.contains("Training 0/3"), "second section still pending in {html}");
    assert_eq!(html.matches("checklist-item checked").count(), 2);

    let stored = harness.storage.kv.get_value(PROGRESS_KEY).await.unwrap();
    assert_eq!(stored.as_deref(), Some(r#"{"p_a_0":true,"p_a_1":true}"#));
}

#[tokio::test(flavor = "current_thread")]
async fn hero_smoke_renders_percent_and_realm() {
    let mut harness = setup_view_harness(ViewKind::Hero).await;
    harness.tracker.toggle(&PointId::new("p_a_0")).await;
    harness.tracker.toggle(&PointId::new("p_a_1")).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"progress-bar\""), "missing bar in {html}");
    assert!(html.contains("width: 40%;"), "missing width in {html}");
    assert!(html.contains("40%"), "missing percent in {html}");
    assert!(html.contains("Realm 4"), "missing realm in {html}");
    assert!(html.contains("Frozen Memory"), "missing form name in {html}");
    assert!(html.contains("data-level=\"4\""), "missing data-level in {html}");
    assert!(!html.contains("level-max"), "not max yet in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hero_smoke_marks_max_level() {
    let mut harness = setup_view_harness(ViewKind::Hero).await;
    let ids: Vec<PointId> = harness
        .tracker
        .catalog()
        .points()
        .map(|point| point.id().clone())
        .collect();
    for id in &ids {
        harness.tracker.toggle(id).await;
    }

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Realm 10"), "missing realm in {html}");
    assert!(html.contains("level-max"), "missing max marker in {html}");
    assert!(html.contains("width: 100%;"), "missing full bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hero_smoke_survives_corrupt_storage() {
    let repo = InMemoryRepository::new().with_value(PROGRESS_KEY, "[oops");
    let storage = Storage::from_kv(std::sync::Arc::new(repo));
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Hero, storage, TEST_CATALOG).await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Realm 0"), "missing realm in {html}");
    assert!(html.contains("width: 0%;"), "missing empty bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn forms_smoke_marks_current_form() {
    let mut harness = setup_view_harness(ViewKind::Forms).await;
    harness.tracker.toggle(&PointId::new("p_b_2")).await;

    harness.rebuild();
    let html = harness.render();
    assert_eq!(html.matches("form-card current").count(), 1, "one current in {html}");
    assert_eq!(html.matches("form-card unlocked").count(), 2, "levels 0-1 unlocked in {html}");
    assert_eq!(html.matches("form-card locked").count(), 8, "rest locked in {html}");
    assert!(html.contains("Realm 10"), "all realms listed in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notices_smoke_starts_hidden() {
    let mut harness = setup_view_harness(ViewKind::Notices).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("id=\"toast\""), "missing toast in {html}");
    assert!(!html.contains("toast show"), "toast should be hidden in {html}");
    assert!(!html.contains("encourage-floater"), "no floater in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_catalog_renders_placeholder() {
    let mut harness =
        setup_view_harness_with_storage(ViewKind::Checklist, Storage::in_memory(), "[]").await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Nothing to study yet."), "missing placeholder in {html}");
}

/// Shows "first", then "second" two seconds later, before the first one's
/// hide timer fires.
#[component]
fn StackedToasts() -> Element {
    let board = use_board_provider();
    use_hook(move || {
        spawn(async move {
            let mut board = board;
            board.show_toast("first".to_owned());
            tokio::time::sleep(Duration::from_millis(2_000)).await;
            board.show_toast("second".to_owned());
        });
    });
    rsx! { NoticeLayer {} }
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn older_toast_timer_leaves_newer_toast_visible() {
    let mut dom = VirtualDom::new(StackedToasts);
    dom.rebuild_in_place();
    drive_dom(&mut dom);

    run_dom_for(&mut dom, Duration::from_millis(500)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("toast show"), "first toast visible in {html}");
    assert!(html.contains("first"), "missing first message in {html}");

    // past the first toast's 3s timer, inside the second's
    run_dom_for(&mut dom, Duration::from_millis(3_000)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("toast show"), "second toast hidden early in {html}");
    assert!(html.contains("second"), "missing second message in {html}");

    run_dom_for(&mut dom, Duration::from_millis(2_000)).await;
    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("toast show"), "toast should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn completing_section_shows_toast_and_floater() {
    let mut harness = setup_view_harness(ViewKind::AfterToggles(&["p_a_0", "p_a_1"])).await;
    harness.rebuild();
    harness.run_for(Duration::from_millis(100)).await;

    let html = harness.render();
    assert!(html.contains("toast show"), "toast not shown in {html}");
    assert!(html.contains(SECTION_COMPLETE_MESSAGE), "missing section message in {html}");
    assert!(html.contains("encourage-floater"), "missing floater in {html}");
    assert_eq!(html.matches("checklist-item checked").count(), 2);
    assert!(harness.tracker.is_checked(&PointId::new("p_a_1")));

    harness.run_for(Duration::from_millis(3_100)).await;
    let html = harness.render();
    assert!(!html.contains("toast show"), "toast should auto-hide in {html}");
    assert!(!html.contains("encourage-floater"), "floater should auto-hide in {html}");
}
