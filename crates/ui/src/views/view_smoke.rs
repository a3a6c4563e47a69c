use std::sync::Arc;

use dioxus::signals::ReadableExt;

use services::StaticIdentityProvider;
use signs_core::model::{GreetingId, Identity};

use super::admin::UNAUTHORIZED_BANNER;
use super::lesson::{ADVANCE_DELAY, LessonIntent};
use super::test_harness::{PendingIdentityProvider, ViewHarness, ViewKind, setup_view_harness};

fn signed_in(nickname: &str) -> Arc<StaticIdentityProvider> {
    Arc::new(StaticIdentityProvider::signed_in(Identity::with_nickname(nickname)))
}

async fn lesson_harness(initial: GreetingId) -> ViewHarness {
    let mut harness = setup_view_harness(
        ViewKind::Lesson(initial),
        Arc::new(StaticIdentityProvider::signed_out()),
    );
    harness.rebuild();
    harness.settle().await;
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_greets_signed_in_user() {
    let mut harness = setup_view_harness(ViewKind::Home, signed_in("sam"));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Welcome back, sam."), "missing greeting in {html}");
    assert!(html.contains("Start lesson"), "missing lesson link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(
        ViewKind::Home,
        Arc::new(StaticIdentityProvider::failing("Session expired")),
    );
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_shows_only_spinner_while_loading() {
    let mut harness = setup_view_harness(ViewKind::Admin, Arc::new(PendingIdentityProvider));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("spinner"), "missing spinner in {html}");
    assert!(!html.contains(UNAUTHORIZED_BANNER), "unexpected banner in {html}");
    assert!(!html.contains("Admin Dashboard"), "unexpected panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_shows_provider_error_verbatim() {
    let mut harness = setup_view_harness(
        ViewKind::Admin,
        Arc::new(StaticIdentityProvider::failing("Session expired")),
    );
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Session expired"), "missing message in {html}");
    assert!(!html.contains("spinner"), "unexpected spinner in {html}");
    assert!(!html.contains(UNAUTHORIZED_BANNER), "unexpected banner in {html}");
    assert!(!html.contains("Admin Dashboard"), "unexpected panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_turns_away_non_admins() {
    for provider in [
        signed_in("Admin"),
        Arc::new(StaticIdentityProvider::signed_out()),
        Arc::new(StaticIdentityProvider::signed_in(Identity::default())),
    ] {
        let mut harness = setup_view_harness(ViewKind::Admin, provider);
        harness.rebuild();
        harness.settle().await;
        let html = harness.render();
        assert!(html.contains(UNAUTHORIZED_BANNER), "missing banner in {html}");
        assert!(!html.contains("Admin Dashboard"), "unexpected panel in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn admin_view_smoke_builds_panel_for_admin() {
    let mut harness = setup_view_harness(ViewKind::Admin, signed_in("admin"));
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Admin Dashboard"), "missing panel in {html}");
    assert!(html.contains("Thank You"), "missing dictionary row in {html}");
    assert!(!html.contains(UNAUTHORIZED_BANNER), "unexpected banner in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_browsing_card() {
    let harness = lesson_harness(GreetingId::Goodbye).await;
    let html = harness.render();
    assert!(html.contains("Common Greetings in ASL"), "missing page title in {html}");
    assert!(html.contains("Goodbye"), "missing greeting in {html}");
    assert!(html.contains("api/proxy-video?url="), "missing proxied video in {html}");
    assert!(html.contains("Test Your Knowledge"), "missing quiz button in {html}");
    assert!(html.contains("Cultural Context"), "missing cultural context in {html}");
    assert!(html.contains("Back to Roadmap"), "missing roadmap link in {html}");
    assert!(!html.contains("Try Again"), "quiz should be hidden in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_judges_quiz_answers() {
    let mut harness = lesson_harness(GreetingId::Hello).await;
    let dispatch = harness.lesson().dispatch();

    dispatch.call(LessonIntent::StartQuiz);
    harness.drive();
    dispatch.call(LessonIntent::SelectAnswer("Forehead".to_string()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Correct! Well done!"), "missing praise in {html}");

    dispatch.call(LessonIntent::SelectAnswer("Chin".to_string()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Keep practicing!"), "missing retry copy in {html}");

    dispatch.call(LessonIntent::Retry);
    harness.drive();
    let session = harness.lesson().session();
    assert!(session.read().quiz_visible());
    assert_eq!(session.read().is_correct(), None);
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_forwards_hub_labels_only_during_quiz() {
    let mut harness = lesson_harness(GreetingId::Hello).await;
    let session = harness.lesson().session();

    harness.detections.publish("hello");
    harness.drive_async().await;
    assert_eq!(session.read().last_detected_sign(), None);
    assert_eq!(harness.detections.current_label(), None);

    harness.lesson().dispatch().call(LessonIntent::StartQuiz);
    harness.drive();
    assert_eq!(harness.detections.current_label().as_deref(), Some("Hello"));

    harness.detections.publish(" HELLO ");
    harness.settle().await;
    assert_eq!(session.read().is_correct(), Some(true));
    let html = harness.render();
    assert!(html.contains("Last detected:"), "missing last detection in {html}");
    assert!(html.contains("Correct! Well done!"), "missing praise in {html}");
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lesson_view_advances_after_delay() {
    let mut harness = lesson_harness(GreetingId::Please).await;
    let dispatch = harness.lesson().dispatch();

    dispatch.call(LessonIntent::StartQuiz);
    dispatch.call(LessonIntent::Detect("please".to_string()));
    harness.drive_async().await;
    assert!(harness.render().contains("Nice signing!"));
    assert!(harness.advances.fired().is_empty());

    tokio::time::advance(ADVANCE_DELAY).await;
    harness.settle().await;
    assert_eq!(harness.advances.fired(), [GreetingId::Please]);
    assert!(!harness.render().contains("Nice signing!"));
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lesson_view_drops_stale_advance_after_retry() {
    let mut harness = lesson_harness(GreetingId::Hello).await;
    let dispatch = harness.lesson().dispatch();

    dispatch.call(LessonIntent::StartQuiz);
    dispatch.call(LessonIntent::Detect("hello".to_string()));
    harness.drive_async().await;
    dispatch.call(LessonIntent::Retry);
    harness.drive();

    tokio::time::advance(ADVANCE_DELAY).await;
    harness.settle().await;
    assert!(harness.advances.fired().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lesson_view_unmount_cancels_pending_advance() {
    let mut harness = lesson_harness(GreetingId::Hello).await;
    let dispatch = harness.lesson().dispatch();

    dispatch.call(LessonIntent::StartQuiz);
    dispatch.call(LessonIntent::Detect("hello".to_string()));
    harness.drive_async().await;

    harness.mount.unmount();
    harness.drive();
    assert!(harness.render().contains("Unmounted"));
    assert_eq!(harness.detections.current_label(), None);

    tokio::time::advance(ADVANCE_DELAY * 2).await;
    harness.settle().await;
    assert!(harness.advances.fired().is_empty());
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn lesson_view_wrong_pick_overrides_pending_advance() {
    let mut harness = lesson_harness(GreetingId::Hello).await;
    let dispatch = harness.lesson().dispatch();

    dispatch.call(LessonIntent::StartQuiz);
    dispatch.call(LessonIntent::Detect("hello".to_string()));
    harness.drive_async().await;
    assert!(harness.render().contains("Nice signing!"));

    dispatch.call(LessonIntent::SelectAnswer("Chin".to_string()));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("Keep practicing!"), "missing retry copy in {html}");
    assert!(!html.contains("Nice signing!"), "stale celebration in {html}");

    tokio::time::advance(ADVANCE_DELAY * 2).await;
    harness.settle().await;
    assert!(harness.advances.fired().is_empty());
}
