use super::test_harness::{
    StubResponse, ViewKind, progress_row, setup_gated_view_harness, setup_view_harness,
};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders() {
    let mut harness = setup_view_harness(ViewKind::Home, StubResponse::Rows(vec![]));
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Home"), "missing title in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_progress_shows_spinner_until_fetch_resolves() {
    let (mut harness, gate) = setup_gated_view_harness(
        ViewKind::CourseProgress,
        StubResponse::Rows(vec![progress_row(
            "a",
            "Course A",
            "beginner",
            30,
            &[100.0, 50.0],
        )]),
    );

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("spinner"), "missing spinner in {html}");
    assert!(!html.contains("course-card"), "cards rendered early in {html}");

    gate.notify_one();
    harness.drive_async().await;
    let html = harness.render();
    assert!(!html.contains("spinner"), "spinner still shown in {html}");
    assert!(html.contains("Course A"), "missing card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_progress_renders_cards_in_response_order() {
    let mut harness = setup_view_harness(
        ViewKind::CourseProgress,
        StubResponse::Rows(vec![
            progress_row("a", "Course A", "beginner", 30, &[100.0, 50.0]),
            progress_row("b", "Course B", "advanced", 60, &[]),
        ]),
    );

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    let idx_a = html.find("Course A").expect("Course A rendered");
    let idx_b = html.find("Course B").expect("Course B rendered");
    assert!(idx_a < idx_b, "upstream order not preserved in {html}");

    // Course A: 2 enrolled, avg 75, 1 of 2 complete.
    assert!(html.contains("2 enrolled"), "missing count in {html}");
    assert!(html.contains("30 minutes"), "missing duration in {html}");
    assert!(html.contains("50% completed"), "missing completion in {html}");
    assert!(html.contains("width: 75%"), "missing bar width in {html}");

    // Course B: no enrollments, everything zero.
    assert!(html.contains("0 enrolled"), "missing zero count in {html}");
    assert!(html.contains("0% completed"), "missing zero completion in {html}");
    assert!(html.contains("width: 0%"), "missing zero bar width in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_progress_labels_round_but_bar_width_does_not() {
    let mut harness = setup_view_harness(
        ViewKind::CourseProgress,
        StubResponse::Rows(vec![progress_row(
            "a",
            "Course A",
            "beginner",
            30,
            &[50.0, 49.0],
        )]),
    );

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("width: 49.5%"), "bar width rounded in {html}");
    assert!(html.contains("50%"), "missing rounded label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn course_progress_styles_recognized_levels_only() {
    let mut harness = setup_view_harness(
        ViewKind::CourseProgress,
        StubResponse::Rows(vec![
            progress_row("a", "Course A", "beginner", 30, &[]),
            progress_row("b", "Course B", "masterclass", 60, &[]),
        ]),
    );

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("level-beginner"), "missing badge class in {html}");
    assert!(html.contains("masterclass"), "missing fallback label in {html}");
    assert!(
        !html.contains("level-masterclass"),
        "unknown level got a modifier in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn course_progress_failure_renders_empty_list() {
    let mut harness = setup_view_harness(ViewKind::CourseProgress, StubResponse::Fail);

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    // The error is logged, not surfaced: no spinner, no cards, no message.
    assert!(!html.contains("spinner"), "spinner still shown in {html}");
    assert!(!html.contains("course-card"), "cards rendered in {html}");
    assert!(
        !html.contains("Something went wrong"),
        "error surfaced in {html}"
    );
}
