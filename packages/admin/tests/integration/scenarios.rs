use ::common::{Banner, Blog, RecordId, Service};
use admin::{Action, Command, Phase};

use crate::common::{TestApp, png};

#[tokio::test]
async fn blog_slug_is_slugified_before_sending() {
    let app = TestApp::spawn().await;
    let mut view = app.mounted::<Blog>().await;

    view.dispatch(Action::set_field("title", "Intro")).await;
    view.dispatch(Action::set_field("slug", "Intro Post")).await;
    view.dispatch(Action::set_field("description", "First")).await;
    view.dispatch(Action::set_field("fullContent", "Body")).await;
    view.dispatch(Action::Attach(png("cover.png"))).await;
    view.dispatch(Action::Submit).await;

    let stored = app.backend.blogs().await;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].slug, "intro-post");
    assert_eq!(
        view.state().notice().unwrap().message,
        "Blog published successfully!"
    );
}

#[tokio::test]
async fn deleting_unknown_id_leaves_list_intact() {
    let app = TestApp::with_answers([true]).await;
    app.backend.seed_blog("Intro", "intro", true).await;
    let mut view = app.mounted::<Blog>().await;

    view.dispatch(Action::Delete(RecordId::from(404))).await;

    let state = view.state();
    assert_eq!(state.phase(), Phase::Idle);
    assert_eq!(state.list().len(), 1);
    assert_eq!(
        state.notice().unwrap().message,
        "Failed to delete blog: Blog not found"
    );
}

#[tokio::test]
async fn rapid_double_submit_sends_one_request() {
    let app = TestApp::spawn().await;
    let mut view = app.mounted::<Banner>().await;
    view.dispatch(Action::Attach(png("hero.png"))).await;
    app.backend.clear_requests().await;

    let first = view.apply(Action::Submit);
    let second = view.apply(Action::Submit);
    assert!(matches!(first[..], [Command::Create { .. }]));
    assert!(second.is_empty());
    assert_eq!(view.state().phase(), Phase::Submitting);

    view.run(first).await;
    view.run(second).await;

    let posts: Vec<_> = app
        .backend
        .requests()
        .await
        .into_iter()
        .filter(|r| r.method == "POST")
        .collect();
    assert_eq!(posts.len(), 1);
    assert!(posts[0].is_multipart());
    assert_eq!(app.backend.banners().await.len(), 1);
}

#[tokio::test]
async fn create_acknowledged_with_message_only_counts_as_success() {
    let app = TestApp::spawn().await;
    app.backend.acknowledge_writes("Banner uploaded successfully").await;
    let mut view = app.mounted::<Banner>().await;

    view.dispatch(Action::Attach(png("hero.png"))).await;
    view.dispatch(Action::Submit).await;

    let state = view.state();
    let notice = state.notice().unwrap();
    assert!(!notice.is_error());
    assert_eq!(notice.message, "Banner uploaded");
    assert!(state.form().file().is_none());
    assert_eq!(state.list().len(), 1);
    assert_eq!(app.backend.banners().await.len(), 1);
}

#[tokio::test]
async fn server_rejection_is_shown_and_draft_kept() {
    let app = TestApp::spawn().await;
    let mut view = app.mounted::<Service>().await;
    app.backend
        .reject_next(409, Some("Service title already exists"))
        .await;

    view.dispatch(Action::set_field("title", "Freight")).await;
    view.dispatch(Action::set_field("description", "Door to door")).await;
    view.dispatch(Action::Attach(png("truck.png"))).await;
    view.dispatch(Action::Submit).await;

    let state = view.state();
    assert_eq!(
        state.notice().unwrap().message,
        "Failed to add service: Service title already exists"
    );
    assert_eq!(
        state.form().value("title").and_then(|v| v.as_text()),
        Some("Freight")
    );
    assert!(state.form().file().is_some());
    assert!(state.list().is_empty());
}

#[tokio::test]
async fn failed_refresh_keeps_rows_and_reports() {
    let app = TestApp::spawn().await;
    app.backend.seed_banner("https://cdn/a.png", true).await;
    let mut view = app.mounted::<Banner>().await;
    app.backend.reject_next(503, None).await;

    view.dispatch(Action::Refresh).await;

    let state = view.state();
    assert_eq!(state.list().len(), 1);
    assert_eq!(
        state.notice().unwrap().message,
        "Failed to load banners: Request failed with status 503 Service Unavailable"
    );
}

#[tokio::test]
async fn preview_urls_are_revoked_on_replace_and_submit() {
    let app = TestApp::spawn().await;
    let mut view = app.mounted::<Banner>().await;

    view.dispatch(Action::Attach(png("one.png"))).await;
    let first = view.state().preview().unwrap().to_string();
    assert_eq!(app.urls.resolve(&first).as_deref(), Some("one.png"));

    view.dispatch(Action::Attach(png("two.png"))).await;
    assert_eq!(app.urls.resolve(&first), None);
    assert_eq!(app.urls.live_count(), 1);

    view.dispatch(Action::Submit).await;
    assert_eq!(view.state().preview(), None);
    assert_eq!(app.urls.live_count(), 0);
}

#[tokio::test]
async fn editing_a_blog_updates_in_place() {
    let app = TestApp::spawn().await;
    let blog = app.backend.seed_blog("Intro", "intro", true).await;
    let mut view = app.mounted::<Blog>().await;
    app.backend.clear_requests().await;

    view.dispatch(Action::BeginEdit(blog.id.clone())).await;
    view.dispatch(Action::set_field("title", "Intro, revised")).await;
    view.dispatch(Action::Submit).await;

    let requests = app.backend.requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, format!("/api/blogs/{}", blog.id));
    assert!(!requests[0].is_multipart());

    let state = view.state();
    assert_eq!(state.list().len(), 1);
    assert_eq!(state.list().records()[0].title, "Intro, revised");
    assert!(!state.form().is_editing());
    assert_eq!(state.notice().unwrap().message, "Blog updated successfully!");
}

#[tokio::test]
async fn cancel_edit_returns_to_create_mode() {
    let app = TestApp::spawn().await;
    let blog = app.backend.seed_blog("Intro", "intro", true).await;
    let mut view = app.mounted::<Blog>().await;

    view.dispatch(Action::BeginEdit(blog.id)).await;
    assert!(view.state().form().is_editing());

    view.dispatch(Action::Cancel).await;
    assert!(!view.state().form().is_editing());
    assert!(view.state().form().draft().is_empty());
}
