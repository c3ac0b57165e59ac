use ::common::{Banner, Blog, Service};
use admin::{Action, Phase};

use crate::common::{TestApp, png};

mod create_then_refresh {
    use super::*;

    #[tokio::test]
    async fn banner_appears_exactly_once() {
        let app = TestApp::spawn().await;
        app.backend.seed_banner("https://cdn/old.png", true).await;
        let mut view = app.mounted::<Banner>().await;

        view.dispatch(Action::Attach(png("hero.png"))).await;
        view.dispatch(Action::Submit).await;

        let state = view.state();
        assert_eq!(state.list().len(), 2);
        let created: Vec<_> = state
            .list()
            .records()
            .iter()
            .filter(|b| b.image_url.ends_with("hero.png"))
            .collect();
        assert_eq!(created.len(), 1);
        assert_eq!(state.notice().unwrap().message, "Banner uploaded");
        assert_eq!(state.summary(), "Total Banners: 2");
    }

    #[tokio::test]
    async fn service_appears_exactly_once_with_points() {
        let app = TestApp::spawn().await;
        let mut view = app.mounted::<Service>().await;

        view.dispatch(Action::set_field("title", "Freight")).await;
        view.dispatch(Action::set_field("description", "Door to door")).await;
        view.dispatch(Action::add_list_item("points", "Fast")).await;
        view.dispatch(Action::add_list_item("points", "  ")).await;
        view.dispatch(Action::add_list_item("points", "Tracked")).await;
        view.dispatch(Action::Attach(png("truck.png"))).await;
        view.dispatch(Action::Submit).await;

        let records = view.state().list().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Freight");
        assert_eq!(records[0].points, vec!["Fast", "Tracked"]);
        assert_eq!(view.state().notice().unwrap().message, "Service Added!");
    }

    #[tokio::test]
    async fn blog_appears_exactly_once() {
        let app = TestApp::spawn().await;
        app.backend.seed_blog("Older", "older", true).await;
        let mut view = app.mounted::<Blog>().await;

        for (name, value) in [
            ("title", "Intro"),
            ("slug", "intro"),
            ("description", "First post"),
            ("fullContent", "Hello world"),
        ] {
            view.dispatch(Action::set_field(name, value)).await;
        }
        view.dispatch(Action::Attach(png("cover.png"))).await;
        view.dispatch(Action::Submit).await;

        let titles: Vec<_> = view
            .state()
            .list()
            .records()
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Older", "Intro"]);
    }
}

mod delete {
    use super::*;

    #[tokio::test]
    async fn removes_only_the_confirmed_id() {
        let app = TestApp::with_answers([true]).await;
        let a = app.backend.seed_banner("https://cdn/a.png", true).await;
        let b = app.backend.seed_banner("https://cdn/b.png", true).await;
        let c = app.backend.seed_banner("https://cdn/c.png", false).await;
        let mut view = app.mounted::<Banner>().await;

        view.dispatch(Action::Delete(b.id.clone())).await;

        let ids: Vec<_> = view.state().list().records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![a.id, c.id]);
        assert_eq!(app.confirm.prompts(), vec!["Delete this banner?"]);
        assert_eq!(view.state().phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn declined_confirmation_sends_nothing() {
        let app = TestApp::with_answers([false]).await;
        let service = app.backend.seed_service("Freight", "d", &[]).await;
        let mut view = app.mounted::<Service>().await;
        app.backend.clear_requests().await;

        view.dispatch(Action::Delete(service.id)).await;

        assert_eq!(app.backend.request_count().await, 0);
        assert_eq!(view.state().list().len(), 1);
        assert_eq!(view.state().phase(), Phase::Idle);
    }
}

mod validation {
    use super::*;

    #[tokio::test]
    async fn missing_required_field_never_hits_network() {
        let app = TestApp::spawn().await;
        let mut view = app.mounted::<Blog>().await;
        app.backend.clear_requests().await;

        view.dispatch(Action::set_field("title", "Only a title")).await;
        view.dispatch(Action::Attach(png("cover.png"))).await;
        view.dispatch(Action::Submit).await;

        assert_eq!(app.backend.request_count().await, 0);
        let notice = view.state().notice().unwrap();
        assert!(notice.is_error());
        assert!(notice.message.starts_with("Please fill in: URL Slug"));
    }

    #[tokio::test]
    async fn missing_image_on_create_never_hits_network() {
        let app = TestApp::spawn().await;
        let mut view = app.mounted::<Banner>().await;
        app.backend.clear_requests().await;

        view.dispatch(Action::Submit).await;

        assert_eq!(app.backend.request_count().await, 0);
        assert_eq!(
            view.state().notice().unwrap().message,
            "Please select an image"
        );
    }
}

mod toggle {
    use super::*;

    #[tokio::test]
    async fn two_banner_toggles_restore_flag() {
        let app = TestApp::spawn().await;
        let banner = app.backend.seed_banner("https://cdn/a.png", true).await;
        let mut view = app.mounted::<Banner>().await;

        view.dispatch(Action::Toggle(banner.id.clone())).await;
        assert!(!view.state().list().get(&banner.id).unwrap().is_active);
        assert_eq!(view.state().rows()[0].status, Some("Hidden"));

        view.dispatch(Action::Toggle(banner.id.clone())).await;
        assert!(view.state().list().get(&banner.id).unwrap().is_active);
    }

    #[tokio::test]
    async fn two_blog_toggles_restore_flag_without_confirmation() {
        let app = TestApp::spawn().await;
        let blog = app.backend.seed_blog("Intro", "intro", false).await;
        let mut view = app.mounted::<Blog>().await;

        view.dispatch(Action::Toggle(blog.id.clone())).await;
        assert!(view.state().list().get(&blog.id).unwrap().is_active);
        view.dispatch(Action::Toggle(blog.id.clone())).await;
        assert!(!view.state().list().get(&blog.id).unwrap().is_active);

        assert!(app.confirm.prompts().is_empty());
    }
}

mod list_items {
    use super::*;

    #[tokio::test]
    async fn removing_middle_point_is_stable() {
        let app = TestApp::spawn().await;
        let mut view = app.view::<Service>();

        for point in ["a", "b", "c"] {
            view.dispatch(Action::add_list_item("points", point)).await;
        }
        view.dispatch(Action::remove_list_item("points", 1)).await;
        view.dispatch(Action::remove_list_item("points", 5)).await;

        let points = view
            .state()
            .form()
            .value("points")
            .and_then(|v| v.as_list())
            .unwrap()
            .to_vec();
        assert_eq!(points, vec!["a", "c"]);
    }
}
