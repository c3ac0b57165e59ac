use client::ResourceApi;
use ::common::{Banner, Payload, RecordId};

use crate::common::{TestApp, png};

mod listing {
    use super::*;

    #[tokio::test]
    async fn list_returns_seeded_banners_in_order() {
        let app = TestApp::spawn().await;
        app.backend.seed_banner("https://cdn/a.png", true).await;
        app.backend.seed_banner("https://cdn/b.png", false).await;

        let banners = app.client::<Banner>().list().await.unwrap();

        assert_eq!(banners.len(), 2);
        assert_eq!(banners[0].image_url, "https://cdn/a.png");
        assert!(!banners[1].is_active);

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/api/banners/all");
    }
}

mod upload {
    use super::*;

    #[tokio::test]
    async fn create_sends_file_under_image_url_part() {
        let app = TestApp::spawn().await;

        let created = app
            .client::<Banner>()
            .create(&Payload::new(), Some(&png("hero.png")))
            .await
            .unwrap()
            .expect("record in response");

        assert!(created.image_url.ends_with("hero.png"));
        assert_eq!(app.backend.banners().await, vec![created]);

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].path, "/api/banners/add");
        assert!(requests[0].is_multipart());
    }

    #[tokio::test]
    async fn create_without_file_is_rejected_with_server_message() {
        let app = TestApp::spawn().await;

        let err = app
            .client::<Banner>()
            .create(&Payload::new(), None)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "No image uploaded");
    }
}

mod toggle {
    use super::*;

    #[tokio::test]
    async fn toggle_puts_negated_flag_to_update_endpoint() {
        let app = TestApp::spawn().await;
        let banner = app.backend.seed_banner("https://cdn/a.png", true).await;

        app.client::<Banner>().toggle(&banner).await.unwrap();

        let stored = app.backend.banners().await;
        assert!(!stored[0].is_active);
        assert_eq!(stored[0].image_url, "https://cdn/a.png");

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].path, format!("/api/banners/update/{}", banner.id));
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn two_toggles_restore_original_state() {
        let app = TestApp::spawn().await;
        app.backend.seed_banner("https://cdn/a.png", false).await;
        let client = app.client::<Banner>();

        for _ in 0..2 {
            let current = client.list().await.unwrap().remove(0);
            client.toggle(&current).await.unwrap();
        }

        assert!(!client.list().await.unwrap()[0].is_active);
    }
}

mod removal {
    use super::*;

    #[tokio::test]
    async fn delete_removes_only_that_banner() {
        let app = TestApp::spawn().await;
        let keep = app.backend.seed_banner("https://cdn/keep.png", true).await;
        let drop = app.backend.seed_banner("https://cdn/drop.png", true).await;

        let client = app.client::<Banner>();
        client.delete(&drop.id).await.unwrap();

        assert_eq!(client.list().await.unwrap(), vec![keep]);
    }

    #[tokio::test]
    async fn delete_unknown_id_reports_not_found() {
        let app = TestApp::spawn().await;
        app.backend.seed_banner("https://cdn/a.png", true).await;

        let client = app.client::<Banner>();
        let err = client.delete(&RecordId::from(999)).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_eq!(client.list().await.unwrap().len(), 1);
    }
}
