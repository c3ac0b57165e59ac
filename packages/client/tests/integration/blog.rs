use client::ResourceApi;
use ::common::{Blog, Payload};

use crate::common::{TestApp, png};

fn blog_payload(title: &str, slug: &str) -> Payload {
    Payload::new()
        .with("title", title)
        .with("slug", slug)
        .with("description", "Short")
        .with("fullContent", "Long body")
}

mod create {
    use super::*;

    #[tokio::test]
    async fn create_uses_create_path_and_image_part() {
        let app = TestApp::spawn().await;

        let created = app
            .client::<Blog>()
            .create(&blog_payload("Intro", "intro-post"), Some(&png("cover.png")))
            .await
            .unwrap()
            .expect("record in response");

        assert_eq!(created.slug, "intro-post");
        assert_eq!(created.full_content, "Long body");
        assert!(created.image_url.is_some());

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].path, "/api/blogs/create");
        assert!(requests[0].is_multipart());
    }

    #[tokio::test]
    async fn list_uses_trailing_slash_root() {
        let app = TestApp::spawn().await;
        app.backend.seed_blog("Intro", "intro", true).await;

        let blogs = app.client::<Blog>().list().await.unwrap();

        assert_eq!(blogs.len(), 1);
        assert_eq!(app.backend.requests().await[0].path, "/api/blogs/");
    }
}

mod update {
    use super::*;

    #[tokio::test]
    async fn update_without_file_sends_json() {
        let app = TestApp::spawn().await;
        let blog = app.backend.seed_blog("Intro", "intro", true).await;

        let updated = app
            .client::<Blog>()
            .update(&blog.id, &blog_payload("Intro v2", "intro-v2"), None)
            .await
            .unwrap()
            .expect("record in response");

        assert_eq!(updated.title, "Intro v2");
        assert_eq!(updated.image_url, blog.image_url);

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn update_with_file_replaces_image() {
        let app = TestApp::spawn().await;
        let blog = app.backend.seed_blog("Intro", "intro", true).await;

        let updated = app
            .client::<Blog>()
            .update(&blog.id, &blog_payload("Intro", "intro"), Some(&png("new.png")))
            .await
            .unwrap()
            .expect("record in response");

        assert!(updated.image_url.unwrap().ends_with("new.png"));
        assert!(app.backend.requests().await[0].is_multipart());
    }
}

mod toggle {
    use super::*;

    #[tokio::test]
    async fn toggle_patches_and_flips() {
        let app = TestApp::spawn().await;
        let blog = app.backend.seed_blog("Intro", "intro", true).await;
        let client = app.client::<Blog>();

        client.toggle(&blog).await.unwrap();
        assert!(!client.list().await.unwrap()[0].is_active);

        let flipped = client.list().await.unwrap().remove(0);
        client.toggle(&flipped).await.unwrap();
        assert!(client.list().await.unwrap()[0].is_active);

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].method, "PATCH");
        assert_eq!(requests[0].path, format!("/api/blogs/{}", blog.id));
    }
}
