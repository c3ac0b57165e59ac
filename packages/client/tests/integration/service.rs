use client::{ClientError, ResourceApi};
use ::common::{Payload, RecordId, Service};
use serde_json::json;

use crate::common::{TestApp, png};

mod create {
    use super::*;

    #[tokio::test]
    async fn points_are_json_encoded_in_multipart_body() {
        let app = TestApp::spawn().await;
        let payload = Payload::new()
            .with("title", "Freight")
            .with("description", "Door to door")
            .with("points", json!(["Fast", "Safe", "Fast"]));

        let created = app
            .client::<Service>()
            .create(&payload, Some(&png("truck.png")))
            .await
            .unwrap()
            .expect("record in response");

        assert_eq!(created.points, vec!["Fast", "Safe", "Fast"]);
        assert!(created.image_url.as_deref().unwrap().ends_with("truck.png"));
    }

    #[tokio::test]
    async fn refresh_after_create_contains_new_record_once() {
        let app = TestApp::spawn().await;
        app.backend.seed_service("Storage", "Warehousing", &[]).await;
        let client = app.client::<Service>();

        let payload = Payload::new()
            .with("title", "Freight")
            .with("description", "Door to door")
            .with("points", json!([]));
        let created = client
            .create(&payload, Some(&png("t.png")))
            .await
            .unwrap()
            .expect("record in response");

        let listed = client.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed.iter().filter(|s| s.id == created.id).count(), 1);
    }
}

mod unsupported {
    use super::*;

    #[tokio::test]
    async fn toggle_is_refused_without_a_request() {
        let app = TestApp::spawn().await;
        let service = app.backend.seed_service("Storage", "Warehousing", &["Dry"]).await;

        let err = app.client::<Service>().toggle(&service).await.unwrap_err();

        assert!(matches!(err, ClientError::Unsupported { .. }));
        assert_eq!(app.backend.request_count().await, 0);
    }
}

mod removal {
    use super::*;

    #[tokio::test]
    async fn delete_hits_delete_path() {
        let app = TestApp::spawn().await;
        let service = app.backend.seed_service("Storage", "Warehousing", &[]).await;

        app.client::<Service>().delete(&service.id).await.unwrap();

        let requests = app.backend.requests().await;
        assert_eq!(requests[0].method, "DELETE");
        assert_eq!(requests[0].path, format!("/api/services/delete/{}", service.id));
        assert!(app.backend.services().await.is_empty());
    }

    #[tokio::test]
    async fn delete_of_missing_service_leaves_others() {
        let app = TestApp::spawn().await;
        app.backend.seed_service("Storage", "Warehousing", &[]).await;

        let client = app.client::<Service>();
        assert!(client.delete(&RecordId::from("nope")).await.is_err());
        assert_eq!(client.list().await.unwrap().len(), 1);
    }
}
