use client::{ClientError, ResourceApi, ResourceClient};
use ::common::{Banner, Blog};

use crate::common::TestApp;

#[tokio::test]
async fn structured_error_message_is_surfaced() {
    let app = TestApp::spawn().await;
    app.backend.reject_next(422, Some("Slug already taken")).await;

    let err = app.client::<Blog>().list().await.unwrap_err();

    match err {
        ClientError::RequestFailed { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Slug already taken");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn unstructured_error_gets_generic_message() {
    let app = TestApp::spawn().await;
    app.backend.reject_next(503, None).await;

    let err = app.client::<Banner>().list().await.unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(
        err.to_string(),
        "Request failed with status 503 Service Unavailable"
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ResourceClient::<Banner>::new(format!("http://{addr}/api/banners"));
    let err = client.list().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
