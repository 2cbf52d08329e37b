mod support;

use axum::http::StatusCode;
use support::{seed_class, seed_instructor, test_app};

#[tokio::test]
async fn class_listing_is_public() {
    let app = test_app();
    seed_class(app.store.as_ref(), "Karate Basics").await;
    seed_class(app.store.as_ref(), "Judo Advanced").await;

    let (status, body) = app.send("GET", "/classes", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(|classes| classes.len()), Some(2));
}

#[tokio::test]
async fn instructor_listing_is_public() {
    let app = test_app();
    seed_instructor(app.store.as_ref(), "Sensei Kim", "kim@example.com").await;

    let (status, body) = app.send("GET", "/instructors", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let instructors = body.as_array().expect("array");
    assert_eq!(instructors.len(), 1);
    assert_eq!(instructors[0]["email"], "kim@example.com");
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let app = test_app();
    let (status, _) = app.send("GET", "/healthz", None, None).await;
    assert_eq!(status, StatusCode::OK);
}
