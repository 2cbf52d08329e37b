mod support;

use axum::http::StatusCode;
use school_service::store::{CollectionStore, ROLE_ADMIN};
use serde_json::json;
use support::{seed_cart_item, seed_user, test_app};

#[tokio::test]
async fn missing_credential_is_unauthenticated() {
    let app = test_app();

    for (method, uri) in [
        ("GET", "/users"),
        ("GET", "/carts?email=a@example.com"),
        ("POST", "/create-payment-intent"),
        ("POST", "/payments"),
    ] {
        let (status, body) = app.send(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["error"], true, "{method} {uri}: body={body}");
        assert_eq!(body["code"], "unauthenticated", "{method} {uri}");
    }
}

#[tokio::test]
async fn guarded_mutation_without_credential_touches_no_collection() {
    let app = test_app();
    let item_id = seed_cart_item(app.store.as_ref(), "payer@example.com").await;

    let (status, _) = app
        .send(
            "POST",
            "/payments",
            None,
            Some(json!({
                "email": "payer@example.com",
                "amount": "25.00",
                "transactionId": "pi_123",
                "cartItemIds": [item_id]
            })),
        )
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let remaining = app
        .store
        .list_cart_items("payer@example.com")
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1, "cart must be untouched");
}

#[tokio::test]
async fn minted_credential_opens_guarded_routes() {
    let app = test_app();

    let (status, body) = app
        .send(
            "POST",
            "/jwt",
            None,
            Some(json!({ "email": "student@example.com", "name": "Student" })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().expect("token");

    let bearer = format!("Bearer {token}");
    let (status, body) = app
        .send(
            "GET",
            "/carts?email=student@example.com",
            Some(&bearer),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK, "body={body}");
    assert!(body.is_array());
}

#[tokio::test]
async fn minting_requires_an_email() {
    let app = test_app();
    let (status, body) = app
        .send("POST", "/jwt", None, Some(json!({ "email": "  " })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "validation_error");
}

#[tokio::test]
async fn wrong_scheme_is_invalid_credential() {
    let app = test_app();
    let (status, body) = app
        .send("GET", "/users", Some("Basic credentials"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "invalid_credential");
}

#[tokio::test]
async fn garbage_token_is_invalid_credential() {
    let app = test_app();
    let (status, body) = app
        .send("GET", "/users", Some("Bearer not.a.token"), None)
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "invalid_credential");
}

#[tokio::test]
async fn expired_credential_is_rejected_on_every_guarded_route() {
    let app = test_app();
    seed_user(app.store.as_ref(), "user@x.com", ROLE_ADMIN).await;
    let expired = app.expired_bearer("user@x.com");

    for (method, uri) in [
        ("GET", "/users"),
        ("GET", "/users/admin/user@x.com"),
        ("GET", "/carts?email=user@x.com"),
        ("POST", "/create-payment-intent"),
    ] {
        let (status, body) = app.send(method, uri, Some(&expired), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["code"], "invalid_credential", "{method} {uri}");
    }
}
