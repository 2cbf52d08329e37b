use common_http_errors::ApiError;

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

async fn body_string(resp: axum::response::Response) -> String {
    let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn forbidden_shape() {
    let resp = ApiError::forbidden().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(resp.headers().get("X-Error-Code").unwrap(), "forbidden");
    let body = body_string(resp).await;
    assert!(body.contains("\"error\":true"), "body={}", body);
    assert!(body.contains("\"code\":\"forbidden\""), "body={}", body);
}

#[tokio::test]
async fn not_found_carries_route_code() {
    let resp = ApiError::NotFound {
        code: "user_not_found",
    }
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers().get("X-Error-Code").unwrap(),
        "user_not_found"
    );
    let body = body_string(resp).await;
    assert!(body.contains("\"code\":\"user_not_found\""));
}

#[tokio::test]
async fn validation_shape() {
    let resp = ApiError::validation("email must not be empty").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        resp.headers().get("X-Error-Code").unwrap(),
        "validation_error"
    );
    let body = body_string(resp).await;
    assert!(body.contains("email must not be empty"), "body={}", body);
}

#[tokio::test]
async fn payment_provider_maps_to_bad_gateway() {
    let resp = ApiError::payment_provider("amount must be positive").into_response();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        resp.headers().get("X-Error-Code").unwrap(),
        "payment_provider_error"
    );
}

#[tokio::test]
async fn store_maps_to_internal_server_error() {
    let resp = ApiError::store("connection reset").into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.headers().get("X-Error-Code").unwrap(), "store_error");
    let body = body_string(resp).await;
    assert!(body.contains("connection reset"), "body={}", body);
}
