use std::sync::Arc;

use axum::extract::FromRef;
use axum::http::{
    header::{ACCEPT, CONTENT_TYPE},
    HeaderName, HeaderValue, Method,
};
use axum::routing::{delete, get, post};
use axum::Router;
use common_auth::{TokenSigner, TokenVerifier};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::gateway::PaymentGateway;
use crate::store::CollectionStore;
use crate::{
    cart_handlers, class_handlers, instructor_handlers, payment_handlers, token_handlers,
    user_handlers,
};

/// Shared application state: one store handle, one verifier, one signer, one
/// payment gateway, reused across all requests.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CollectionStore>,
    pub verifier: Arc<TokenVerifier>,
    pub signer: Arc<TokenSigner>,
    pub gateway: Arc<dyn PaymentGateway>,
}

impl FromRef<AppState> for Arc<TokenVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}

pub async fn health() -> &'static str {
    "ok"
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/jwt", post(token_handlers::issue_token))
        .route(
            "/users",
            get(user_handlers::list_users).post(user_handlers::create_user),
        )
        .route(
            "/users/admin/:key",
            get(user_handlers::admin_status).patch(user_handlers::promote_user),
        )
        .route(
            "/classes",
            get(class_handlers::list_classes).post(class_handlers::create_class),
        )
        .route("/classes/:id", delete(class_handlers::delete_class))
        .route("/instructors", get(instructor_handlers::list_instructors))
        .route(
            "/carts",
            get(cart_handlers::list_cart_items).post(cart_handlers::create_cart_item),
        )
        .route("/carts/:id", delete(cart_handlers::delete_cart_item))
        .route(
            "/create-payment-intent",
            post(payment_handlers::create_payment_intent),
        )
        .route("/payments", post(payment_handlers::record_payment))
        .with_state(state)
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(
            allowed_origins
                .iter()
                .filter_map(|origin| origin.parse::<HeaderValue>().ok())
                .collect::<Vec<_>>(),
        ))
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([
            ACCEPT,
            CONTENT_TYPE,
            HeaderName::from_static("authorization"),
        ])
}
