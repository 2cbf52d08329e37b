#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use bigdecimal::BigDecimal;
use common_auth::{TokenConfig, TokenSigner, TokenVerifier};
use tower::ServiceExt;
use uuid::Uuid;

use school_service::app::{build_router, AppState};
use school_service::gateway::StubGateway;
use school_service::store::{
    CartItem, Class, CollectionStore, Instructor, MemoryStore, User, ROLE_ORDINARY,
};

pub const TEST_SECRET: &str = "test-shared-secret";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    pub signer: Arc<TokenSigner>,
}

pub fn test_app() -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let config = TokenConfig::new(TEST_SECRET);
    let signer = Arc::new(TokenSigner::new(&config));

    let state = AppState {
        store: store.clone(),
        verifier: Arc::new(TokenVerifier::new(&config)),
        signer: signer.clone(),
        gateway: Arc::new(StubGateway::new()),
    };

    TestApp {
        router: build_router(state),
        store,
        signer,
    }
}

impl TestApp {
    /// Authorization header value for a freshly signed credential.
    pub fn bearer(&self, email: &str) -> String {
        let issued = self.signer.issue(email, None).expect("sign token");
        format!("Bearer {}", issued.token)
    }

    /// Authorization header value for a credential whose validity window has
    /// already elapsed (same shared secret, back-dated TTL).
    pub fn expired_bearer(&self, email: &str) -> String {
        let signer = TokenSigner::new(&TokenConfig::new(TEST_SECRET).with_ttl(-120));
        let issued = signer.issue(email, None).expect("sign token");
        format!("Bearer {}", issued.token)
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        auth: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
            None => builder.body(Body::empty()).expect("request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };
        (status, value)
    }
}

pub async fn seed_user(store: &MemoryStore, email: &str, role: &str) -> Uuid {
    let user = User {
        id: Uuid::new_v4(),
        name: "Seeded User".to_string(),
        email: email.to_string(),
        photo_url: None,
        role: role.to_string(),
    };
    let id = user.id;
    store.insert_user(user).await.expect("seed user");
    id
}

pub async fn seed_class(store: &MemoryStore, name: &str) -> Uuid {
    let class = Class {
        id: Uuid::new_v4(),
        name: name.to_string(),
        instructor: "Seeded Instructor".to_string(),
        instructor_email: None,
        price: BigDecimal::from(25),
        available_seats: 12,
        image: None,
    };
    let id = class.id;
    store.insert_class(class).await.expect("seed class");
    id
}

pub async fn seed_instructor(store: &MemoryStore, name: &str, email: &str) -> Uuid {
    let instructor = Instructor {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: email.to_string(),
        image: None,
    };
    let id = instructor.id;
    store
        .insert_instructor(instructor)
        .await
        .expect("seed instructor");
    id
}

pub async fn seed_cart_item(store: &MemoryStore, email: &str) -> Uuid {
    let item = CartItem {
        id: Uuid::new_v4(),
        email: email.to_string(),
        class_id: Uuid::new_v4(),
        class_name: "Seeded Class".to_string(),
        price: BigDecimal::from(25),
    };
    let id = item.id;
    store.insert_cart_item(item).await.expect("seed cart item");
    id
}

pub async fn seed_ordinary_user(store: &MemoryStore, email: &str) -> Uuid {
    seed_user(store, email, ROLE_ORDINARY).await
}
