use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use common_auth::{TokenConfig, TokenSigner, TokenVerifier};
use tokio::net::TcpListener;
use tracing::{info, warn};

use school_service::app::{build_router, cors_layer, AppState};
use school_service::config::load_config;
use school_service::gateway::{PaymentGateway, StripeGateway, StubGateway};
use school_service::store::{CollectionStore, MemoryStore, PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = load_config()?;

    let token_config =
        TokenConfig::new(config.token_secret.clone()).with_ttl(config.token_ttl_seconds);
    let verifier = Arc::new(TokenVerifier::new(&token_config));
    let signer = Arc::new(TokenSigner::new(&token_config));

    let mut pg_handle: Option<Arc<PgStore>> = None;
    let store: Arc<dyn CollectionStore> = match &config.database_url {
        Some(url) => {
            let store = Arc::new(
                PgStore::connect(url)
                    .await
                    .context("failed to connect to the collection store")?,
            );
            info!("collection store connected");
            pg_handle = Some(store.clone());
            store
        }
        None => {
            warn!("DATABASE_URL not set; using the in-memory store (data will not survive restart)");
            Arc::new(MemoryStore::new())
        }
    };

    let gateway: Arc<dyn PaymentGateway> = match &config.payment_secret_key {
        Some(key) => Arc::new(StripeGateway::new(key.clone())),
        None => {
            warn!("PAYMENT_SECRET_KEY not set; using the stub payment gateway");
            Arc::new(StubGateway::new())
        }
    };

    let state = AppState {
        store,
        verifier,
        signer,
        gateway,
    };
    let app = build_router(state).layer(cors_layer(&config.allowed_origins));

    let addr = SocketAddr::new(config.host.parse()?, config.port);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "school service listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = pg_handle {
        store.close().await;
        info!("collection store connection closed");
    }

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
