use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment provider request failed: {0}")]
    Transport(String),
    #[error("payment provider rejected the request: {0}")]
    Rejected(String),
}

/// Provider-issued handle the client uses to complete authorization
/// out of band.
#[derive(Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Request an intent for `amount_minor` (integer minor units) in the
    /// given currency, restricted to card payment methods.
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError>;
}

/// Stripe-backed gateway. Only intent creation is used; everything else the
/// provider does happens between the client and Stripe.
pub struct StripeGateway {
    client: Client,
    secret_key: String,
    base_url: String,
}

impl StripeGateway {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_base_url(secret_key, "https://api.stripe.com")
    }

    pub fn with_base_url(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct StripeIntentResponse {
    id: String,
    client_secret: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorResponse {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    message: Option<String>,
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let url = format!("{}/v1/payment_intents", self.base_url);
        let params = [
            ("amount", amount_minor.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error.message)
                .unwrap_or_else(|| format!("HTTP {status} from {url}"));
            return Err(GatewayError::Rejected(message));
        }

        let body: StripeIntentResponse = response
            .json()
            .await
            .map_err(|err| GatewayError::Transport(err.to_string()))?;

        Ok(PaymentIntent {
            id: body.id,
            client_secret: body.client_secret,
        })
    }
}

/// In-process stand-in used when no provider key is configured and by the
/// test suite. Mirrors the provider's invalid-amount rejection.
pub struct StubGateway;

impl StubGateway {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StubGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_intent(
        &self,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        if amount_minor <= 0 {
            return Err(GatewayError::Rejected(format!(
                "amount must be positive, got {amount_minor}"
            )));
        }
        let id = format!("pi_stub_{amount_minor}_{currency}");
        Ok(PaymentIntent {
            client_secret: format!("{id}_secret"),
            id,
        })
    }
}
