use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde_json::Value;
use tracing::debug;

use crate::claims::Claims;
use crate::config::TokenConfig;
use crate::error::AuthResult;

/// Verifies presented bearer credentials against the shared secret.
///
/// Verification is pure: no network or storage access, only signature and
/// expiry checks followed by claim extraction.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: &TokenConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        }
    }

    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        let token_data = decode::<Value>(token, &self.key, &self.validation)?;
        let claims = Claims::try_from(token_data.claims)?;
        debug!(email = %claims.email, "verified bearer token");
        Ok(claims)
    }
}
