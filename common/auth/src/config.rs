/// Runtime configuration shared by the token signer and verifier.
#[derive(Clone)]
pub struct TokenConfig {
    /// Shared HMAC secret used to sign and verify credentials.
    pub secret: String,
    /// Validity window applied to newly issued credentials.
    pub ttl_seconds: i64,
    /// Allowable clock skew in seconds when validating exp.
    pub leeway_seconds: u64,
}

impl TokenConfig {
    /// Construct config with sensible defaults (1 hour validity, 30 second leeway).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ttl_seconds: 3600,
            leeway_seconds: 30,
        }
    }

    /// Adjust the validity window for issued credentials.
    pub fn with_ttl(mut self, seconds: i64) -> Self {
        self.ttl_seconds = seconds;
        self
    }

    /// Adjust the allowed leeway.
    pub fn with_leeway(mut self, seconds: u64) -> Self {
        self.leeway_seconds = seconds;
        self
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"<redacted>")
            .field("ttl_seconds", &self.ttl_seconds)
            .field("leeway_seconds", &self.leeway_seconds)
            .finish()
    }
}
