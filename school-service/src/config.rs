use anyhow::{Context, Result};
use std::env;

/// Environment-driven service configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Absent means the in-memory store (dev mode).
    pub database_url: Option<String>,
    pub token_secret: String,
    pub token_ttl_seconds: i64,
    /// Absent means the stub payment gateway (dev mode).
    pub payment_secret_key: Option<String>,
    pub allowed_origins: Vec<String>,
}

pub fn load_config() -> Result<ServiceConfig> {
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")?;

    let database_url = env::var("DATABASE_URL")
        .ok()
        .and_then(|value| normalize_optional(&value));

    let token_secret = env::var("ACCESS_TOKEN_SECRET").context("ACCESS_TOKEN_SECRET must be set")?;
    let token_ttl_seconds = match env::var("ACCESS_TOKEN_TTL_SECONDS") {
        Ok(value) => value
            .parse::<i64>()
            .context("ACCESS_TOKEN_TTL_SECONDS must be an integer number of seconds")?,
        Err(_) => 3600,
    };

    let payment_secret_key = env::var("PAYMENT_SECRET_KEY")
        .ok()
        .and_then(|value| normalize_optional(&value));

    let allowed_origins = env::var("ALLOWED_ORIGINS")
        .ok()
        .map(|value| parse_origins(&value))
        .unwrap_or_else(default_origins);

    Ok(ServiceConfig {
        host,
        port,
        database_url,
        token_secret,
        token_ttl_seconds,
        payment_secret_key,
        allowed_origins,
    })
}

fn default_origins() -> Vec<String> {
    ["http://localhost:3000", "http://localhost:5173"]
        .iter()
        .map(|origin| origin.to_string())
        .collect()
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .filter_map(|item| {
            let origin = item.trim();
            if origin.is_empty() {
                None
            } else {
                Some(origin.to_string())
            }
        })
        .collect()
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
