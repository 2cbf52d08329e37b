use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Application-focused representation of verified token claims.
#[derive(Debug, Clone, Serialize)]
pub struct Claims {
    pub email: String,
    pub name: Option<String>,
    pub expires_at: DateTime<Utc>,
    pub issued_at: Option<DateTime<Utc>>,
    pub raw: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ClaimsRepr {
    email: String,
    #[serde(default)]
    name: Option<String>,
    exp: i64,
    #[serde(default)]
    iat: Option<i64>,
}

impl TryFrom<ClaimsRepr> for Claims {
    type Error = AuthError;

    fn try_from(value: ClaimsRepr) -> AuthResult<Self> {
        let email = value.email.trim().to_owned();
        if email.is_empty() {
            return Err(AuthError::InvalidClaim("email", value.email));
        }

        let expires_at = Utc
            .timestamp_opt(value.exp, 0)
            .single()
            .ok_or_else(|| AuthError::InvalidClaim("exp", value.exp.to_string()))?;

        let issued_at = match value.iat {
            Some(iat) => Some(
                Utc.timestamp_opt(iat, 0)
                    .single()
                    .ok_or_else(|| AuthError::InvalidClaim("iat", iat.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            email,
            name: value.name,
            expires_at,
            issued_at,
            raw: serde_json::Value::Null,
        })
    }
}

impl TryFrom<serde_json::Value> for Claims {
    type Error = AuthError;

    fn try_from(value: serde_json::Value) -> AuthResult<Self> {
        let repr: ClaimsRepr = serde_json::from_value(value.clone())
            .map_err(|err| AuthError::InvalidJson(err.to_string()))?;
        let mut claims = Claims::try_from(repr)?;
        claims.raw = value;
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn claims_parse_from_payload() {
        let value = json!({
            "email": "student@example.com",
            "name": "Student",
            "exp": 1_900_000_000_i64,
            "iat": 1_899_996_400_i64
        });
        let claims = Claims::try_from(value).expect("claims");
        assert_eq!(claims.email, "student@example.com");
        assert_eq!(claims.name.as_deref(), Some("Student"));
        assert!(claims.issued_at.is_some());
        assert_eq!(claims.raw["email"], "student@example.com");
    }

    #[test]
    fn claims_reject_missing_email() {
        let value = json!({ "exp": 1_900_000_000_i64 });
        let err = Claims::try_from(value).expect_err("should fail");
        assert!(matches!(err, AuthError::InvalidJson(_)));
    }

    #[test]
    fn claims_reject_blank_email() {
        let value = json!({ "email": "   ", "exp": 1_900_000_000_i64 });
        let err = Claims::try_from(value).expect_err("should fail");
        assert!(matches!(err, AuthError::InvalidClaim("email", _)));
    }
}
