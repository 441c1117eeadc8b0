use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthConfig;

/// Token rejection reasons.
///
/// Signature and expiry failures intentionally share one client-facing
/// message so a caller probing the codec cannot tell which check failed;
/// the variants stay distinct for diagnostics.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Signature did not verify or the token is structurally invalid
    #[error("Invalid authentication token")]
    Signature,

    /// Signature verified but the token is past its expiry
    #[error("Invalid authentication token")]
    Expired,

    /// Subject claim absent or malformed
    #[error("Invalid token payload")]
    Payload,

    /// Signing primitive failed while issuing
    #[error("Token creation failed")]
    Creation,
}

/// Signed claims carried by a bearer token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject account identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
    /// Issued-at, seconds since epoch
    iat: i64,
    /// Absolute expiry, seconds since epoch
    exp: i64,
    /// Token id; makes every issued token unique even within one second
    #[serde(default)]
    jti: String,
}

/// Issues and parses signed, time-limited bearer tokens.
///
/// The signing key is derived once from [`AuthConfig`] at construction and
/// is read-only afterwards, so a single codec is safe to share across
/// concurrent requests. Tokens are stateless: nothing is persisted
/// server-side and a token stays valid for its full ttl regardless of later
/// account changes.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    /// Build a codec from the authentication configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::days(config.token_ttl_days),
        }
    }

    /// Issue a token for the given subject, expiring ttl from now
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as of an explicit clock reading
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: Some(subject.to_string()),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(|_| TokenError::Creation)
    }

    /// Parse a token and return its subject identifier
    pub fn parse(&self, token: &str) -> Result<String, TokenError> {
        self.parse_at(token, Utc::now())
    }

    /// Parse a token against an explicit clock reading.
    ///
    /// Three ordered checks: signature, then expiry, then subject claim.
    /// Expiry is compared here against the supplied clock rather than inside
    /// the JWT library so the clock stays injectable for tests.
    pub fn parse_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        validation.leeway = 0;

        let data =
            decode::<Claims>(token, &self.decoding, &validation).map_err(|_| TokenError::Signature)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        match data.claims.user_id {
            Some(subject) if !subject.is_empty() => Ok(subject),
            _ => Err(TokenError::Payload),
        }
    }

    /// Token ttl as configured
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[cfg(test)]
    fn issue_claims(&self, claims: &Claims) -> String {
        encode(&Header::default(), claims, &self.encoding).expect("encoding test claims")
    }
}
