pub mod password;

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use password::hash_password;

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Seconds since the epoch; always a UTC midnight.
    pub exp: i64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Invalid token secret")]
    InvalidSecret,

    #[error("Username must not be empty")]
    EmptyUsername,

    #[error("Token generation error: {0}")]
    Generation(String),

    #[error("Token invalid: {0}")]
    Invalid(String),

    #[error("Token expired")]
    Expired,
}

/// Issues and validates HS256 tokens that expire at the next UTC midnight.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    pub fn issue(&self, username: &str) -> Result<String, TokenError> {
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        if username.is_empty() {
            return Err(TokenError::EmptyUsername);
        }

        let claims = Claims {
            username: username.to_string(),
            exp: next_midnight(now).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Generation(e.to_string()))
    }

    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Accepts the raw token or `Bearer <token>`. A token stays valid through
    /// its `exp` second and is expired strictly after it.
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let token = strip_bearer(token);

        // exp is checked against `now` below
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::Invalid(e.to_string()))?;

        if now.timestamp() > data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

pub fn strip_bearer(token: &str) -> &str {
    token.strip_prefix("Bearer ").unwrap_or(token).trim()
}

/// UTC midnight at the start of the day after `now`.
pub fn next_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    let tomorrow = now
        .date_naive()
        .succ_opt()
        .unwrap_or(chrono::NaiveDate::MAX);
    Utc.from_utc_datetime(&tomorrow.and_time(NaiveTime::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn service() -> TokenService {
        TokenService::new("test-secret").unwrap()
    }

    #[test]
    fn rejects_empty_secret() {
        assert_eq!(TokenService::new("").err(), Some(TokenError::InvalidSecret));
    }

    #[test]
    fn rejects_empty_username() {
        assert_eq!(service().issue("").err(), Some(TokenError::EmptyUsername));
    }

    #[test]
    fn expiry_is_next_utc_midnight() {
        assert_eq!(next_midnight(at("2024-01-01T23:00:00Z")), at("2024-01-02T00:00:00Z"));
        assert_eq!(next_midnight(at("2024-01-01T00:00:00Z")), at("2024-01-02T00:00:00Z"));
        assert_eq!(next_midnight(at("2024-02-28T00:01:00Z")), at("2024-02-29T00:00:00Z"));
        assert_eq!(next_midnight(at("2024-12-31T12:00:00Z")), at("2025-01-01T00:00:00Z"));
    }

    #[test]
    fn token_is_valid_until_midnight_and_expired_after() {
        let tokens = service();
        let token = tokens.issue_at("alice", at("2024-01-01T23:00:00Z")).unwrap();

        let claims = tokens.validate_at(&token, at("2024-01-01T23:59:59Z")).unwrap();
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp, at("2024-01-02T00:00:00Z").timestamp());

        assert!(tokens.validate_at(&token, at("2024-01-02T00:00:00Z")).is_ok());
        assert_eq!(
            tokens.validate_at(&token, at("2024-01-02T00:00:01Z")),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn accepts_bearer_prefix() {
        let tokens = service();
        let now = at("2024-05-10T08:00:00Z");
        let token = tokens.issue_at("kasir01", now).unwrap();

        let claims = tokens.validate_at(&format!("Bearer {}", token), now).unwrap();
        assert_eq!(claims.username, "kasir01");
    }

    #[test]
    fn tampered_tokens_are_invalid_not_expired() {
        let tokens = service();
        let now = at("2024-05-10T08:00:00Z");
        let token = tokens.issue_at("alice", now).unwrap();

        // Flip the first character of the signature segment
        let (signed, signature) = token.rsplit_once('.').unwrap();
        let first = signature.chars().next().unwrap();
        let flipped = if first == 'A' { 'B' } else { 'A' };
        let bad_signature = format!("{}.{}{}", signed, flipped, &signature[1..]);
        assert!(matches!(tokens.validate_at(&bad_signature, now), Err(TokenError::Invalid(_))));

        // Swap in a payload from another user
        let other = tokens.issue_at("mallory", now).unwrap();
        let parts: Vec<&str> = token.split('.').collect();
        let other_parts: Vec<&str> = other.split('.').collect();
        let spliced = format!("{}.{}.{}", parts[0], other_parts[1], parts[2]);
        assert!(matches!(tokens.validate_at(&spliced, now), Err(TokenError::Invalid(_))));

        // Even far past expiry, a bad signature reports invalid
        let later = at("2030-01-01T00:00:00Z");
        assert!(matches!(tokens.validate_at(&bad_signature, later), Err(TokenError::Invalid(_))));

        assert!(matches!(tokens.validate_at("not-a-token", now), Err(TokenError::Invalid(_))));
    }

    #[test]
    fn token_signed_with_other_secret_is_invalid() {
        let now = at("2024-05-10T08:00:00Z");
        let foreign = TokenService::new("other-secret").unwrap().issue_at("alice", now).unwrap();
        assert!(matches!(service().validate_at(&foreign, now), Err(TokenError::Invalid(_))));
    }
}
