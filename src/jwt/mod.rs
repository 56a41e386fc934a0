//! JWT token handling
//!
//! Tokens are compact, self-contained and tamper-evident: HS256 over the
//! full encoded payload with a process-wide secret. Verification fails
//! closed; the caller only learns valid/invalid, the reason is logged.

use crate::config::JwtConfig;
use crate::error::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Access token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user email)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// JWT token manager
#[derive(Clone)]
pub struct JwtManager {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Create a Validation with a strict leeway (5 seconds) instead of the
    /// default 60 seconds. This ensures tokens expire promptly while still
    /// tolerating minor clock skew.
    fn strict_validation() -> Validation {
        let mut v = Validation::new(Algorithm::HS256);
        v.leeway = 5;
        v
    }

    /// Issue an access token for a subject
    pub fn issue(&self, subject: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.config.access_token_ttl_secs);

        let claims = AccessClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };
        let header = Header::new(Algorithm::HS256);
        encode(&header, &claims, &self.encoding_key).map_err(|e| AppError::Internal(e.into()))
    }

    /// Verify a token and return its claims.
    ///
    /// Tampered, expired and malformed tokens are all reported to the caller
    /// as `Unauthenticated`; the distinction only shows up in logs.
    pub fn verify(&self, token: &str) -> Result<AccessClaims> {
        decode::<AccessClaims>(token, &self.decoding_key, &Self::strict_validation())
            .map(|data| data.claims)
            .map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        tracing::debug!("token rejected: expired");
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        tracing::warn!("token rejected: signature mismatch");
                    }
                    _ => {
                        tracing::debug!("token rejected: malformed");
                    }
                }
                AppError::Unauthenticated("Invalid or expired token".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_manager() -> JwtManager {
        JwtManager::new(JwtConfig {
            secret: "test-secret-key-for-jwt-signing-must-be-long".to_string(),
            access_token_ttl_secs: 3600,
        })
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let manager = test_manager();
        let token = manager.issue("a@x.com").unwrap();
        let claims = manager.verify(&token).unwrap();
        assert_eq!(claims.sub, "a@x.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let manager = test_manager();
        let token = manager.issue("a@x.com").unwrap();

        // Flip a byte in the payload segment; the signature no longer covers it
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let mut payload: Vec<u8> = parts[1].clone().into_bytes();
        payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
        parts[1] = String::from_utf8(payload).unwrap();
        let tampered = parts.join(".");

        assert!(manager.verify(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_is_rejected_despite_valid_signature() {
        let manager = test_manager();
        let now = Utc::now();
        let claims = AccessClaims {
            sub: "a@x.com".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &manager.encoding_key,
        )
        .unwrap();

        assert!(manager.verify(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let manager = test_manager();
        let other = JwtManager::new(JwtConfig {
            secret: "a-completely-different-secret-key".to_string(),
            access_token_ttl_secs: 3600,
        });
        let token = other.issue("a@x.com").unwrap();
        assert!(manager.verify(&token).is_err());
    }

    #[test]
    fn test_malformed_tokens_do_not_panic() {
        let manager = test_manager();
        for garbage in ["", "abc", "a.b", "a.b.c.d", "not a token at all"] {
            assert!(manager.verify(garbage).is_err());
        }
    }
}
