/**
 * JWT Token Codec
 *
 * This module issues and verifies the signed, stateless identity tokens
 * used for authentication.
 *
 * # Claims
 *
 * Tokens carry `{sub, role, iat, exp}`. The subject is the user id; the
 * expiry is issuance time plus a configurable max-age (30 days by default).
 *
 * # Failure Shape
 *
 * `verify` collapses every failure - empty input, malformed structure,
 * signature mismatch, undecodable payload, expired token - into the single
 * `TokenError::Invalid` value. Callers cannot distinguish why a token was
 * rejected, so the endpoint cannot be used as a structure/signature oracle.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

use crate::auth::identity::{Identity, Role};

/// Default token lifetime: 30 days
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    /// User ID
    pub sub: String,
    /// Privilege level
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

/// Token codec error
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token could not be verified. Constant-shape: carries no detail
    /// about which check failed.
    #[error("invalid token")]
    Invalid,

    /// Signing failed while issuing a token
    #[error("token issuance failed: {0}")]
    Issue(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies identity tokens.
///
/// Keys are derived once from the process-wide secret at startup; the codec
/// is immutable afterwards and shared read-only across requests.
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenCodec {
    /// Create a codec from the configured secret and token lifetime
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for an identity.
    ///
    /// Pure function of the identity, the secret, and the clock; no side
    /// effects and no server-side state.
    pub fn issue(&self, identity: &Identity) -> Result<String, TokenError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: identity.id.to_string(),
            role: identity.role,
            iat: now,
            exp: now + self.ttl_secs,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token and reconstruct the identity it asserts.
    ///
    /// # Errors
    ///
    /// `TokenError::Invalid` for every rejected token, whatever the cause.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        if token.trim().is_empty() {
            return Err(TokenError::Invalid);
        }

        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;

        let id = Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)?;

        Ok(Identity {
            id,
            role: data.claims.role,
        })
    }
}
