/**
 * Token Issuance and Verification
 *
 * This module signs and verifies the stateless JWTs handed out at login.
 *
 * # Token Format
 *
 * Standard compact JWT, HS256, claims `{username, role, iat, exp}` with
 * second-granularity Unix timestamps. Tokens are valid for 12 hours.
 *
 * # Secret Handling
 *
 * The signing secret is passed in once when `TokenService` is constructed at
 * startup and is immutable afterwards. Changing it invalidates every token in
 * circulation, which is the only revocation mechanism: tokens carry no id
 * that could be put on a deny list.
 *
 * # Failure Reporting
 *
 * Malformed tokens, bad signatures and expired tokens all come back as the
 * same `TokenError::InvalidToken`. Callers cannot tell them apart, and
 * neither can clients.
 */

use std::fmt;
use std::time::Duration;

use jsonwebtoken::{decode, encode, get_current_timestamp, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::identity::Identity;

/// Fixed validity window of an issued token
pub const TOKEN_VALIDITY: Duration = Duration::from_secs(12 * 60 * 60);

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    pub username: String,
    /// Role of the token holder
    pub role: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// The identity these claims vouch for
    pub fn identity(&self) -> Identity {
        Identity::new(self.username.clone(), self.role.clone())
    }
}

/// Errors produced by the token service
#[derive(Debug, Error)]
pub enum TokenError {
    /// No usable signing secret was configured
    #[error("signing key unavailable")]
    SigningKeyUnavailable,

    /// The token could not be signed
    #[error("failed to sign token")]
    SigningFailed(#[source] jsonwebtoken::errors::Error),

    /// The token is malformed, has a bad signature, or has expired
    #[error("invalid token")]
    InvalidToken,
}

/// Signs and verifies authentication tokens with a shared HMAC secret
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl TokenService {
    /// Create a token service from the shared signing secret
    ///
    /// # Arguments
    /// * `secret` - HMAC secret; must be non-empty
    ///
    /// # Returns
    /// The service, or `SigningKeyUnavailable` if `secret` is empty
    pub fn new(secret: &str) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::SigningKeyUnavailable);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked exactly, without clock-skew tolerance.
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Issue a token for an authenticated identity
    ///
    /// # Arguments
    /// * `identity` - Username and role to embed
    ///
    /// # Returns
    /// Compact JWT string valid for [`TOKEN_VALIDITY`]
    pub fn issue_token(&self, identity: &Identity) -> Result<String, TokenError> {
        let now = get_current_timestamp();
        let claims = Claims {
            username: identity.username.clone(),
            role: identity.role.clone(),
            iat: now,
            exp: now + TOKEN_VALIDITY.as_secs(),
        };

        tracing::debug!("Issuing token for user: {}", identity.username);
        self.sign(&claims)
    }

    /// Verify a token and return its claims
    ///
    /// # Arguments
    /// * `token` - Compact JWT string, without any `Bearer ` prefix
    ///
    /// # Returns
    /// The decoded claims, or `InvalidToken` if the token is malformed, the
    /// signature does not match, or `exp` is not strictly in the future
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {:?}", e.kind());
            TokenError::InvalidToken
        })?;

        // A token whose `exp` equals the current second is already expired.
        if data.claims.exp <= get_current_timestamp() {
            tracing::debug!("Token rejected: expired");
            return Err(TokenError::InvalidToken);
        }

        Ok(data.claims)
    }

    pub(crate) fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(TokenError::SigningFailed)
    }
}
