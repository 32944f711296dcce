/**
 * Password Credentials
 *
 * One-way password hashing and verification using bcrypt.
 *
 * A stored hash is a self-describing bcrypt string (`$2b$<cost>$<salt+digest>`),
 * so there is no separate salt column: the hash is both the unit of storage
 * and the unit of comparison.
 *
 * # Security
 *
 * - Plaintext passwords are never logged or returned.
 * - Passwords longer than 72 bytes are rejected instead of being silently
 *   truncated by the bcrypt primitive.
 * - Both functions are CPU-expensive. Async callers must run them on a
 *   blocking thread (`tokio::task::spawn_blocking`) and must not hold any
 *   shared lock meanwhile.
 */

use bcrypt::BcryptError;
use thiserror::Error;

/// bcrypt work factor used for every new hash.
pub const HASH_COST: u32 = 10;

/// Errors produced while hashing or verifying a password
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The hashing primitive rejected the input
    #[error("password hashing failed")]
    HashingFailed(#[source] BcryptError),

    /// The password does not match the stored hash
    #[error("password does not match")]
    PasswordMismatch,

    /// The stored hash is not a recognizable bcrypt encoding
    #[error("stored password hash is malformed")]
    MalformedHash(#[source] BcryptError),
}

/// Hash a plaintext password
///
/// # Arguments
/// * `plaintext` - Password as supplied by the user
///
/// # Returns
/// Self-contained bcrypt hash string, or `HashingFailed` if the password is
/// longer than bcrypt can take without truncation
pub fn hash_password(plaintext: &str) -> Result<String, CredentialError> {
    bcrypt::non_truncating_hash(plaintext, HASH_COST).map_err(|e| {
        tracing::warn!("Password hashing rejected input: {}", e);
        CredentialError::HashingFailed(e)
    })
}

/// Verify a plaintext password against a stored hash
///
/// # Arguments
/// * `hash` - Stored bcrypt hash
/// * `plaintext` - Password to check
///
/// # Returns
/// `Ok(())` on a match, `PasswordMismatch` on a different password, or
/// `MalformedHash` when `hash` cannot be parsed
pub fn verify_password(hash: &str, plaintext: &str) -> Result<(), CredentialError> {
    match bcrypt::non_truncating_verify(plaintext, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CredentialError::PasswordMismatch),
        // Over-long input can never have been hashed by `hash_password`.
        Err(BcryptError::Truncation(_)) => Err(CredentialError::PasswordMismatch),
        Err(e) => Err(CredentialError::MalformedHash(e)),
    }
}
