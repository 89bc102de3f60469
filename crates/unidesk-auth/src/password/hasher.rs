//! Argon2id password hashing with legacy SHA-256 verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use sha2::{Digest, Sha256};

use unidesk_core::error::AppError;

/// Prefix of every Argon2 PHC string.
const ARGON2_PREFIX: &str = "$argon2";

/// Hashes new passwords with Argon2id and verifies both Argon2 and legacy
/// unsalted SHA-256 hex digests.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password using Argon2id with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

        Ok(hash.to_string())
    }

    /// Verifies a plaintext password against a stored hash of either format.
    ///
    /// Returns `Ok(false)` on mismatch; errors only for unreadable Argon2 strings.
    pub fn verify_password(&self, password: &str, stored: &str) -> Result<bool, AppError> {
        if !stored.starts_with(ARGON2_PREFIX) {
            return Ok(Self::legacy_digest(password).eq_ignore_ascii_case(stored.trim()));
        }

        let parsed = PasswordHash::new(stored)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;
        if parsed.salt.is_none() || parsed.hash.is_none() {
            return Err(AppError::internal(
                "Invalid password hash format: missing salt or digest",
            ));
        }

        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Whether `stored` is a legacy digest that should be replaced on next login.
    pub fn is_legacy(&self, stored: &str) -> bool {
        !stored.starts_with(ARGON2_PREFIX)
    }

    fn legacy_digest(password: &str) -> String {
        format!("{:x}", Sha256::digest(password.as_bytes()))
    }
}
