//! # unidesk-auth
//!
//! Credential handling for the UniDesk portal.
//!
//! - `jwt` issues and validates the HS256 bearer tokens handed out at login
//! - `password` hashes with Argon2id and still verifies legacy SHA-256 rows

pub mod jwt;
pub mod password;

pub use jwt::{Claims, IssuedToken, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
