//! Sign-in and identity resolution.

pub mod service;

pub use service::{AuthService, LoginResult};
