//! Custom Axum extractors.

pub mod auth;
pub mod path;
pub mod validated;

pub use auth::AuthUser;
pub use path::IdPath;
pub use validated::ValidatedJson;
