//! The signed-in user's own profile.

pub mod service;

pub use service::ProfileService;
