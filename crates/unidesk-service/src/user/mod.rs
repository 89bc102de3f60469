//! Administrative account management.

pub mod admin;

pub use admin::AdminUserService;
