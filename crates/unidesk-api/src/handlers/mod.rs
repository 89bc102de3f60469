//! Route handlers organized by domain.

pub mod academic;
pub mod auth;
pub mod health;
pub mod issue;
pub mod notification;
pub mod profile;
pub mod registry;
pub mod roster;
