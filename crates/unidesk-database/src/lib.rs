//! # unidesk-database
//!
//! PostgreSQL connection management, embedded migrations and the concrete
//! repositories for every UniDesk table family.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
