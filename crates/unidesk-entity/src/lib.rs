//! # unidesk-entity
//!
//! Domain entity models for UniDesk. Every struct in this crate represents
//! a database row, a joined projection, or a domain value object. Row types
//! derive `sqlx::FromRow`; enums backed by PostgreSQL enum types derive
//! `sqlx::Type`.

pub mod academic;
pub mod issue;
pub mod notification;
pub mod registry;
pub mod roster;
pub mod user;
