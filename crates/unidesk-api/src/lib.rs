//! # unidesk-api
//!
//! HTTP API layer for UniDesk built on Axum.
//!
//! Provides the REST endpoints under `/api`, the bearer-token and validated
//! JSON extractors, role guards, CORS/logging middleware, DTOs and the
//! mapping from `AppError` to JSON error responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
