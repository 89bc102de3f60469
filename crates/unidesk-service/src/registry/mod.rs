//! Student registry: schools and parents.

pub mod service;

pub use service::RegistryService;
