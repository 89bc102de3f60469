//! Faculties, departments, semesters, subjects and academic sessions.

pub mod service;

pub use service::AcademicService;
