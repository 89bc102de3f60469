//! Academic structure: faculties, departments, semesters, subjects and sessions.

pub mod department;
pub mod faculty;
pub mod semester;
pub mod session;
pub mod subject;

pub use department::Department;
pub use faculty::Faculty;
pub use semester::Semester;
pub use session::AcademicSession;
pub use subject::Subject;
