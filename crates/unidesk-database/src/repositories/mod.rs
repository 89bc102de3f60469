//! Concrete repository implementations, one per table family.

pub mod academic_session;
pub mod department;
pub mod faculty;
pub mod issue;
pub mod notification;
pub mod parent;
pub mod profile;
pub mod roster;
pub mod school;
pub mod semester;
pub mod subject;
pub mod user;

pub use academic_session::AcademicSessionRepository;
pub use department::DepartmentRepository;
pub use faculty::FacultyRepository;
pub use issue::IssueRepository;
pub use notification::NotificationRepository;
pub use parent::ParentRepository;
pub use profile::ProfileRepository;
pub use roster::RosterRepository;
pub use school::SchoolRepository;
pub use semester::SemesterRepository;
pub use subject::SubjectRepository;
pub use user::UserRepository;
