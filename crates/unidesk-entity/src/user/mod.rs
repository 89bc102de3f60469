//! User accounts, roles and profile projections.

pub mod channel;
pub mod model;
pub mod profile;
pub mod role;
pub mod status;

pub use channel::AccessChannel;
pub use model::{LoginRecord, LoginUser, UserAccount};
pub use profile::{Profile, ProfileSource, TeacherDetails};
pub use role::UserRole;
pub use status::AccountStatus;
