//! Student registry records: schools and parents.

pub mod parent;
pub mod school;

pub use parent::Parent;
pub use school::School;
