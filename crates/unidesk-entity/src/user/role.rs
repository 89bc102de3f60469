//! Portal roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Roles known to the portal.
///
/// Role names live in the `roles` table, so anything unrecognised maps to
/// [`UserRole::Unknown`] instead of failing; unknown roles pass no guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Unrestricted administrator.
    SuperAdmin,
    /// Administrator.
    Admin,
    /// Faculty staff handling classes and classroom issues.
    Faculty,
    /// Teaching staff.
    Teacher,
    /// Head of the examinations office.
    HeadOfExam,
    /// Enrolled student.
    Student,
    /// A role name the portal does not recognise.
    Unknown,
}

impl UserRole {
    /// Map a stored role name to a role, ignoring case, spaces, `_` and `-`.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "superadmin" => Self::SuperAdmin,
            "admin" => Self::Admin,
            "faculty" => Self::Faculty,
            "teacher" => Self::Teacher,
            "headofexam" => Self::HeadOfExam,
            "student" => Self::Student,
            _ => Self::Unknown,
        }
    }

    /// Canonical role name as stored in the `roles` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "SuperAdmin",
            Self::Admin => "Admin",
            Self::Faculty => "Faculty",
            Self::Teacher => "Teacher",
            Self::HeadOfExam => "HeadOfExam",
            Self::Student => "Student",
            Self::Unknown => "Unknown",
        }
    }

    /// Admin or SuperAdmin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin | Self::Admin)
    }

    /// Roles allowed to maintain faculties, departments, semesters, subjects and sessions.
    pub fn can_manage_academics(&self) -> bool {
        self.is_admin() || matches!(self, Self::Faculty)
    }

    /// Roles allowed to work the classroom issue queue and class rosters.
    pub fn can_handle_issues(&self) -> bool {
        self.is_admin() || matches!(self, Self::Faculty)
    }

    /// Roles allowed to maintain schools and parents.
    pub fn can_manage_registry(&self) -> bool {
        self.is_admin()
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_is_lenient() {
        assert_eq!(UserRole::from_name("Faculty"), UserRole::Faculty);
        assert_eq!(UserRole::from_name("super_admin"), UserRole::SuperAdmin);
        assert_eq!(UserRole::from_name("Head Of Exam"), UserRole::HeadOfExam);
        assert_eq!(UserRole::from_name("ADMIN"), UserRole::Admin);
        assert_eq!(UserRole::from_name("janitor"), UserRole::Unknown);
    }

    #[test]
    fn test_guards() {
        assert!(UserRole::Faculty.can_handle_issues());
        assert!(UserRole::SuperAdmin.can_manage_registry());
        assert!(!UserRole::Faculty.can_manage_registry());
        assert!(!UserRole::Teacher.can_manage_academics());
        assert!(!UserRole::Student.can_handle_issues());
        assert!(!UserRole::Unknown.can_handle_issues());
    }
}
