//! Role guards used at the top of handlers.

use unidesk_core::error::AppError;

use crate::extractors::AuthUser;

/// Faculty staff and administrators: the issue queue and class rosters.
pub fn require_issue_staff(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role.can_handle_issues() {
        Ok(())
    } else {
        Err(AppError::forbidden("Faculty or Admin access required"))
    }
}

/// Faculty staff and administrators: the academic structure.
pub fn require_academic_staff(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role.can_manage_academics() {
        Ok(())
    } else {
        Err(AppError::forbidden("Faculty or Admin access required"))
    }
}

/// Administrators only: schools and parents.
pub fn require_registry_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role.can_manage_registry() {
        Ok(())
    } else {
        Err(AppError::forbidden("Admin access required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unidesk_service::RequestContext;

    fn user(role: &str) -> AuthUser {
        AuthUser(RequestContext::new(1, "u", role))
    }

    #[test]
    fn test_issue_staff() {
        assert!(require_issue_staff(&user("Faculty")).is_ok());
        assert!(require_issue_staff(&user("SuperAdmin")).is_ok());
        assert!(require_issue_staff(&user("Student")).is_err());
        assert!(require_issue_staff(&user("Teacher")).is_err());
    }

    #[test]
    fn test_registry_admin() {
        assert!(require_registry_admin(&user("Admin")).is_ok());
        assert!(require_registry_admin(&user("Faculty")).is_err());
        assert!(require_registry_admin(&user("Mystery")).is_err());
    }

    #[test]
    fn test_academic_staff() {
        assert!(require_academic_staff(&user("faculty")).is_ok());
        assert!(require_academic_staff(&user("HeadOfExam")).is_err());
    }
}
