//! Academic structure maintenance.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use unidesk_core::{AppError, AppResult};
use unidesk_database::repositories::{
    AcademicSessionRepository, DepartmentRepository, FacultyRepository, SemesterRepository,
    SubjectRepository,
};
use unidesk_entity::academic::{AcademicSession, Department, Faculty, Semester, Subject};

use crate::context::RequestContext;
use crate::required;

const NAME_TAKEN: &str = "The name has already been taken.";

/// CRUD over the academic structure tables.
///
/// Text input is trimmed before it is checked or stored. Uniqueness is
/// checked up front for a friendly message; the unique indexes still
/// decide under concurrent writes.
#[derive(Debug, Clone)]
pub struct AcademicService {
    faculty_repo: Arc<FacultyRepository>,
    department_repo: Arc<DepartmentRepository>,
    semester_repo: Arc<SemesterRepository>,
    subject_repo: Arc<SubjectRepository>,
    session_repo: Arc<AcademicSessionRepository>,
}

impl AcademicService {
    /// Creates a new academic service.
    pub fn new(
        faculty_repo: Arc<FacultyRepository>,
        department_repo: Arc<DepartmentRepository>,
        semester_repo: Arc<SemesterRepository>,
        subject_repo: Arc<SubjectRepository>,
        session_repo: Arc<AcademicSessionRepository>,
    ) -> Self {
        Self {
            faculty_repo,
            department_repo,
            semester_repo,
            subject_repo,
            session_repo,
        }
    }

    // ── Faculties ──────────────────────────────────────────────────

    /// All faculties, newest first.
    pub async fn list_faculties(&self) -> AppResult<Vec<Faculty>> {
        self.faculty_repo.find_all().await
    }

    pub async fn create_faculty(&self, ctx: &RequestContext, name: &str) -> AppResult<Faculty> {
        let name = required(name, "name")?;
        if self.faculty_repo.name_taken(&name, None).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let faculty = self.faculty_repo.create(&name).await?;
        info!(user_id = ctx.user_id, faculty_id = faculty.id, "Faculty created");
        Ok(faculty)
    }

    pub async fn update_faculty(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
    ) -> AppResult<Faculty> {
        let name = required(name, "name")?;
        if self.faculty_repo.name_taken(&name, Some(id)).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let faculty = self
            .faculty_repo
            .update(id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("Faculty not found"))?;
        info!(user_id = ctx.user_id, faculty_id = id, "Faculty updated");
        Ok(faculty)
    }

    /// Delete a faculty. Faculties still referenced by departments stay and
    /// the call fails with a conflict.
    pub async fn delete_faculty(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.faculty_repo.delete(id).await? {
            return Err(AppError::not_found("Faculty not found"));
        }
        info!(user_id = ctx.user_id, faculty_id = id, "Faculty deleted");
        Ok(())
    }

    // ── Departments ────────────────────────────────────────────────

    /// All departments with their faculty name, newest first.
    pub async fn list_departments(&self) -> AppResult<Vec<Department>> {
        self.department_repo.find_all().await
    }

    pub async fn create_department(
        &self,
        ctx: &RequestContext,
        name: &str,
        faculty_id: i64,
    ) -> AppResult<Department> {
        let name = required(name, "name")?;
        self.ensure_faculty(faculty_id).await?;
        if self.department_repo.name_taken(&name, None).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let department = self.department_repo.create(&name, faculty_id).await?;
        info!(user_id = ctx.user_id, department_id = department.id, "Department created");
        Ok(department)
    }

    pub async fn update_department(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
        faculty_id: i64,
    ) -> AppResult<Department> {
        let name = required(name, "name")?;
        self.ensure_faculty(faculty_id).await?;
        if self.department_repo.name_taken(&name, Some(id)).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let department = self
            .department_repo
            .update(id, &name, faculty_id)
            .await?
            .ok_or_else(|| AppError::not_found("Department not found"))?;
        info!(user_id = ctx.user_id, department_id = id, "Department updated");
        Ok(department)
    }

    pub async fn delete_department(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.department_repo.delete(id).await? {
            return Err(AppError::not_found("Department not found"));
        }
        info!(user_id = ctx.user_id, department_id = id, "Department deleted");
        Ok(())
    }

    async fn ensure_faculty(&self, faculty_id: i64) -> AppResult<()> {
        match self.faculty_repo.find_by_id(faculty_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::validation("The selected faculty is invalid.")),
        }
    }

    // ── Semesters ──────────────────────────────────────────────────

    pub async fn list_semesters(&self) -> AppResult<Vec<Semester>> {
        self.semester_repo.find_all().await
    }

    pub async fn create_semester(&self, ctx: &RequestContext, name: &str) -> AppResult<Semester> {
        let name = required(name, "name")?;
        if self.semester_repo.name_taken(&name, None).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let semester = self.semester_repo.create(&name).await?;
        info!(user_id = ctx.user_id, semester_id = semester.id, "Semester created");
        Ok(semester)
    }

    pub async fn update_semester(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
    ) -> AppResult<Semester> {
        let name = required(name, "name")?;
        if self.semester_repo.name_taken(&name, Some(id)).await? {
            return Err(AppError::validation(NAME_TAKEN));
        }

        let semester = self
            .semester_repo
            .update(id, &name)
            .await?
            .ok_or_else(|| AppError::not_found("Semester not found"))?;
        info!(user_id = ctx.user_id, semester_id = id, "Semester updated");
        Ok(semester)
    }

    pub async fn delete_semester(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.semester_repo.delete(id).await? {
            return Err(AppError::not_found("Semester not found"));
        }
        info!(user_id = ctx.user_id, semester_id = id, "Semester deleted");
        Ok(())
    }

    // ── Subjects ───────────────────────────────────────────────────

    pub async fn list_subjects(&self) -> AppResult<Vec<Subject>> {
        self.subject_repo.find_all().await
    }

    /// Create a subject. The subject code is the unique key, names may repeat.
    pub async fn create_subject(
        &self,
        ctx: &RequestContext,
        name: &str,
        code: &str,
    ) -> AppResult<Subject> {
        let name = required(name, "name")?;
        let code = required(code, "code")?;
        if self.subject_repo.code_taken(&code, None).await? {
            return Err(AppError::validation("The code has already been taken."));
        }

        let subject = self.subject_repo.create(&name, &code).await?;
        info!(user_id = ctx.user_id, subject_id = subject.id, "Subject created");
        Ok(subject)
    }

    pub async fn update_subject(
        &self,
        ctx: &RequestContext,
        id: i64,
        name: &str,
        code: &str,
    ) -> AppResult<Subject> {
        let name = required(name, "name")?;
        let code = required(code, "code")?;
        if self.subject_repo.code_taken(&code, Some(id)).await? {
            return Err(AppError::validation("The code has already been taken."));
        }

        let subject = self
            .subject_repo
            .update(id, &name, &code)
            .await?
            .ok_or_else(|| AppError::not_found("Subject not found"))?;
        info!(user_id = ctx.user_id, subject_id = id, "Subject updated");
        Ok(subject)
    }

    pub async fn delete_subject(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.subject_repo.delete(id).await? {
            return Err(AppError::not_found("Subject not found"));
        }
        info!(user_id = ctx.user_id, subject_id = id, "Subject deleted");
        Ok(())
    }

    // ── Academic sessions ──────────────────────────────────────────

    pub async fn list_sessions(&self) -> AppResult<Vec<AcademicSession>> {
        self.session_repo.find_all().await
    }

    pub async fn create_session(
        &self,
        ctx: &RequestContext,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active_year: &str,
    ) -> AppResult<AcademicSession> {
        let active_year = required(active_year, "active year")?;
        check_date_order(start_date, end_date)?;
        if self.session_repo.year_taken(&active_year, None).await? {
            return Err(AppError::validation("The active year has already been taken."));
        }

        let session = self
            .session_repo
            .create(start_date, end_date, &active_year)
            .await?;
        info!(user_id = ctx.user_id, session_id = session.id, "Academic session created");
        Ok(session)
    }

    pub async fn update_session(
        &self,
        ctx: &RequestContext,
        id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        active_year: &str,
    ) -> AppResult<AcademicSession> {
        let active_year = required(active_year, "active year")?;
        check_date_order(start_date, end_date)?;
        if self.session_repo.year_taken(&active_year, Some(id)).await? {
            return Err(AppError::validation("The active year has already been taken."));
        }

        let session = self
            .session_repo
            .update(id, start_date, end_date, &active_year)
            .await?
            .ok_or_else(|| AppError::not_found("Academic session not found"))?;
        info!(user_id = ctx.user_id, session_id = id, "Academic session updated");
        Ok(session)
    }

    pub async fn delete_session(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.session_repo.delete(id).await? {
            return Err(AppError::not_found("Academic session not found"));
        }
        info!(user_id = ctx.user_id, session_id = id, "Academic session deleted");
        Ok(())
    }
}

fn check_date_order(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
    if end_date < start_date {
        return Err(AppError::validation(
            "The end date must be a date after or equal to start date.",
        ));
    }
    Ok(())
}
