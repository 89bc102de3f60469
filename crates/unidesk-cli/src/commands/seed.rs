//! Demo data for local development.

use clap::{Args, Subcommand};
use serde::Serialize;

use unidesk_auth::PasswordHasher;
use unidesk_core::error::AppError;
use unidesk_database::seed::{self, DEMO_FACULTY_USERNAME, DEMO_PASSWORD};

use crate::output::{self, OutputFormat};

/// Arguments for the seed command
#[derive(Debug, Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    pub command: SeedCommand,
}

#[derive(Debug, Subcommand)]
pub enum SeedCommand {
    /// Roles, a faculty account, three classes with leaders and issue templates
    Demo,
}

#[derive(Debug, Serialize)]
struct SeedReport {
    faculty_username: &'static str,
    faculty_user_id: i64,
    classes: usize,
    students: usize,
    leaders: usize,
    templates: usize,
}

/// Execute seed commands
pub async fn execute(
    args: &SeedArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        SeedCommand::Demo => {
            let hash = PasswordHasher::new().hash_password(DEMO_PASSWORD)?;
            let demo = seed::seed_demo(&pool, &hash).await?;

            let report = SeedReport {
                faculty_username: DEMO_FACULTY_USERNAME,
                faculty_user_id: demo.faculty_user_id,
                classes: demo.class_ids.len(),
                students: demo.student_ids.iter().map(Vec::len).sum(),
                leaders: demo.leader_ids.len(),
                templates: demo.template_count,
            };
            output::print_summary(
                &report,
                &[
                    ("Faculty login", format!("{DEMO_FACULTY_USERNAME} / {DEMO_PASSWORD}")),
                    ("Classes", report.classes.to_string()),
                    ("Students", report.students.to_string()),
                    ("Leaders", report.leaders.to_string()),
                    ("Issue templates", report.templates.to_string()),
                ],
                format,
            );
            if format == OutputFormat::Table {
                output::print_success("Demo data seeded");
            }
        }
    }

    Ok(())
}
