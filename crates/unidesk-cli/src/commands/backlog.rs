//! Class issue backlog maintenance.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;

use unidesk_core::error::AppError;
use unidesk_database::repositories::IssueRepository;
use unidesk_service::IssueService;

use crate::output::{self, OutputFormat};

/// Arguments for the backlog command
#[derive(Debug, Args)]
pub struct BacklogArgs {
    #[command(subcommand)]
    pub command: BacklogCommand,
}

#[derive(Debug, Subcommand)]
pub enum BacklogCommand {
    /// Top up every class leader to the configured minimum of open complaints
    Seed {
        /// Override `issues.min_backlog`
        #[arg(long)]
        min: Option<usize>,
    },
}

#[derive(Debug, Serialize)]
struct BacklogReport {
    min_backlog: usize,
    created: u64,
}

/// Execute backlog commands
pub async fn execute(
    args: &BacklogArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    match &args.command {
        BacklogCommand::Seed { min } => {
            if let Some(min) = min {
                config.issues.min_backlog = *min;
            }
            let pool = super::create_db_pool(&config).await?;
            let service = IssueService::new(
                Arc::new(IssueRepository::new(pool)),
                config.issues.clone(),
            );

            let report = BacklogReport {
                min_backlog: config.issues.min_backlog,
                created: service.ensure_backlog().await?,
            };
            output::print_summary(
                &report,
                &[
                    ("Minimum backlog", report.min_backlog.to_string()),
                    ("Complaints created", report.created.to_string()),
                ],
                format,
            );
        }
    }

    Ok(())
}
