//! Account management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use unidesk_auth::PasswordHasher;
use unidesk_core::error::AppError;
use unidesk_database::repositories::UserRepository;
use unidesk_entity::user::{AccessChannel, UserAccount};
use unidesk_service::{AdminUserService, CreateUserRequest};

use crate::output::{self, OutputFormat};

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Create an account
    Create {
        #[arg(long)]
        username: String,
        /// At least 8 characters
        #[arg(long)]
        password: String,
        /// Role name, e.g. "Faculty" or "Super Admin"
        #[arg(long)]
        role: String,
        #[arg(long)]
        full_name: Option<String>,
        /// WEB, APP or BOTH
        #[arg(long, default_value = "WEB")]
        channel: String,
    },
    /// List all accounts
    List,
}

#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    full_name: String,
    role: String,
    status: String,
    channel: String,
    created_at: String,
}

impl From<&UserAccount> for UserRow {
    fn from(u: &UserAccount) -> Self {
        Self {
            id: u.id,
            username: u.username.clone(),
            full_name: u.full_name.clone().unwrap_or_default(),
            role: u.role_name.clone(),
            status: u.status.to_string(),
            channel: u.access_channel.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let pool = super::create_db_pool(&config).await?;
    let service = AdminUserService::new(
        Arc::new(UserRepository::new(pool)),
        Arc::new(PasswordHasher::new()),
    );

    match &args.command {
        UserCommand::Create {
            username,
            password,
            role,
            full_name,
            channel,
        } => {
            let access_channel: AccessChannel = channel.parse()?;
            let user = service
                .create_user(CreateUserRequest {
                    username: username.clone(),
                    password: password.clone(),
                    role_name: role.clone(),
                    full_name: full_name.clone(),
                    access_channel,
                })
                .await?;

            let row = UserRow::from(&user);
            output::print_list(std::slice::from_ref(&row), format);
            if format == OutputFormat::Table {
                output::print_success(&format!("User '{}' created", user.username));
            }
        }
        UserCommand::List => {
            let users = service.list_users().await?;
            let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
            output::print_list(&rows, format);
        }
    }

    Ok(())
}
