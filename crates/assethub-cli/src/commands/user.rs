//! User registry CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use assethub_core::result::AppResult;
use assethub_entity::user::{User, UserRole};

use super::Session;
use crate::output;

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
    /// Register a user
    Add {
        /// Login name
        username: String,
        /// Display name
        #[arg(long, default_value = "")]
        full_name: String,
        /// Role (admin or staff)
        #[arg(long, default_value = "staff")]
        role: UserRole,
    },
    /// List all users
    List,
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: i64,
    username: String,
    full_name: String,
    role: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.get(),
            username: u.username.clone(),
            full_name: u.full_name.clone(),
            role: u.role.to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, session: &Session) -> AppResult<()> {
    let users = &session.services.users;

    match &args.command {
        UserCommand::Add {
            username,
            full_name,
            role,
        } => {
            let user = users.register(username, full_name, *role).await?;
            output::print_success(&format!("User '{}' registered (id {})", user.username, user.id));
        }
        UserCommand::List => {
            let rows: Vec<UserRow> = users.list().await?.iter().map(UserRow::from).collect();
            output::print_list(&rows, session.format);
        }
    }

    Ok(())
}
