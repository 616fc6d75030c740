//! Lockbox CLI - Admin access management tools.
//!
//! # Usage
//!
//! ```bash
//! # Grant admin status to a user
//! lb-cli admin grant -u 4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7 -d lockbox.db
//!
//! # Check whether a user currently has admin status
//! lb-cli admin check -u 4e77b7c4-bef4-4c40-b72b-7fd4dd1aedf7 -d lockbox.db
//!
//! # List every admin record
//! lb-cli admin list -d lockbox.db
//! ```
//!
//! # Commands
//!
//! - `admin grant` - Insert an admin record for a user
//! - `admin check` - Report whether a user has an admin record
//! - `admin list` - List all admin records, newest first
//!
//! `admin grant` always exits 0: a refused grant is reported on stdout,
//! not through the exit code. `check` and `list` exit 1 when the database
//! cannot be read.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lockbox_cli::commands;
use lockbox_cli::config::DbConfig;
use lockbox_core::UserId;

#[derive(Parser)]
#[command(name = "lb-cli")]
#[command(version, about = "Lockbox CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage admin records
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Grant admin status to a user
    Grant {
        /// ID of the user to grant admin status to
        #[arg(short, long)]
        user_id: UserId,

        /// Path to the SQLite database (defaults to $LOCKBOX_DATABASE)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Check whether a user has admin status
    Check {
        /// ID of the user to look up
        #[arg(short, long)]
        user_id: UserId,

        /// Path to the SQLite database (defaults to $LOCKBOX_DATABASE)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// List all admin records, newest first
    List {
        /// Path to the SQLite database (defaults to $LOCKBOX_DATABASE)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Admin { action } => match action {
            AdminAction::Grant { user_id, database } => {
                let config = DbConfig::resolve(database)?;
                let outcome = commands::admin::grant(&config, user_id.clone()).await;
                commands::admin::report_grant(&config, &user_id, &outcome);
            }
            AdminAction::Check { user_id, database } => {
                let config = DbConfig::resolve(database)?;
                let record = commands::admin::check(&config, &user_id).await?;
                commands::admin::report_check(&user_id, record.as_ref());
            }
            AdminAction::List { database } => {
                let config = DbConfig::resolve(database)?;
                let records = commands::admin::list(&config).await?;
                commands::admin::report_list(&records);
            }
        },
    }
    Ok(())
}
