//! Command-line front end.
//!
//! Stands in for the presentation screens: the users directory as one-shot
//! commands, the profile wizard as an interactive session.

mod users;
mod wizard;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::io::BufReader;

use crate::config::Config;
use crate::persistence::FileStorage;
use crate::profiles::ProfileWizard;
use crate::remote::HttpUserSource;
use crate::store::Store;
use crate::users::UserForm;

pub use users::{UsersApp, UsersCommand};
pub use wizard::WizardSession;

#[derive(Debug, Parser)]
#[command(
    name = "slicestore",
    version,
    about = "Users directory and profile wizard over a predictable state store"
)]
pub struct Cli {
    /// Path to the config file (default: platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List users, loading from storage or the remote endpoint
    List,
    /// Show one user's details
    Show { id: i64 },
    /// Add a user
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        website: String,
    },
    /// Delete a user by id
    Delete { id: i64 },
    /// Run the interactive profile wizard
    Wizard,
}

impl Command {
    fn into_users_command(self) -> Option<UsersCommand> {
        match self {
            Self::List => Some(UsersCommand::List),
            Self::Show { id } => Some(UsersCommand::Show { id }),
            Self::Add {
                name,
                email,
                phone,
                website,
            } => Some(UsersCommand::Add(UserForm {
                name,
                email,
                phone,
                website,
            })),
            Self::Delete { id } => Some(UsersCommand::Delete { id }),
            Self::Wizard => None,
        }
    }
}

/// Load configuration and run the selected command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command.into_users_command() {
        Some(command) => {
            let dir = config.storage.resolved_dir();
            tracing::info!(dir = %dir.display(), "Using storage directory");
            let app = UsersApp::open(Arc::new(FileStorage::new(dir)), &config.storage.users_key);
            let source = HttpUserSource::new(config.remote.users_url.clone());
            let mut stdout = std::io::stdout().lock();
            app.execute(command, &source, &mut stdout).await
        }
        None => {
            let wizard = ProfileWizard::new(
                Store::default(),
                Duration::from_millis(config.wizard.submit_delay_ms),
            );
            let mut session =
                WizardSession::new(wizard, BufReader::new(tokio::io::stdin()), tokio::io::stdout());
            session.run().await?;
            Ok(())
        }
    }
}
