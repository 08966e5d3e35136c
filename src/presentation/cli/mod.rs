pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;

use crate::application::services::{RepositoryService, StandupService};
use crate::infrastructure::filesystem::config_store::{ConfigStore, JsonConfigStore};
use crate::infrastructure::git::path_validator::GitPathValidator;

use commands::{
    greeting::{format_name, greet},
    repository::{RepositoryCommand, RepositoryCommands},
    standup::{StandupCommand, StandupCommands},
};

/// Output format options for list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

/// quickstand - track groups of git repositories for standups
#[derive(Parser, Debug)]
#[command(name = "quickstand")]
#[command(about = "Track groups of git repositories for standups")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("GIT_HASH"), " ", env!("BUILD_DATE"), ")"
))]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Directory holding config.json (defaults to ~/.quickstand)
    #[arg(long, global = true, env = "QUICKSTAND_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Say hello
    Hello {
        /// Name to greet
        #[arg(default_value = "world")]
        name: String,
    },

    /// Format a name
    Format {
        /// Name to format
        name: String,
    },

    /// Manage standups
    #[command(subcommand)]
    Standup(StandupCommands),

    /// Manage repositories
    #[command(subcommand)]
    Repo(RepositoryCommands),
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn with_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn verbose(&self) -> bool {
        self.cli.verbose
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        match &self.cli.command {
            Commands::Hello { name } => {
                println!("{}", greet(name));
                Ok(())
            }
            Commands::Format { name } => {
                println!("{}", format_name(name));
                Ok(())
            }
            Commands::Standup(command) => {
                let store = self.config_store()?;
                StandupCommand::new(
                    StandupService::new(store.clone()),
                    Self::repository_service(store),
                )
                .execute(command)
                .await
            }
            Commands::Repo(command) => {
                let store = self.config_store()?;
                RepositoryCommand::new(Self::repository_service(store))
                    .execute(command)
                    .await
            }
        }
    }

    fn config_store(&self) -> anyhow::Result<Arc<dyn ConfigStore>> {
        let store = match &self.cli.config_dir {
            Some(dir) => JsonConfigStore::new(dir),
            None => JsonConfigStore::default_location()?,
        };
        tracing::debug!(path = %store.config_path().display(), "Using config file");
        Ok(Arc::new(store))
    }

    fn repository_service(store: Arc<dyn ConfigStore>) -> RepositoryService {
        RepositoryService::new(store, Arc::new(GitPathValidator::new()))
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
