use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use std::path::PathBuf;

use crate::application::services::{AddRepositoryRequest, RepositoryService};
use crate::domain::entities::repository::{Repository, RepositoryUpdate};
use crate::presentation::cli::commands::render_structured;
use crate::presentation::cli::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum RepositoryCommands {
    /// Add a new repository
    Add {
        /// Path to the git repository
        path: PathBuf,

        /// Custom name for the repository
        #[arg(short, long)]
        name: Option<String>,

        /// ID of the standup to add the repository to
        #[arg(short, long)]
        standup: Option<String>,
    },

    /// List repositories
    List {
        /// Filter repositories by standup ID
        #[arg(short, long)]
        standup: Option<String>,

        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Update a repository
    Update {
        /// ID of the repository to update
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New path to the git repository
        #[arg(long)]
        path: Option<PathBuf>,

        /// Mark the repository active or inactive
        #[arg(long)]
        active: Option<bool>,
    },

    /// Remove a repository
    Remove {
        /// ID of the repository to remove
        id: String,
    },
}

/// `quickstand repo ...`
pub struct RepositoryCommand {
    repositories: RepositoryService,
}

impl RepositoryCommand {
    pub fn new(repositories: RepositoryService) -> Self {
        Self { repositories }
    }

    /// Execute the repository subcommand
    pub async fn execute(&self, command: &RepositoryCommands) -> Result<()> {
        match command {
            RepositoryCommands::Add {
                path,
                name,
                standup,
            } => {
                let request = AddRepositoryRequest {
                    path: path.clone(),
                    name: name.clone(),
                    standup_id: standup.clone(),
                };
                let repository = self.repositories.add_repository(request).await?;
                println!(
                    "Repository added: {} ({})",
                    repository.name.bold(),
                    repository.id
                );
            }
            RepositoryCommands::List { standup, output } => {
                let repositories = self
                    .repositories
                    .list_repositories(standup.as_deref())
                    .await?;
                match output {
                    OutputFormat::Text => print!("{}", render_repository_list(&repositories)),
                    format => print!("{}", render_structured(&repositories, *format)?),
                }
            }
            RepositoryCommands::Update {
                id,
                name,
                path,
                active,
            } => {
                let updates = RepositoryUpdate {
                    name: name.clone(),
                    active: *active,
                    path: path.clone(),
                };
                let repository = self.repositories.update_repository(id, updates).await?;
                println!(
                    "Repository updated: {} ({})",
                    repository.name.bold(),
                    repository.id
                );
            }
            RepositoryCommands::Remove { id } => {
                self.repositories.remove_repository(id).await?;
                println!("Repository removed: {}", id);
            }
        }
        Ok(())
    }
}

/// Text listing of repositories with their status and path
pub fn render_repository_list(repositories: &[Repository]) -> String {
    if repositories.is_empty() {
        return "No repositories found.\n".to_string();
    }

    let mut out = String::from("Repositories:\n");
    for repo in repositories {
        let status = if repo.active {
            repo.status_label().green()
        } else {
            repo.status_label().yellow()
        };
        out.push_str(&format!("- {} ({}) [{}]\n", repo.name, repo.id, status));
        out.push_str(&format!("  Path: {}\n", repo.path));
    }
    out
}
