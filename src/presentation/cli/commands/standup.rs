use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use crate::application::services::{RepositoryService, StandupService};
use crate::domain::entities::repository::Repository;
use crate::domain::entities::standup::{Standup, StandupUpdate};
use crate::presentation::cli::commands::repository::render_repository_list;
use crate::presentation::cli::commands::render_structured;
use crate::presentation::cli::OutputFormat;

#[derive(Subcommand, Debug)]
pub enum StandupCommands {
    /// Create a new standup
    Create {
        /// Name of the standup
        name: String,

        /// Description of the standup
        #[arg(short, long)]
        description: Option<String>,
    },

    /// List all standups
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a standup and its repositories (defaults to the default standup)
    Show {
        /// ID of the standup
        id: Option<String>,
    },

    /// Update a standup's name or description
    Update {
        /// ID of the standup to update
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(short, long, conflicts_with = "clear_description")]
        description: Option<String>,

        /// Remove the description
        #[arg(long)]
        clear_description: bool,
    },

    /// Set the default standup
    SetDefault {
        /// ID of the standup to set as default
        id: String,
    },

    /// Remove a standup
    Remove {
        /// ID of the standup to remove
        id: String,
    },

    /// Add a registered repository to a standup
    AddRepo {
        /// ID of the standup
        standup_id: String,

        /// ID of the repository
        repository_id: String,
    },

    /// Remove a repository from a standup
    RemoveRepo {
        /// ID of the standup
        standup_id: String,

        /// ID of the repository
        repository_id: String,
    },
}

/// `quickstand standup ...`
pub struct StandupCommand {
    standups: StandupService,
    repositories: RepositoryService,
}

impl StandupCommand {
    pub fn new(standups: StandupService, repositories: RepositoryService) -> Self {
        Self {
            standups,
            repositories,
        }
    }

    /// Execute the standup subcommand
    pub async fn execute(&self, command: &StandupCommands) -> Result<()> {
        match command {
            StandupCommands::Create { name, description } => {
                let standup = self
                    .standups
                    .create_standup(name, description.clone())
                    .await?;
                println!("Standup created: {} ({})", standup.name.bold(), standup.id);
            }
            StandupCommands::List { output } => {
                let standups = self.standups.list_standups().await?;
                match output {
                    OutputFormat::Text => {
                        let default_id = self.standups.default_standup_id().await?;
                        print!("{}", render_standup_list(&standups, default_id.as_deref()));
                    }
                    format => print!("{}", render_structured(&standups, *format)?),
                }
            }
            StandupCommands::Show { id } => {
                let standup = self.standups.get_standup(id.as_deref()).await?;
                let repositories = self.repositories.list_repositories(Some(&standup.id)).await?;
                print!("{}", render_standup_details(&standup, &repositories));
            }
            StandupCommands::Update {
                id,
                name,
                description,
                clear_description,
            } => {
                let mut updates = StandupUpdate::new();
                if let Some(name) = name {
                    updates = updates.with_name(name);
                }
                if let Some(description) = description {
                    updates = updates.with_description(description);
                } else if *clear_description {
                    updates = updates.clear_description();
                }

                let standup = self.standups.update_standup(id, updates).await?;
                println!("Standup updated: {} ({})", standup.name.bold(), standup.id);
            }
            StandupCommands::SetDefault { id } => {
                let standup = self.standups.set_default_standup(id).await?;
                println!("Default standup set to: {}", standup.name.bold());
            }
            StandupCommands::Remove { id } => {
                self.standups.remove_standup(id).await?;
                println!("Standup removed: {}", id);
            }
            StandupCommands::AddRepo {
                standup_id,
                repository_id,
            } => {
                let standup = self
                    .standups
                    .add_repository_to_standup(standup_id, repository_id)
                    .await?;
                println!(
                    "Repository {} added to standup: {}",
                    repository_id,
                    standup.name.bold()
                );
            }
            StandupCommands::RemoveRepo {
                standup_id,
                repository_id,
            } => {
                let standup = self
                    .standups
                    .remove_repository_from_standup(standup_id, repository_id)
                    .await?;
                println!(
                    "Repository {} removed from standup: {}",
                    repository_id,
                    standup.name.bold()
                );
            }
        }
        Ok(())
    }
}

/// Text listing of standups, marking the default one
pub fn render_standup_list(standups: &[Standup], default_id: Option<&str>) -> String {
    if standups.is_empty() {
        return "No standups found.\n".to_string();
    }

    let mut out = String::from("Standups:\n");
    for standup in standups {
        let marker = if Some(standup.id.as_str()) == default_id {
            format!(" {}", "(default)".green())
        } else {
            String::new()
        };
        out.push_str(&format!("- {} ({}){}\n", standup.name, standup.id, marker));
        if let Some(description) = &standup.description {
            out.push_str(&format!("  {}\n", description));
        }
    }
    out
}

fn render_standup_details(standup: &Standup, repositories: &[Repository]) -> String {
    let mut out = format!("{} ({})\n", standup.name.bold(), standup.id);
    if let Some(description) = &standup.description {
        out.push_str(&format!("  {}\n", description));
    }
    out.push_str(&format!(
        "  Created: {}\n  Updated: {}\n",
        standup.created_at.to_rfc3339(),
        standup.updated_at.to_rfc3339()
    ));
    out.push_str(&render_repository_list(repositories));
    out
}
