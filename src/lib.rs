//! # quickstand - Standup Repository Tracker
//!
//! `quickstand` is a command-line tool for tracking named groups of git repositories
//! ("standups"). Standups and repositories live in a single JSON document under the
//! user's home directory (`~/.quickstand/config.json`).
//!
//! ## Features
//!
//! - **Standups**: Create, rename, remove and pick a default standup
//! - **Repositories**: Register git working trees, validated on the way in
//! - **Membership**: Attach repositories to any number of standups
//! - **Recovery**: A missing or corrupted config file is replaced with an empty one
//!
//! ## Quick Start
//!
//! ```bash
//! quickstand standup create Eng -d "Daily engineering sync"
//! quickstand repo add ~/src/api --standup <standup-id>
//! quickstand repo list --standup <standup-id>
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: The configuration document, standups and repositories
//! - [`application`]: Standup and repository registries
//! - [`infrastructure`]: JSON config store and git path validation
//! - [`presentation`]: CLI interface and console output
//! - [`common`]: Shared error handling
//!
//! Every registry operation loads the whole document, mutates it and writes it back.
//! Nothing is cached between calls and concurrent invocations are last-writer-wins.
//!
//! ## Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use quickstand::application::services::{AddRepositoryRequest, RepositoryService, StandupService};
//! use quickstand::infrastructure::{GitPathValidator, JsonConfigStore};
//!
//! # async fn example() -> quickstand::Result<()> {
//! let store = Arc::new(JsonConfigStore::default_location()?);
//! let standups = StandupService::new(store.clone());
//! let repositories = RepositoryService::new(store, Arc::new(GitPathValidator::new()));
//!
//! let eng = standups.create_standup("Eng", None).await?;
//! let repo = repositories
//!     .add_repository(AddRepositoryRequest::new("./api").with_standup(&eng.id))
//!     .await?;
//!
//! println!("Added {} to {}", repo.name, eng.name);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::QuickstandError;
pub use crate::common::result::QuickstandResult as Result;
