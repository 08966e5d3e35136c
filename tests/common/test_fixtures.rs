//! Test fixtures for creating test data
//!
//! A `Fixture` owns a temporary directory holding both the config directory and
//! any fake git working trees the test creates.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use quickstand::application::services::{RepositoryService, StandupService};
use quickstand::infrastructure::{GitPathValidator, JsonConfigStore};

/// Executable name guaranteed not to exist, so git probes fail fast
pub const MISSING_GIT: &str = "quickstand-test-missing-git";

pub struct Fixture {
    pub temp_dir: TempDir,
    pub store: Arc<JsonConfigStore>,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = Arc::new(JsonConfigStore::new(temp_dir.path().join("config")));
        Self { temp_dir, store }
    }

    pub fn config_dir(&self) -> &Path {
        self.store.config_dir()
    }

    pub fn config_path(&self) -> PathBuf {
        self.store.config_path()
    }

    pub fn standups(&self) -> StandupService {
        StandupService::new(self.store.clone())
    }

    /// Repository service that never shells out to git
    pub fn repositories(&self) -> RepositoryService {
        RepositoryService::new(
            self.store.clone(),
            Arc::new(GitPathValidator::with_executable(MISSING_GIT)),
        )
    }

    /// Create a directory that looks like a git working tree
    pub fn git_repo(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join("src").join(name);
        std::fs::create_dir_all(path.join(".git")).expect("Failed to create .git");
        std::fs::write(path.join("README.md"), format!("# {}\n", name))
            .expect("Failed to write README");
        path
    }

    /// Create a directory that is not a git working tree
    pub fn plain_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join("plain").join(name);
        std::fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(self.config_dir()).expect("Failed to create config dir");
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    pub fn read_config(&self) -> String {
        std::fs::read_to_string(self.config_path()).expect("Failed to read config")
    }
}
