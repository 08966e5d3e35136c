use async_trait::async_trait;
use serde_json::error::Category;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::common::error::QuickstandError;
use crate::common::result::{QuickstandResult, ResultExt};
use crate::domain::entities::config_document::ConfigDocument;

/// Persistence seam for the configuration document.
///
/// Every registry operation loads the whole document, mutates it in memory and
/// saves it back. Implementations must not cache between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the document, recovering from a missing or corrupted file
    async fn load(&self) -> QuickstandResult<ConfigDocument>;

    /// Replace the stored document
    async fn save(&self, document: &ConfigDocument) -> QuickstandResult<()>;
}

/// JSON file backed configuration store
#[derive(Debug, Clone)]
pub struct JsonConfigStore {
    /// Directory holding the configuration file
    config_dir: PathBuf,
}

impl JsonConfigStore {
    /// Directory name under the user's home directory
    pub const DEFAULT_DIR_NAME: &'static str = ".quickstand";

    /// Configuration file name inside the config directory
    pub const FILE_NAME: &'static str = "config.json";

    /// Create a store rooted at the given directory
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Create a store at `~/.quickstand`
    pub fn default_location() -> QuickstandResult<Self> {
        let home = home::home_dir()
            .ok_or_else(|| QuickstandError::config_error("Could not determine home directory"))?;
        Ok(Self::new(home.join(Self::DEFAULT_DIR_NAME)))
    }

    /// Directory holding the configuration file
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Full path of the configuration file
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(Self::FILE_NAME)
    }

    async fn ensure_config_dir(&self) -> QuickstandResult<()> {
        tokio::fs::create_dir_all(&self.config_dir)
            .await
            .with_io_error(
                "Failed to create config directory",
                Some(self.config_dir.clone()),
            )
    }

    /// Serialize and atomically replace the configuration file
    async fn write_document(&self, document: &ConfigDocument) -> QuickstandResult<()> {
        let contents = serde_json::to_string_pretty(document).map_err(|e| {
            QuickstandError::serialization_error_with_source("Failed to serialize config", e)
        })?;

        let dir = self.config_dir.clone();
        let path = self.config_path();
        let target = path.clone();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(contents.as_bytes())?;
            tmp.persist(&target).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
        .and_then(|result| result)
        .with_io_error("Failed to save config", Some(path))
    }

    /// Write a fresh empty document and return it
    async fn reset(&self) -> QuickstandResult<ConfigDocument> {
        let document = ConfigDocument::new();
        self.write_document(&document).await?;
        Ok(document)
    }
}

#[async_trait]
impl ConfigStore for JsonConfigStore {
    async fn load(&self) -> QuickstandResult<ConfigDocument> {
        self.ensure_config_dir().await?;
        let path = self.config_path();

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Config file not found, creating a new one");
                return self.reset().await;
            }
            Err(e) => {
                return Err(QuickstandError::io_error(
                    "Failed to load config",
                    Some(path),
                    e,
                ))
            }
        };

        match serde_json::from_slice::<ConfigDocument>(&bytes) {
            Ok(document) => {
                debug!(
                    path = %path.display(),
                    standups = document.standups.len(),
                    repositories = document.repositories.len(),
                    "Loaded config"
                );
                Ok(document)
            }
            // valid JSON of the wrong shape is left alone for the user to fix
            Err(e) if e.classify() == Category::Data => Err(
                QuickstandError::serialization_error_with_source("Failed to load config", e),
            ),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Config file is corrupted, creating a new one");
                self.reset().await
            }
        }
    }

    async fn save(&self, document: &ConfigDocument) -> QuickstandResult<()> {
        self.ensure_config_dir().await?;
        self.write_document(document).await?;
        debug!(path = %self.config_path().display(), "Saved config");
        Ok(())
    }
}
