/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system operations (the JSON configuration document)
/// - Git operations (working tree validation, remote name lookup)
pub mod filesystem;
pub mod git;

// Re-export commonly used types
pub use filesystem::config_store::{ConfigStore, JsonConfigStore};
pub use git::path_validator::{GitInspector, GitPathValidator};
