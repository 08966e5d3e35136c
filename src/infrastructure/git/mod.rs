pub mod path_validator;

// Re-export main types for convenience
pub use path_validator::{name_from_remote_url, GitInspector, GitPathValidator};
