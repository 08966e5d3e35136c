pub mod repo_path;

pub use repo_path::RepoPath;
