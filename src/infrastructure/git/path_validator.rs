use async_trait::async_trait;
use regex::Regex;
use std::path::Path;
use std::process::Stdio;
use std::sync::OnceLock;
use tokio::process::Command;
use tracing::debug;

/// Read-only questions the repository registry asks about a working tree.
///
/// Both operations degrade instead of failing.
#[async_trait]
pub trait GitInspector: Send + Sync {
    /// Whether the path is a usable git working tree
    async fn is_git_repository(&self, path: &Path) -> bool;

    /// Best-effort display name for the repository at `path`
    async fn repository_name(&self, path: &Path) -> String;
}

/// Validates paths by looking for `.git` and asking the `git` executable
pub struct GitPathValidator {
    git_executable: String,
}

impl Default for GitPathValidator {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitPathValidator {
    /// Create a validator using `git` from `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// Run `git -C <path> <args>`; `None` on spawn failure or non-zero exit
    async fn git_output(&self, path: &Path, args: &[&str]) -> Option<String> {
        let output = Command::new(&self.git_executable)
            .arg("-C")
            .arg(path)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(output) => {
                debug!(
                    path = %path.display(),
                    args = ?args,
                    code = ?output.status.code(),
                    "git exited unsuccessfully"
                );
                None
            }
            Err(e) => {
                debug!(executable = %self.git_executable, error = %e, "Failed to run git");
                None
            }
        }
    }

    async fn is_inside_work_tree(&self, path: &Path) -> bool {
        self.git_output(path, &["rev-parse", "--is-inside-work-tree"])
            .await
            .is_some()
    }
}

#[async_trait]
impl GitInspector for GitPathValidator {
    async fn is_git_repository(&self, path: &Path) -> bool {
        match tokio::fs::metadata(path).await {
            Ok(metadata) if metadata.is_dir() => {}
            _ => return false,
        }

        match tokio::fs::metadata(path.join(".git")).await {
            Ok(metadata) if metadata.is_dir() => true,
            // worktrees and submodules have a `.git` file or none at all
            _ => self.is_inside_work_tree(path).await,
        }
    }

    async fn repository_name(&self, path: &Path) -> String {
        let from_remote = self
            .git_output(path, &["config", "--get", "remote.origin.url"])
            .await
            .and_then(|url| name_from_remote_url(&url));

        from_remote.unwrap_or_else(|| fallback_name(path))
    }
}

/// Extract the repository name from a remote URL
///
/// Takes the last `/`-separated segment, dropping a trailing `.git`.
pub fn name_from_remote_url(url: &str) -> Option<String> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        Regex::new(r"/([^/]+?)(\.git)?$").expect("remote url pattern is valid")
    });

    pattern
        .captures(url.trim())
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str().to_string())
}

fn fallback_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
