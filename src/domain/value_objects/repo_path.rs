use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::common::result::{QuickstandResult, ResultExt};

/// 登録済みリポジトリのパスを表す値オブジェクト
///
/// 常に絶対パスで、`.` と `..` は字句的に解決済み。シンボリックリンクは辿らない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepoPath(PathBuf);

impl RepoPath {
    /// カレントディレクトリを基準にパスを絶対化・正規化する
    pub fn resolve(path: impl AsRef<Path>) -> QuickstandResult<Self> {
        let path = path.as_ref();
        if path.is_absolute() {
            return Ok(Self(normalize(path)));
        }

        let cwd = std::env::current_dir()
            .with_io_error("Failed to resolve current directory", None)?;
        Ok(Self::resolve_from(&cwd, path))
    }

    /// 指定した基準ディレクトリから解決する
    pub fn resolve_from(base: &Path, path: impl AsRef<Path>) -> Self {
        Self(normalize(&base.join(path)))
    }

    /// 最後のパス要素（ディレクトリ名）
    pub fn basename(&self) -> Option<String> {
        self.0
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }
}

impl AsRef<Path> for RepoPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for RepoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// 字句的な正規化（`..` はルートを越えない）
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }

    normalized
}
