use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::value_objects::repo_path::RepoPath;

/// リポジトリエンティティ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    /// 一意な識別子
    pub id: String,

    /// 作業ツリーの絶対パス
    pub path: RepoPath,

    /// 表示名
    pub name: String,

    /// 有効かどうか
    pub active: bool,
}

impl Repository {
    /// 新しいRepositoryインスタンスを作成（IDは自動生成、有効状態）
    pub fn new(path: RepoPath, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            path,
            name: name.into(),
            active: true,
        }
    }

    /// 有効/無効を表すラベル
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "active"
        } else {
            "inactive"
        }
    }
}

/// Repositoryの部分更新
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryUpdate {
    pub name: Option<String>,
    pub active: Option<bool>,
    /// 未解決のパス（更新時に絶対化・検証される）
    pub path: Option<PathBuf>,
}

impl RepositoryUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }
}
