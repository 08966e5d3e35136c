use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::common::error::QuickstandError;
use crate::common::result::{OptionExt, QuickstandResult};
use crate::domain::entities::repository::{Repository, RepositoryUpdate};
use crate::domain::value_objects::repo_path::RepoPath;
use crate::infrastructure::filesystem::config_store::ConfigStore;
use crate::infrastructure::git::path_validator::GitInspector;

/// リポジトリ追加時の入力
#[derive(Debug, Clone, Default)]
pub struct AddRepositoryRequest {
    /// gitリポジトリへのパス（相対パス可）
    pub path: PathBuf,
    /// 表示名（省略時はリモートURLかディレクトリ名から決める）
    pub name: Option<String>,
    /// 追加先のスタンドアップID
    pub standup_id: Option<String>,
}

impl AddRepositoryRequest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_standup(mut self, standup_id: impl Into<String>) -> Self {
        self.standup_id = Some(standup_id.into());
        self
    }
}

/// リポジトリの管理サービス
pub struct RepositoryService {
    store: Arc<dyn ConfigStore>,
    git: Arc<dyn GitInspector>,
}

impl RepositoryService {
    /// 新しいRepositoryServiceインスタンスを作成
    pub fn new(store: Arc<dyn ConfigStore>, git: Arc<dyn GitInspector>) -> Self {
        Self { store, git }
    }

    /// リポジトリを登録する
    pub async fn add_repository(
        &self,
        request: AddRepositoryRequest,
    ) -> QuickstandResult<Repository> {
        let path = self.resolve_git_path(&request.path).await?;

        let mut config = self.store.load().await?;

        if config.find_repository_by_path(&path).is_some() {
            return Err(QuickstandError::repository_exists(path.to_path_buf()));
        }

        let name = match request.name.filter(|name| !name.is_empty()) {
            Some(name) => name,
            None => self.git.repository_name(path.as_path()).await,
        };

        let repository = Repository::new(path, name);
        config
            .repositories
            .insert(repository.id.clone(), repository.clone());

        if let Some(standup_id) = request.standup_id.as_deref().filter(|id| !id.is_empty()) {
            let standup = config
                .standups
                .get_mut(standup_id)
                .ok_or_standup_not_found(standup_id)?;
            standup.add_repository(&repository.id);
        }

        self.store.save(&config).await?;
        Ok(repository)
    }

    /// リポジトリを取得する
    pub async fn get_repository(&self, id: &str) -> QuickstandResult<Repository> {
        let config = self.store.load().await?;
        config
            .repositories
            .get(id)
            .cloned()
            .ok_or_repository_not_found(id)
    }

    /// リポジトリを更新する
    ///
    /// パスを変更した場合はgitリポジトリとして再検証するが、
    /// 他のリポジトリとのパス重複は確認しない。
    pub async fn update_repository(
        &self,
        id: &str,
        updates: RepositoryUpdate,
    ) -> QuickstandResult<Repository> {
        let mut config = self.store.load().await?;

        let repository = config
            .repositories
            .get_mut(id)
            .ok_or_repository_not_found(id)?;

        if let Some(name) = updates.name {
            repository.name = name;
        }
        if let Some(active) = updates.active {
            repository.active = active;
        }
        if let Some(path) = updates.path {
            repository.path = self.resolve_git_path(&path).await?;
        }
        let updated = repository.clone();

        self.store.save(&config).await?;
        Ok(updated)
    }

    /// リポジトリを削除し、全スタンドアップから参照を外す
    pub async fn remove_repository(&self, id: &str) -> QuickstandResult<()> {
        let mut config = self.store.load().await?;

        if !config.repositories.contains_key(id) {
            return Err(QuickstandError::repository_not_found(id));
        }

        config.detach_repository(id);
        config.repositories.remove(id);

        self.store.save(&config).await
    }

    /// リポジトリ一覧を取得する
    ///
    /// スタンドアップを指定した場合はその所属順。存在しないIDは無視する。
    pub async fn list_repositories(
        &self,
        standup_id: Option<&str>,
    ) -> QuickstandResult<Vec<Repository>> {
        let config = self.store.load().await?;

        match standup_id.filter(|id| !id.is_empty()) {
            Some(standup_id) => {
                let standup = config
                    .standups
                    .get(standup_id)
                    .ok_or_standup_not_found(standup_id)?;
                Ok(config.repositories_of(standup))
            }
            None => Ok(config.repositories.into_values().collect()),
        }
    }

    /// パスを絶対化し、gitリポジトリでなければ`InvalidRepository`
    async fn resolve_git_path(&self, path: &Path) -> QuickstandResult<RepoPath> {
        let resolved = RepoPath::resolve(path)?;
        if !self.git.is_git_repository(resolved.as_path()).await {
            return Err(QuickstandError::invalid_repository(resolved.to_path_buf()));
        }
        Ok(resolved)
    }
}
