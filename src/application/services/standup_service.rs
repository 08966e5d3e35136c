use std::sync::Arc;

use crate::common::error::QuickstandError;
use crate::common::result::{OptionExt, QuickstandResult};
use crate::domain::entities::{
    config_document::ConfigDocument,
    standup::{Standup, StandupUpdate},
};
use crate::infrastructure::filesystem::config_store::ConfigStore;

/// スタンドアップの管理サービス
///
/// 各操作は設定ドキュメントを読み込み、変更し、保存する。
pub struct StandupService {
    store: Arc<dyn ConfigStore>,
}

impl StandupService {
    /// 新しいStandupServiceインスタンスを作成
    pub fn new(store: Arc<dyn ConfigStore>) -> Self {
        Self { store }
    }

    /// スタンドアップを作成する
    ///
    /// 最初のスタンドアップはデフォルトになる。
    pub async fn create_standup(
        &self,
        name: &str,
        description: Option<String>,
    ) -> QuickstandResult<Standup> {
        let mut config = self.store.load().await?;

        if config.find_standup_by_name(name, None).is_some() {
            return Err(QuickstandError::standup_exists(name));
        }

        let standup = Standup::new(name, description);
        config.standups.insert(standup.id.clone(), standup.clone());

        if config.standups.len() == 1 {
            config.default_standup_id = Some(standup.id.clone());
        }

        self.store.save(&config).await?;
        Ok(standup)
    }

    /// スタンドアップを取得する（IDが空ならデフォルト）
    pub async fn get_standup(&self, id: Option<&str>) -> QuickstandResult<Standup> {
        let config = self.store.load().await?;
        Self::lookup(&config, id)
    }

    /// スタンドアップを更新する
    ///
    /// 変更内容に関わらず`updated_at`は必ず進む。
    pub async fn update_standup(
        &self,
        id: &str,
        updates: StandupUpdate,
    ) -> QuickstandResult<Standup> {
        let mut config = self.store.load().await?;

        if !config.standups.contains_key(id) {
            return Err(QuickstandError::standup_not_found(id));
        }

        if let Some(name) = updates.name.as_deref() {
            if config.find_standup_by_name(name, Some(id)).is_some() {
                return Err(QuickstandError::standup_exists(name));
            }
        }

        let standup = config.standups.get_mut(id).ok_or_standup_not_found(id)?;
        if let Some(name) = updates.name {
            standup.name = name;
        }
        if let Some(description) = updates.description {
            standup.description = description;
        }
        standup.touch();
        let updated = standup.clone();

        self.store.save(&config).await?;
        Ok(updated)
    }

    /// スタンドアップを削除する
    ///
    /// 所属していたリポジトリ自体は削除しない。
    pub async fn remove_standup(&self, id: &str) -> QuickstandResult<()> {
        let mut config = self.store.load().await?;

        if config.standups.remove(id).is_none() {
            return Err(QuickstandError::standup_not_found(id));
        }

        if config.default_standup_id.as_deref() == Some(id) {
            config.default_standup_id = config.resolve_default_standup_id().map(str::to_string);
        }

        self.store.save(&config).await
    }

    /// 全スタンドアップを取得する（ID順）
    pub async fn list_standups(&self) -> QuickstandResult<Vec<Standup>> {
        let config = self.store.load().await?;
        Ok(config.standups.into_values().collect())
    }

    /// デフォルトのスタンドアップを設定する
    pub async fn set_default_standup(&self, id: &str) -> QuickstandResult<Standup> {
        let mut config = self.store.load().await?;

        let standup = config.standups.get(id).ok_or_standup_not_found(id)?.clone();
        config.default_standup_id = Some(id.to_string());

        self.store.save(&config).await?;
        Ok(standup)
    }

    /// デフォルトのスタンドアップを取得する
    pub async fn get_default_standup(&self) -> QuickstandResult<Standup> {
        let config = self.store.load().await?;
        Self::lookup(&config, None)
    }

    /// デフォルトとして解決されるスタンドアップのID
    pub async fn default_standup_id(&self) -> QuickstandResult<Option<String>> {
        let config = self.store.load().await?;
        Ok(config.resolve_default_standup_id().map(str::to_string))
    }

    /// スタンドアップにリポジトリを追加する（変更があった場合のみ保存）
    pub async fn add_repository_to_standup(
        &self,
        standup_id: &str,
        repository_id: &str,
    ) -> QuickstandResult<Standup> {
        let mut config = self.store.load().await?;
        Self::ensure_membership_targets(&config, standup_id, repository_id)?;

        let standup = config
            .standups
            .get_mut(standup_id)
            .ok_or_standup_not_found(standup_id)?;
        let changed = standup.add_repository(repository_id);
        let result = standup.clone();

        if changed {
            self.store.save(&config).await?;
        }
        Ok(result)
    }

    /// スタンドアップからリポジトリを外す（変更があった場合のみ保存）
    pub async fn remove_repository_from_standup(
        &self,
        standup_id: &str,
        repository_id: &str,
    ) -> QuickstandResult<Standup> {
        let mut config = self.store.load().await?;
        Self::ensure_membership_targets(&config, standup_id, repository_id)?;

        let standup = config
            .standups
            .get_mut(standup_id)
            .ok_or_standup_not_found(standup_id)?;
        let changed = standup.remove_repository(repository_id);
        let result = standup.clone();

        if changed {
            self.store.save(&config).await?;
        }
        Ok(result)
    }

    fn lookup(config: &ConfigDocument, id: Option<&str>) -> QuickstandResult<Standup> {
        let id = match id.filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => config
                .resolve_default_standup_id()
                .ok_or_else(QuickstandError::default_standup_not_found)?,
        };

        config.standups.get(id).cloned().ok_or_standup_not_found(id)
    }

    fn ensure_membership_targets(
        config: &ConfigDocument,
        standup_id: &str,
        repository_id: &str,
    ) -> QuickstandResult<()> {
        if !config.standups.contains_key(standup_id) {
            return Err(QuickstandError::standup_not_found(standup_id));
        }
        if !config.repositories.contains_key(repository_id) {
            return Err(QuickstandError::repository_not_found(repository_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::repository::Repository;
    use crate::domain::value_objects::repo_path::RepoPath;
    use crate::infrastructure::filesystem::config_store::{JsonConfigStore, MockConfigStore};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_service() -> (TempDir, Arc<JsonConfigStore>, StandupService) {
        let temp_dir = TempDir::new().unwrap();
        let store = Arc::new(JsonConfigStore::new(temp_dir.path().join(".quickstand")));
        let service = StandupService::new(store.clone());
        (temp_dir, store, service)
    }

    async fn insert_repository(store: &JsonConfigStore, path: &str) -> Repository {
        let mut config = store.load().await.unwrap();
        let repo = Repository::new(RepoPath::resolve(path).unwrap(), "repo");
        config.repositories.insert(repo.id.clone(), repo.clone());
        store.save(&config).await.unwrap();
        repo
    }

    #[tokio::test]
    async fn test_first_standup_becomes_default() {
        let (_temp_dir, _store, service) = create_test_service();

        let standup = service.create_standup("Eng", None).await.unwrap();

        assert!(!standup.id.is_empty());
        assert!(standup.repositories.is_empty());
        assert_eq!(service.get_default_standup().await.unwrap(), standup);

        service.create_standup("Ops", None).await.unwrap();
        assert_eq!(service.get_default_standup().await.unwrap().id, standup.id);
    }

    #[tokio::test]
    async fn test_create_standup_rejects_duplicate_name_ignoring_case() {
        let (_temp_dir, _store, service) = create_test_service();
        service.create_standup("Eng", None).await.unwrap();

        let result = service.create_standup("eNG", None).await;
        assert!(matches!(result, Err(QuickstandError::StandupExists { name }) if name == "eNG"));
        assert_eq!(service.list_standups().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_standup_by_id_and_default() {
        let (_temp_dir, _store, service) = create_test_service();

        let result = service.get_standup(None).await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { id }) if id == "default"));

        let eng = service
            .create_standup("Eng", Some("Daily".to_string()))
            .await
            .unwrap();
        let ops = service.create_standup("Ops", None).await.unwrap();

        assert_eq!(service.get_standup(Some(&ops.id)).await.unwrap(), ops);
        assert_eq!(service.get_standup(Some("")).await.unwrap(), eng);
        assert_eq!(service.get_standup(None).await.unwrap(), eng);

        let result = service.get_standup(Some("missing")).await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { id }) if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_standup() {
        let (_temp_dir, _store, service) = create_test_service();
        let eng = service
            .create_standup("Eng", Some("Daily".to_string()))
            .await
            .unwrap();

        let updated = service
            .update_standup(&eng.id, StandupUpdate::new().with_name("Engineering"))
            .await
            .unwrap();
        assert_eq!(updated.name, "Engineering");
        assert_eq!(updated.description.as_deref(), Some("Daily"));
        assert_eq!(updated.created_at, eng.created_at);
        assert!(updated.updated_at >= eng.updated_at);

        let cleared = service
            .update_standup(&eng.id, StandupUpdate::new().clear_description())
            .await
            .unwrap();
        assert_eq!(cleared.description, None);
        assert_eq!(service.get_standup(Some(&eng.id)).await.unwrap(), cleared);
    }

    #[tokio::test]
    async fn test_update_standup_name_conflicts() {
        let (_temp_dir, _store, service) = create_test_service();
        let eng = service.create_standup("Eng", None).await.unwrap();
        service.create_standup("Ops", None).await.unwrap();

        let result = service
            .update_standup(&eng.id, StandupUpdate::new().with_name("OPS"))
            .await;
        assert!(matches!(result, Err(QuickstandError::StandupExists { .. })));

        // renaming to its own name with different case is allowed
        let renamed = service
            .update_standup(&eng.id, StandupUpdate::new().with_name("ENG"))
            .await
            .unwrap();
        assert_eq!(renamed.name, "ENG");

        let result = service
            .update_standup("missing", StandupUpdate::new().with_name("X"))
            .await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_default_standup_reassigns_default() {
        let (_temp_dir, store, service) = create_test_service();
        let eng = service.create_standup("Eng", None).await.unwrap();
        let ops = service.create_standup("Ops", None).await.unwrap();
        assert_eq!(service.get_default_standup().await.unwrap().id, eng.id);

        service.remove_standup(&eng.id).await.unwrap();

        assert_eq!(service.get_default_standup().await.unwrap().id, ops.id);
        let config = store.load().await.unwrap();
        assert_eq!(config.default_standup_id.as_deref(), Some(ops.id.as_str()));

        service.remove_standup(&ops.id).await.unwrap();
        let result = service.get_default_standup().await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { id }) if id == "default"));
        assert_eq!(store.load().await.unwrap().default_standup_id, None);
    }

    #[tokio::test]
    async fn test_remove_standup_keeps_repositories() {
        let (_temp_dir, store, service) = create_test_service();
        let eng = service.create_standup("Eng", None).await.unwrap();
        let repo = insert_repository(&store, "/work/api").await;
        service
            .add_repository_to_standup(&eng.id, &repo.id)
            .await
            .unwrap();

        service.remove_standup(&eng.id).await.unwrap();

        let config = store.load().await.unwrap();
        assert!(config.standups.is_empty());
        assert!(config.repositories.contains_key(&repo.id));

        let result = service.remove_standup(&eng.id).await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { .. })));
    }

    #[tokio::test]
    async fn test_set_default_standup() {
        let (_temp_dir, _store, service) = create_test_service();
        service.create_standup("Eng", None).await.unwrap();
        let ops = service.create_standup("Ops", None).await.unwrap();

        let standup = service.set_default_standup(&ops.id).await.unwrap();
        assert_eq!(standup, ops);
        assert_eq!(service.get_default_standup().await.unwrap().id, ops.id);
        assert_eq!(service.default_standup_id().await.unwrap(), Some(ops.id));

        let result = service.set_default_standup("missing").await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { .. })));
    }

    #[tokio::test]
    async fn test_repository_membership() {
        let (_temp_dir, store, service) = create_test_service();
        let eng = service.create_standup("Eng", None).await.unwrap();
        let api = insert_repository(&store, "/work/api").await;

        let standup = service
            .add_repository_to_standup(&eng.id, &api.id)
            .await
            .unwrap();
        assert_eq!(standup.repositories, vec![api.id.clone()]);

        let again = service
            .add_repository_to_standup(&eng.id, &api.id)
            .await
            .unwrap();
        assert_eq!(again.repositories, vec![api.id.clone()]);
        assert_eq!(again.updated_at, standup.updated_at);

        let removed = service
            .remove_repository_from_standup(&eng.id, &api.id)
            .await
            .unwrap();
        assert!(removed.repositories.is_empty());
        assert!(removed.updated_at >= standup.updated_at);
    }

    #[tokio::test]
    async fn test_membership_existence_checks() {
        let (_temp_dir, store, service) = create_test_service();
        let eng = service.create_standup("Eng", None).await.unwrap();
        let api = insert_repository(&store, "/work/api").await;

        let result = service.add_repository_to_standup("missing", &api.id).await;
        assert!(matches!(result, Err(QuickstandError::StandupNotFound { .. })));

        let result = service.add_repository_to_standup(&eng.id, "missing").await;
        assert!(matches!(result, Err(QuickstandError::RepositoryNotFound { .. })));

        let result = service
            .remove_repository_from_standup(&eng.id, "missing")
            .await;
        assert!(matches!(result, Err(QuickstandError::RepositoryNotFound { .. })));
    }

    fn document_with_member() -> (ConfigDocument, String, String) {
        let mut config = ConfigDocument::new();
        let repo = Repository::new(RepoPath::resolve("/work/api").unwrap(), "api");
        let mut standup = Standup::new("Eng", None);
        standup.add_repository(&repo.id);
        let ids = (standup.id.clone(), repo.id.clone());
        config.repositories.insert(repo.id.clone(), repo);
        config.standups.insert(standup.id.clone(), standup);
        (config, ids.0, ids.1)
    }

    #[tokio::test]
    async fn test_add_existing_member_does_not_save() {
        let (config, standup_id, repository_id) = document_with_member();
        let mut store = MockConfigStore::new();
        store.expect_load().times(1).returning(move || Ok(config.clone()));
        store.expect_save().never();

        let service = StandupService::new(Arc::new(store));
        let standup = service
            .add_repository_to_standup(&standup_id, &repository_id)
            .await
            .unwrap();
        assert_eq!(standup.repositories, vec![repository_id]);
    }

    #[tokio::test]
    async fn test_remove_non_member_does_not_save() {
        let (mut config, standup_id, _) = document_with_member();
        let other = Repository::new(RepoPath::resolve("/work/web").unwrap(), "web");
        let other_id = other.id.clone();
        config.repositories.insert(other.id.clone(), other);

        let mut store = MockConfigStore::new();
        store.expect_load().times(1).returning(move || Ok(config.clone()));
        store.expect_save().never();

        let service = StandupService::new(Arc::new(store));
        service
            .remove_repository_from_standup(&standup_id, &other_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_save_failure_propagates() {
        let mut store = MockConfigStore::new();
        store
            .expect_load()
            .returning(|| Ok(ConfigDocument::new()));
        store.expect_save().times(1).returning(|_| {
            Err(QuickstandError::io_error(
                "Failed to save config",
                None,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            ))
        });

        let service = StandupService::new(Arc::new(store));
        let result = service.create_standup("Eng", None).await;
        assert!(matches!(result, Err(QuickstandError::IoError { .. })));
    }
}
