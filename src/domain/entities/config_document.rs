use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::entities::{repository::Repository, standup::Standup};
use crate::domain::value_objects::repo_path::RepoPath;

/// 永続化される設定ドキュメント
///
/// スタンドアップとリポジトリはIDをキーとしたマップで保持する。
/// `BTreeMap`なのでマップの自然順序はID昇順で、書き出しのキー順も安定する。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDocument {
    #[serde(default)]
    pub standups: BTreeMap<String, Standup>,

    #[serde(default)]
    pub repositories: BTreeMap<String, Repository>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_standup_id: Option<String>,
}

impl ConfigDocument {
    /// 空のドキュメント
    pub fn new() -> Self {
        Self::default()
    }

    /// デフォルトスタンドアップのIDを解決する
    ///
    /// 明示的なデフォルトが存在すればそれを、なければ最初のスタンドアップを返す。
    pub fn resolve_default_standup_id(&self) -> Option<&str> {
        if let Some(id) = self.default_standup_id.as_deref() {
            if self.standups.contains_key(id) {
                return Some(id);
            }
        }
        self.standups.keys().next().map(String::as_str)
    }

    /// 名前が一致する（大文字小文字を区別しない）スタンドアップを探す
    pub fn find_standup_by_name(&self, name: &str, excluding_id: Option<&str>) -> Option<&Standup> {
        self.standups
            .values()
            .filter(|standup| Some(standup.id.as_str()) != excluding_id)
            .find(|standup| standup.has_name(name))
    }

    /// 解決済みパスが一致するリポジトリを探す
    pub fn find_repository_by_path(&self, path: &RepoPath) -> Option<&Repository> {
        self.repositories
            .values()
            .find(|repo| RepoPath::resolve(repo.path.as_path()).ok().as_ref() == Some(path))
    }

    /// 全スタンドアップからリポジトリIDを取り除き、変更したスタンドアップ数を返す
    pub fn detach_repository(&mut self, repository_id: &str) -> usize {
        self.standups
            .values_mut()
            .map(|standup| standup.remove_repository(repository_id))
            .filter(|removed| *removed)
            .count()
    }

    /// スタンドアップの所属リポジトリを解決する（存在しないIDは捨てる）
    pub fn repositories_of(&self, standup: &Standup) -> Vec<Repository> {
        standup
            .repositories
            .iter()
            .filter_map(|id| self.repositories.get(id))
            .cloned()
            .collect()
    }
}
