use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// タイムスタンプはミリ秒精度で保存する
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// ISO-8601（ミリ秒、`Z`付き）形式のタイムスタンプ
mod iso_millis {
    use super::*;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// スタンドアップエンティティ
///
/// 一緒に追跡するリポジトリのグループ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standup {
    /// 一意な識別子（作成後は不変）
    pub id: String,

    /// 表示名（大文字小文字を区別せず一意）
    pub name: String,

    /// 説明
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 所属リポジトリのIDリスト（順序を保持）
    #[serde(default)]
    pub repositories: Vec<String>,

    /// 作成日時
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,

    /// 最終更新日時
    #[serde(with = "iso_millis")]
    pub updated_at: DateTime<Utc>,
}

impl Standup {
    /// 新しいStandupを作成（IDは自動生成）
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            description,
            repositories: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 名前が一致するか（大文字小文字を区別しない）
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn contains_repository(&self, repository_id: &str) -> bool {
        self.repositories.iter().any(|id| id == repository_id)
    }

    /// リポジトリを追加する。追加した場合のみ`updated_at`を進めて`true`を返す
    pub fn add_repository(&mut self, repository_id: &str) -> bool {
        if self.contains_repository(repository_id) {
            return false;
        }
        self.repositories.push(repository_id.to_string());
        self.touch();
        true
    }

    /// リポジトリを外す。外した場合のみ`updated_at`を進めて`true`を返す
    pub fn remove_repository(&mut self, repository_id: &str) -> bool {
        match self.repositories.iter().position(|id| id == repository_id) {
            Some(index) => {
                self.repositories.remove(index);
                self.touch();
                true
            }
            None => false,
        }
    }

    /// 更新日時を現在時刻にする
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}

/// Standupの部分更新
///
/// `description`は`Some(None)`で説明を消去する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandupUpdate {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl StandupUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none()
    }
}
