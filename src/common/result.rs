use crate::common::error::QuickstandError;
use std::path::PathBuf;

/// quickstand全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use quickstand::common::result::QuickstandResult;
/// use quickstand::common::error::QuickstandError;
///
/// fn example_function() -> QuickstandResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> QuickstandResult<()> {
///     Err(QuickstandError::standup_not_found("default"))
/// }
/// ```
pub type QuickstandResult<T> = Result<T, QuickstandError>;

/// Optionのエラー変換ヘルパー
///
/// ドキュメントのマップ検索結果をドメインエラーに変換する
pub trait OptionExt<T> {
    /// Noneの場合に`StandupNotFound`を返す
    ///
    /// # Examples
    ///
    /// ```
    /// use quickstand::common::result::{QuickstandResult, OptionExt};
    ///
    /// let none_value: Option<&str> = None;
    /// let result: QuickstandResult<&str> = none_value.ok_or_standup_not_found("abc");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_standup_not_found(self, id: &str) -> QuickstandResult<T>;

    /// Noneの場合に`RepositoryNotFound`を返す
    fn ok_or_repository_not_found(self, id: &str) -> QuickstandResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_standup_not_found(self, id: &str) -> QuickstandResult<T> {
        self.ok_or_else(|| QuickstandError::standup_not_found(id))
    }

    fn ok_or_repository_not_found(self, id: &str) -> QuickstandResult<T> {
        self.ok_or_else(|| QuickstandError::repository_not_found(id))
    }
}

/// Resultのエラー変換ヘルパー
pub trait ResultExt<T> {
    /// I/Oエラーをメッセージとパス付きの`IoError`に変換する
    ///
    /// # Examples
    ///
    /// ```
    /// use quickstand::common::result::{QuickstandResult, ResultExt};
    ///
    /// let result: Result<String, std::io::Error> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::NotFound, "file not found"
    /// ));
    /// let mapped: QuickstandResult<String> = result.with_io_error("Failed to load config", None);
    /// assert_eq!(mapped.unwrap_err().to_string(), "Failed to load config: file not found");
    /// ```
    fn with_io_error(self, message: impl Into<String>, path: Option<PathBuf>)
        -> QuickstandResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn with_io_error(
        self,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> QuickstandResult<T> {
        self.map_err(|e| QuickstandError::io_error(message, path, e))
    }
}
