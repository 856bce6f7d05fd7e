//! エラーハンドリング
//!
//! 解決・探索・作成の各操作はすべてこの [`Error`] を返す。io::Error は kind を
//! 保ったまま包み、呼び出し側（走査の継続判定・already exists の許容）が
//! 分類できるようにする。

use std::io;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// クレート共通のエラー型
#[derive(Debug, ThisError)]
pub enum Error {
    /// 探索パスのどの候補にも見つからなかった（候補リストが空の場合を含む）
    #[error("not found in search path: {name}")]
    NotFound { name: String },

    /// ファイルシステム操作の失敗（対象パス付き）
    #[error("{}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// 対象パスを添えて io::Error を包む
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    /// 「存在しない」系か（NotFound、または io::ErrorKind::NotFound）
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Io { source, .. } => source.kind() == io::ErrorKind::NotFound,
        }
    }

    /// 作成対象が既に存在していたか
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Error::Io { source, .. } if source.kind() == io::ErrorKind::AlreadyExists)
    }
}
