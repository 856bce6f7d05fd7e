//! XDG Base Directory 探索ライブラリ
//!
//! 環境変数（XDG_DATA_HOME / XDG_DATA_DIRS / XDG_CONFIG_HOME / XDG_CONFIG_DIRS / HOME）
//! から優先順位どおりの候補ディレクトリ列 [`SearchPath`] を組み立て、その上で
//! 「最初に成功した候補を採用する」open / create 系の操作を提供する。
//!
//! 環境変数とファイルシステムへのアクセスは Outbound ポート
//! （[`EnvLookup`] / [`FileSystem`]）経由に限定し、テストではモックを注入する。

/// エラーハンドリング
pub mod error;

/// ドメイン型（ディレクトリ種別・探索パス・ハンドル）
pub mod domain;

/// Outbound ポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;

pub use adapter::{StdEnvLookup, StdFileSystem};
pub use domain::{CreatedFile, FoundFile, SearchPath, XdgDirectory};
pub use error::Error;
pub use ports::outbound::{EnvLookup, FileSystem};
