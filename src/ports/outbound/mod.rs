//! Outbound ポート: 解決・探索ロジックが外界（環境変数・FS）を使うための trait

pub mod env;
pub mod fs;

pub use env::EnvLookup;
pub use fs::FileSystem;
