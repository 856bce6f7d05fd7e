//! アダプター（Outbound ポートの標準実装）
//!
//! 利用側は標準実装（Std*）かテスト用のモックを注入する。

pub mod std_env;
pub mod std_fs;

pub use std_env::StdEnvLookup;
pub use std_fs::StdFileSystem;
