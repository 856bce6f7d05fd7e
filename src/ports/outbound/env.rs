//! 環境変数参照 Outbound ポート
//!
//! 解決ロジックはこの trait 経由でのみ環境変数を読む。
//! 実装は `adapter::StdEnvLookup` やテスト用の HashMap モックなど。

/// 環境変数参照抽象（Outbound ポート）
///
/// 未設定の変数は空文字列を返す（空文字列で設定された変数と区別しない）。
/// 参照のみで副作用を持たないこと。
pub trait EnvLookup: Send + Sync {
    /// 変数 `name` の値（未設定は ""）
    fn var(&self, name: &str) -> String;
}
