//! Ports & Adapters のポート定義
//!
//! - inbound: なし（ライブラリのためアプリの入り口を持たない）
//! - outbound: 解決・探索ロジックが外界に依頼するための trait

pub mod outbound;
