//! ファイルシステム Outbound ポート
//!
//! SearchPath の各操作はこの trait 経由でのみファイル I/O を行う。
//! パスの結合・親パスの取り出しは std::path の責務で、ポートには含めない。

use std::io::{Read, Write};
use std::path::Path;

use crate::error::Error;

/// ファイルシステム抽象（Outbound ポート）
///
/// 実装は `adapter::StdFileSystem` やテスト用のモックなど。
/// 失敗は io::ErrorKind を保ったまま `Error::Io` で返すこと
/// （走査の継続判定と already exists の許容が kind に依存する）。
pub trait FileSystem: Send + Sync {
    /// 読み取り用に開く。返した Reader を drop すると閉じる。
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>, Error>;

    /// ディレクトリを 1 階層だけ作る（親ディレクトリは存在している前提）
    fn create_dir(&self, path: &Path, mode: u32) -> Result<(), Error>;

    /// 途中の階層も含めてディレクトリを作る（ディレクトリとして既存なら成功）
    fn create_dir_all(&self, path: &Path, mode: u32) -> Result<(), Error>;

    /// ファイルを作成して書き込み用に開く（既存なら切り詰める）。
    /// 返した Writer を drop すると閉じる。
    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error>;
}
