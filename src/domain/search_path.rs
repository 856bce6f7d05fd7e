//! 解決済み探索パスと、その上の first-success 操作
//!
//! [`SearchPath`] は優先順位どおりに並んだ候補ディレクトリの列。
//! open は列を先頭から走査して最初に開けたファイルを返し、
//! create 系は常に先頭候補だけを対象にする。

use std::fmt;
use std::io::{Read, Write};
use std::ops::Deref;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::ports::outbound::FileSystem;

/// create_file が親ディレクトリを掘るときのモード
const PARENT_DIR_MODE: u32 = 0o700;

/// 優先順位順の候補ディレクトリ列（[`XdgDirectory::resolve`] の結果）
///
/// [`XdgDirectory::resolve`]: crate::domain::XdgDirectory::resolve
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPath(Vec<PathBuf>);

impl SearchPath {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }

    /// 相対名 `name` を各候補に結合して先頭から開き、最初に成功したものを返す
    ///
    /// 候補が存在しない種類の失敗（NotFound）だけ次の候補へ進む。
    /// それ以外の失敗はその場で返し、後続の候補で覆い隠さない。
    /// 全候補を使い切ったら [`Error::NotFound`]。
    pub fn open(&self, fs: &dyn FileSystem, name: &str) -> Result<FoundFile, Error> {
        for dir in &self.0 {
            let candidate = dir.join(name);
            match fs.open_read(&candidate) {
                Ok(reader) => {
                    return Ok(FoundFile {
                        path: candidate,
                        reader,
                    })
                }
                Err(e) if e.is_not_found() => continue,
                Err(e) => return Err(e),
            }
        }
        Err(Error::not_found(name))
    }

    /// 先頭候補の下にディレクトリを 1 段作り、そのパスを返す
    ///
    /// 親が無ければ失敗する。`name` が空のときは候補に結合せず、
    /// 空パスのままプリミティブへ渡す（必ず失敗する）。
    pub fn create_dir(
        &self,
        fs: &dyn FileSystem,
        name: &str,
        mode: u32,
    ) -> Result<PathBuf, Error> {
        if name.is_empty() {
            fs.create_dir(Path::new(""), mode)?;
            return Ok(PathBuf::new());
        }
        let target = self.first_candidate(name)?;
        fs.create_dir(&target, mode)?;
        Ok(target)
    }

    /// 先頭候補の下にディレクトリを途中の階層ごと作り、そのパスを返す
    ///
    /// 既に存在していても成功する。空の `name` の扱いは
    /// [`SearchPath::create_dir`] と同じ。
    pub fn create_dir_all(
        &self,
        fs: &dyn FileSystem,
        name: &str,
        mode: u32,
    ) -> Result<PathBuf, Error> {
        if name.is_empty() {
            fs.create_dir(Path::new(""), mode)?;
            return Ok(PathBuf::new());
        }
        let target = self.first_candidate(name)?;
        fs.create_dir_all(&target, mode)?;
        Ok(target)
    }

    /// 先頭候補の下にファイルを作成（既存なら切り詰め）して書き込みハンドルを返す
    ///
    /// `name` にディレクトリ部分があれば、その部分だけを mode 0700 で
    /// 先に掘る。ファイル名単体なら親作成は行わない。
    pub fn create_file(&self, fs: &dyn FileSystem, name: &str) -> Result<CreatedFile, Error> {
        if let Some(parent) = Path::new(name).parent().and_then(Path::to_str) {
            if !parent.is_empty() {
                match self.create_dir_all(fs, parent, PARENT_DIR_MODE) {
                    Ok(_) => {}
                    Err(e) if e.is_already_exists() => {}
                    Err(e) => return Err(e),
                }
            }
        }
        let target = self.first_candidate(name)?;
        let writer = fs.create_file(&target)?;
        Ok(CreatedFile {
            path: target,
            writer,
        })
    }

    fn first_candidate(&self, name: &str) -> Result<PathBuf, Error> {
        match self.0.first() {
            Some(dir) => Ok(dir.join(name)),
            None => Err(Error::not_found(name)),
        }
    }
}

impl Deref for SearchPath {
    type Target = [PathBuf];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[PathBuf]> for SearchPath {
    fn as_ref(&self) -> &[PathBuf] {
        &self.0
    }
}

impl From<Vec<PathBuf>> for SearchPath {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self(paths)
    }
}

/// open が見つけたファイル（実際に開けたフルパス付きの読み取りハンドル）
pub struct FoundFile {
    path: PathBuf,
    reader: Box<dyn Read + Send>,
}

impl FoundFile {
    /// 実際に開けた候補のフルパス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for FoundFile {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reader.read(buf)
    }
}

impl fmt::Debug for FoundFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoundFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

/// create_file が作ったファイル（作成先のフルパス付きの書き込みハンドル）
pub struct CreatedFile {
    path: PathBuf,
    writer: Box<dyn Write + Send>,
}

impl CreatedFile {
    /// 作成したファイルのフルパス
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Write for CreatedFile {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

impl fmt::Debug for CreatedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedFile")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
