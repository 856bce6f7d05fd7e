//! 標準ファイルシステム実装（std::fs を委譲）

use std::fs::{DirBuilder, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use crate::error::Error;
use crate::ports::outbound::FileSystem;

/// 標準ライブラリの fs をそのまま委譲する FileSystem 実装
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

fn dir_builder(mode: u32, recursive: bool) -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(recursive);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder
}

impl FileSystem for StdFileSystem {
    fn open_read(&self, path: &Path) -> Result<Box<dyn Read + Send>, Error> {
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        Ok(Box::new(file))
    }

    fn create_dir(&self, path: &Path, mode: u32) -> Result<(), Error> {
        dir_builder(mode, false)
            .create(path)
            .map_err(|e| Error::io(path, e))
    }

    fn create_dir_all(&self, path: &Path, mode: u32) -> Result<(), Error> {
        dir_builder(mode, true)
            .create(path)
            .map_err(|e| Error::io(path, e))
    }

    fn create_file(&self, path: &Path) -> Result<Box<dyn Write + Send>, Error> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| Error::io(path, e))?;
        Ok(Box::new(file))
    }
}
