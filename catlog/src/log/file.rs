//! File adapter implementation.

use chrono::Utc;
use parking_lot::Mutex;
use std::fmt::Arguments;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use super::format::format_line;
use crate::log::{Adapter, Category, LogLevel};

/// Adapter that appends one line per record to a file.
///
/// Output is buffered; records reach the disk on [`Adapter::flush`], when
/// the buffer fills, or when the adapter is dropped. Write failures are
/// reported through `tracing` and otherwise ignored so that logging never
/// fails the caller.
pub struct FileAdapter {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileAdapter {
    /// Open `path` for appending, creating it and its parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Adapter for FileAdapter {
    fn log(&self, category: &Category, level: LogLevel, args: Arguments<'_>) {
        let line = format_line(Utc::now(), category, level, args);
        let mut writer = self.writer.lock();
        if let Err(e) = writeln!(writer, "{}", line) {
            warn!(path = %self.path.display(), error = %e, "Failed to write log record");
        }
    }

    fn flush(&self) {
        if let Err(e) = self.writer.lock().flush() {
            warn!(path = %self.path.display(), error = %e, "Failed to flush log file");
        }
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

impl std::fmt::Debug for FileAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileAdapter")
            .field("path", &self.path)
            .finish()
    }
}
