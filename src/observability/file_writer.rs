//! Rotating file writer with size-based rotation and backup retention.
//!
//! Keeps log files from growing without bound: when the active file passes
//! the size threshold it is renamed with a timestamp suffix and a fresh file
//! is started. Only the newest backups are retained.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// An append-only log file that rotates by size.
///
/// Implements [`Write`]; wrap it in a `Mutex` to hand it to
/// `tracing_subscriber::fmt::layer().with_writer(..)`.
///
/// # Rotation Strategy
///
/// 1. Track bytes written since the file was opened
/// 2. Once the size passes 10MB, before the next write:
///    - Rename current file to `<name>.<timestamp>`
///    - Start a new empty file
///    - Remove the oldest backups beyond 3
pub struct RotatingFile {
    path: PathBuf,
    file: Option<File>,
    max_bytes: u64,
    written: u64,
}

impl RotatingFile {
    /// Creates a writer for `path`. The file is opened on first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_max_bytes(path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer with a custom rotation threshold.
    #[must_use]
    pub const fn with_max_bytes(path: PathBuf, max_bytes: u64) -> Self {
        Self {
            path,
            file: None,
            max_bytes,
            written: 0,
        }
    }

    /// Path of the active log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.written > self.max_bytes {
            self.file = None;
            self.rotate()?;
        }

        if self.file.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.written = file.metadata().map_or(0, |m| m.len());
            self.file = Some(file);
        }

        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))
    }

    fn rotate(&mut self) -> io::Result<()> {
        let timestamp = chrono::Utc::now().format("%Y%m%d%H%M%S%3f");
        let mut backup = self.path.clone().into_os_string();
        backup.push(format!(".{timestamp}"));

        if self.path.exists() {
            fs::rename(&self.path, PathBuf::from(backup))?;
        }
        self.written = 0;
        self.cleanup_old_backups()
    }

    /// Removes backups beyond [`MAX_BACKUP_FILES`], newest kept first.
    ///
    /// Individual deletion errors are ignored.
    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let Some(name) = self.path.file_name().and_then(|n| n.to_str()) else {
            return Ok(());
        };
        let prefix = format!("{name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect();

        // Timestamp suffixes sort chronologically.
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for old in backups.iter().skip(MAX_BACKUP_FILES) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.open()?.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.file.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("written", &self.written)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backups(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with("oculus.log."))
            .count()
    }

    #[test]
    fn appends_without_rotating_below_threshold() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::new(dir.path().join("oculus.log"));

        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();
        file.flush().unwrap();

        let contents = fs::read_to_string(file.path()).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        assert_eq!(backups(dir.path()), 0);
    }

    #[test]
    fn rotates_past_threshold_and_keeps_three_backups() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = RotatingFile::with_max_bytes(dir.path().join("oculus.log"), 8);

        for i in 0..6 {
            file.write_all(format!("line number {i}\n").as_bytes()).unwrap();
            std::thread::sleep(std::time::Duration::from_millis(2));
        }

        assert_eq!(backups(dir.path()), MAX_BACKUP_FILES);
        let current = fs::read_to_string(file.path()).unwrap();
        assert_eq!(current, "line number 5\n");
    }
}
