//! Append-only activity log.
//!
//! Each event is one UTF-8 line of the form `YYYY-MM-DD HH:MM:SS - message`
//! using the local time zone. The file grows without bound; readers only ever
//! ask for the tail, which is read backwards from the end of the file.

use std::{
    io::{self, ErrorKind, SeekFrom},
    path::{Path, PathBuf},
};

use jiff::Zoned;
use log::warn;
use tokio::{
    fs,
    io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
    sync::Mutex,
};

use crate::error::{FsResultExt, Result};

/// Bytes read per step when scanning backwards for the tail.
const TAIL_CHUNK: u64 = 8 * 1024;

/// Sole reader and writer of one activity log file.
#[derive(Debug)]
pub struct ActivityLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `message` stamped with the current local time as exactly one
    /// line. Line breaks inside `message` are written as spaces.
    ///
    /// # Errors
    ///
    /// Returns `SundownError::FileSystem` if the directory cannot be created
    /// or the file cannot be written.
    pub async fn append(&self, message: &str) -> Result<()> {
        let line = format_line(&Zoned::now(), message);

        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.fs_context(parent)?;
        }
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .fs_context(&self.path)?;
        file.write_all(line.as_bytes())
            .await
            .fs_context(&self.path)?;
        file.flush().await.fs_context(&self.path)
    }

    /// Returns up to `count` of the newest lines, oldest first.
    ///
    /// A missing or unreadable file yields an empty list. Only the end of
    /// the file is read, however large it has grown.
    pub async fn recent(&self, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }
        let contents = {
            let _guard = self.lock.lock().await;
            read_tail(&self.path, count).await
        };

        match contents {
            Ok(contents) => tail(&contents, count),
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(
                    "Could not read activity log {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }
}

fn format_line(now: &Zoned, message: &str) -> String {
    let message = message.replace(['\r', '\n'], " ");
    format!("{} - {}\n", now.strftime("%Y-%m-%d %H:%M:%S"), message)
}

/// Reads whole lines from the end of `path` until at least `count` of them
/// are available or the start of the file is reached.
async fn read_tail(path: &Path, count: usize) -> io::Result<String> {
    let mut file = fs::File::open(path).await?;
    let mut start = file.metadata().await?.len();
    let mut buffer: Vec<u8> = Vec::new();
    let mut newlines = 0;

    while start > 0 && newlines <= count {
        let chunk = TAIL_CHUNK.min(start);
        start -= chunk;
        file.seek(SeekFrom::Start(start)).await?;

        let mut block = vec![0u8; chunk as usize];
        file.read_exact(&mut block).await?;
        newlines += block.iter().filter(|&&b| b == b'\n').count();
        block.extend_from_slice(&buffer);
        buffer = block;
    }

    // The first line is partial unless the scan reached the start
    if start > 0 {
        if let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
            buffer.drain(..=pos);
        }
    }
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

fn tail(contents: &str, count: usize) -> Vec<String> {
    let mut lines: Vec<&str> = contents.lines().filter(|l| !l.is_empty()).collect();
    let start = lines.len().saturating_sub(count);
    lines.split_off(start).into_iter().map(String::from).collect()
}
