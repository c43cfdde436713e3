use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

pub const LOG_FILE_NAME: &str = "Log.txt";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
    Success,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Success => "SUCCESS",
        }
    }
}

/// Plain-text record of one `generate` run, appended to `Log.txt`.
///
/// Every entry is also emitted as a `tracing` event.
#[derive(Debug)]
pub struct RunLog {
    path: PathBuf,
    entries: Vec<String>,
}

impl RunLog {
    /// A log that will be written to `<dir>/Log.txt`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        RunLog {
            path: dir.as_ref().join(LOG_FILE_NAME),
            entries: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn record(&mut self, level: Level, message: impl Into<String>) {
        let message = message.into();
        match level {
            Level::Info | Level::Success => tracing::info!("{}", message),
            Level::Warn => tracing::warn!("{}", message),
            Level::Error => tracing::error!("{}", message),
        }
        self.entries.push(format!(
            "[{}] [{}] {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level.as_str(),
            message
        ));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.record(Level::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.record(Level::Error, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.record(Level::Success, message);
    }

    pub fn count(&self, level: Level) -> usize {
        let tag = format!("] [{}] ", level.as_str());
        self.entries.iter().filter(|e| e.contains(&tag)).count()
    }

    pub fn summary(&self) -> String {
        format!(
            "Log Summary: {} info, {} warnings, {} errors, {} success",
            self.count(Level::Info),
            self.count(Level::Warn),
            self.count(Level::Error),
            self.count(Level::Success)
        )
    }

    /// Appends this run to the log file, separated from earlier runs by a blank line.
    pub fn write(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
        }

        let existing = fs::read_to_string(&self.path).unwrap_or_default();
        let mut out = String::new();
        if !existing.is_empty() {
            if !existing.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "=== Automation Run: {} ===\n",
            Local::now().format(TIMESTAMP_FORMAT)
        ));
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| format!("Failed to open {}: {}", self.path.display(), e))?;
        file.write_all(out.as_bytes())
            .map_err(|e| format!("Failed to write {}: {}", self.path.display(), e))
    }
}
