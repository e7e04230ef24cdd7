use crate::error::{Result, TixError};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

/// Record separator emitted before each commit in the log output.
pub const RECORD_SEP: char = '\u{1}';
/// Field separator between the commit id, the message, and the numstat block.
pub const FIELD_SEP: char = '\u{2}';

const PRETTY_FORMAT: &str = "format:%x01%H%x02%B%x02";

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or the current dir if `None`.
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        if !path.is_dir() {
            return Err(TixError::Source(format!(
                "not a directory: {}",
                path.display()
            )));
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `git log --numstat` and return the raw log text.
    ///
    /// Empty history comes back as `Ok` with an empty string; a non-zero
    /// exit status, error text on stderr, or a missing `git` binary is a
    /// `Source` error.
    pub fn numstat_log(&self) -> Result<String> {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Reading git history...");
        pb.enable_steady_tick(Duration::from_millis(100));

        let output = Command::new("git")
            .arg("-C")
            .arg(&self.path)
            .args(["log", "--numstat", &format!("--pretty={PRETTY_FORMAT}")])
            .output()
            .map_err(|e| TixError::Source(format!("failed to run git: {e}")))?;

        pb.finish_and_clear();

        let stderr = String::from_utf8_lossy(&output.stderr);
        // A freshly initialized repository has no history, which is not a
        // failure of the source.
        if stderr.contains("does not have any commits yet") {
            return Ok(String::new());
        }
        if !output.status.success() || !stderr.trim().is_empty() {
            return Err(TixError::Source(format!(
                "git log failed for {}: {}",
                self.path.display(),
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
