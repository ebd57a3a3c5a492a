//! `git` command-line backend.

use super::{VcsError, VcsResult, VersionControl};
use log::{debug, info};
use std::path::PathBuf;
use std::process::Command;

const MAX_STDERR_CHARS: usize = 200;

/// Commits through the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_dir: PathBuf,
}

impl GitCli {
    /// Creates a backend that runs `git -C <repo_dir> ...`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    fn run(&self, args: &[&str]) -> VcsResult<()> {
        let command = format!("git {}", args.join(" "));
        debug!(
            "event=vcs_exec module=vcs status=start repo={} command={}",
            self.repo_dir.display(),
            command
        );
        let output = Command::new("git")
            .arg("-C")
            .arg(&self.repo_dir)
            .args(args)
            .output()
            .map_err(|source| VcsError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        Err(VcsError::CommandFailed {
            command,
            code: output.status.code(),
            stderr: summarize_stderr(&output.stderr),
        })
    }
}

impl VersionControl for GitCli {
    fn commit_all(&self, message: &str) -> VcsResult<()> {
        self.run(&["add", "-A"])?;
        self.run(&["commit", "-m", message])?;
        info!(
            "event=vcs_commit module=vcs status=ok repo={}",
            self.repo_dir.display()
        );
        Ok(())
    }
}

fn summarize_stderr(raw: &[u8]) -> String {
    let text = String::from_utf8_lossy(raw);
    let normalized = text.trim().replace(['\n', '\r'], " ");
    let mut summary = normalized.chars().take(MAX_STDERR_CHARS).collect::<String>();
    if normalized.chars().count() > MAX_STDERR_CHARS {
        summary.push_str("...");
    }
    summary
}
