//! Version-control commit seam.
//!
//! # Responsibility
//! - Stage and commit knowledge-tree changes after a study run.
//! - Keep process spawning behind a trait so orchestration stays testable.
//!
//! # Invariants
//! - Callers treat every `VcsError` as informational; a failed commit never
//!   aborts a run.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod git;

pub use git::GitCli;

/// Result type for version-control operations.
pub type VcsResult<T> = Result<T, VcsError>;

/// Errors from version-control commands.
#[derive(Debug)]
pub enum VcsError {
    /// The command could not be started (e.g. binary missing).
    Spawn {
        command: String,
        source: std::io::Error,
    },
    /// The command ran and exited unsuccessfully.
    CommandFailed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

impl Display for VcsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Spawn { command, source } => {
                write!(f, "failed to execute `{command}`: {source}")
            }
            Self::CommandFailed {
                command,
                code,
                stderr,
            } => {
                let code = code
                    .map(|value| value.to_string())
                    .unwrap_or_else(|| "signal".to_string());
                if stderr.is_empty() {
                    write!(f, "`{command}` exited with {code}")
                } else {
                    write!(f, "`{command}` exited with {code}: {stderr}")
                }
            }
        }
    }
}

impl Error for VcsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            Self::CommandFailed { .. } => None,
        }
    }
}

/// Commit backend used by the study orchestrator.
pub trait VersionControl {
    /// Stages every change in the working tree and commits it.
    fn commit_all(&self, message: &str) -> VcsResult<()>;
}

impl<T: VersionControl + ?Sized> VersionControl for &T {
    fn commit_all(&self, message: &str) -> VcsResult<()> {
        (**self).commit_all(message)
    }
}
