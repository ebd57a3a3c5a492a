//! Knowledge-tree use-case services.
//!
//! # Responsibility
//! - Scaffold the seed tree, materialize topics, rebuild the index, and
//!   orchestrate journal-driven study runs.
//! - Keep filesystem primitives in one place with uniform error mapping.
//!
//! # Invariants
//! - Services never delete or overwrite topic content.
//! - Existing files are detected before any write (at-most-once creation).

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod index_service;
pub mod scaffold_service;
pub mod study_service;
pub mod topic_service;

/// Hidden marker that keeps empty directories tracked by version control.
pub const MARKER_FILE: &str = ".gitkeep";

/// Result type for service operations.
pub type KbResult<T> = Result<T, KbError>;

/// Errors from knowledge-tree services.
#[derive(Debug)]
pub enum KbError {
    /// Filesystem operation failed.
    Io {
        op: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    /// Area or group would not name a single child directory.
    InvalidSegment {
        field: &'static str,
        value: String,
    },
    /// Topic title contains no slug characters.
    EmptyTopicSlug(String),
}

impl Display for KbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { op, path, source } => {
                write!(f, "failed to {op} `{}`: {source}", path.display())
            }
            Self::InvalidSegment { field, value } => {
                write!(f, "invalid {field} `{value}`: must be one directory name")
            }
            Self::EmptyTopicSlug(title) => {
                write!(f, "topic title `{title}` has no letters or digits")
            }
        }
    }
}

impl Error for KbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub(crate) fn io_error(op: &'static str, path: &Path, source: std::io::Error) -> KbError {
    KbError::Io {
        op,
        path: path.to_path_buf(),
        source,
    }
}

/// Creates `dir` and missing parents. Returns `true` when it did not exist.
pub(crate) fn ensure_dir(dir: &Path) -> KbResult<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|err| io_error("create directory", dir, err))?;
    Ok(true)
}

/// Writes `contents` to `path` only when no file exists there.
///
/// Returns `true` when the file was created by this call.
pub(crate) fn write_if_absent(path: &Path, contents: &str) -> KbResult<bool> {
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(io_error("create file", path, err)),
    };
    file.write_all(contents.as_bytes())
        .map_err(|err| io_error("write file", path, err))?;
    Ok(true)
}

/// Creates an empty file when missing; existing content is left untouched.
pub(crate) fn touch(path: &Path) -> KbResult<bool> {
    write_if_absent(path, "")
}
