//! Index document generation.
//!
//! # Responsibility
//! - Walk `<root>/<area>/<group>/<topic>` and rewrite the index document.
//!
//! # Invariants
//! - Full rebuild: output depends only on current directory state.
//! - Areas, groups, and topics are listed in name order.
//! - Hidden entries and plain files are skipped at every level.
//! - Only topics with a `README.md` are linked.

use super::{ensure_dir, io_error, KbResult};
use crate::config::KbConfig;
use log::info;
use std::path::{Path, PathBuf};

/// First line of every generated index.
pub const INDEX_TITLE: &str = "# 📚 Knowledge Index\n";

/// Counts and location of one index rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub path: PathBuf,
    pub areas: usize,
    pub groups: usize,
    pub topics: usize,
}

/// Index builder over one knowledge root.
pub struct IndexService<'a> {
    config: &'a KbConfig,
}

impl<'a> IndexService<'a> {
    pub fn new(config: &'a KbConfig) -> Self {
        Self { config }
    }

    /// Renders the index from disk without writing it.
    pub fn render(&self) -> KbResult<(String, IndexSummary)> {
        let root = self.config.root.as_path();
        let mut summary = IndexSummary {
            path: self.config.index_path(),
            areas: 0,
            groups: 0,
            topics: 0,
        };
        let mut lines = vec![INDEX_TITLE.to_string()];

        for (area_name, area_dir) in visible_subdirs(root)? {
            summary.areas += 1;
            lines.push(format!("## {}", area_name.to_uppercase()));

            for (group_name, group_dir) in visible_subdirs(&area_dir)? {
                summary.groups += 1;
                lines.push(format!("- {}", capitalize(&group_name)));

                for (topic_name, topic_dir) in visible_subdirs(&group_dir)? {
                    if !topic_dir.join("README.md").is_file() {
                        continue;
                    }
                    summary.topics += 1;
                    let title = capitalize(&topic_name.replace('-', " "));
                    lines.push(format!(
                        "  - [{title}]({area_name}/{group_name}/{topic_name}/README.md)"
                    ));
                }
            }
            lines.push(String::new());
        }

        Ok((lines.join("\n"), summary))
    }

    /// Rebuilds and overwrites the index document.
    pub fn build_index(&self) -> KbResult<IndexSummary> {
        let (contents, summary) = self.render()?;
        if let Some(parent) = summary.path.parent() {
            ensure_dir(parent)?;
        }
        std::fs::write(&summary.path, contents)
            .map_err(|err| io_error("write index", &summary.path, err))?;

        info!(
            "event=index_build module=service status=ok path={} areas={} groups={} topics={}",
            summary.path.display(),
            summary.areas,
            summary.groups,
            summary.topics
        );
        Ok(summary)
    }
}

/// Lists non-hidden child directories sorted by name.
///
/// A missing `dir` yields an empty list.
fn visible_subdirs(dir: &Path) -> KbResult<Vec<(String, PathBuf)>> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(io_error("read directory", dir, err)),
    };

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| io_error("read directory", dir, err))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let path = entry.path();
        if path.is_dir() {
            children.push((name, path));
        }
    }
    children.sort_by(|left, right| left.0.cmp(&right.0));
    Ok(children)
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
