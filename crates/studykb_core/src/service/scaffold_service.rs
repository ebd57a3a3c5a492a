//! Seed tree scaffolding.
//!
//! # Responsibility
//! - Create every area/group/topic directory declared by the taxonomy.
//! - Drop a hidden marker into each so empty directories survive commits.
//! - Ensure the index document placeholder exists.
//!
//! # Invariants
//! - Idempotent; repeated runs create nothing new.
//! - Existing files and directories are never modified or removed.

use super::{ensure_dir, touch, KbResult, MARKER_FILE};
use crate::config::KbConfig;
use crate::taxonomy::{AreaSeed, CATEGORY_TREE};
use log::info;
use std::path::Path;

/// Counts of entries created by one scaffold run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub directories_created: usize,
    pub markers_created: usize,
    pub index_created: bool,
}

impl ScaffoldReport {
    /// Returns whether the run changed nothing on disk.
    pub fn is_noop(&self) -> bool {
        self.directories_created == 0 && self.markers_created == 0 && !self.index_created
    }
}

/// Scaffolder over one knowledge root.
pub struct ScaffoldService<'a> {
    config: &'a KbConfig,
    tree: &'static [AreaSeed],
}

impl<'a> ScaffoldService<'a> {
    /// Creates a scaffolder for the built-in taxonomy.
    pub fn new(config: &'a KbConfig) -> Self {
        Self {
            config,
            tree: CATEGORY_TREE,
        }
    }

    /// Creates a scaffolder for a custom taxonomy.
    pub fn with_tree(config: &'a KbConfig, tree: &'static [AreaSeed]) -> Self {
        Self { config, tree }
    }

    /// Ensures the seed skeleton and index placeholder exist.
    pub fn ensure_tree(&self) -> KbResult<ScaffoldReport> {
        let root = self.config.root.as_path();
        let mut report = ScaffoldReport::default();
        if ensure_dir(root)? {
            report.directories_created += 1;
        }

        for area in self.tree {
            for group in area.groups {
                let group_dir = root.join(area.name).join(group.name);
                self.ensure_marked_dir(&group_dir, &mut report)?;
                for topic in group.topics {
                    self.ensure_marked_dir(&group_dir.join(topic), &mut report)?;
                }
            }
        }

        report.index_created = touch(&self.config.index_path())?;

        info!(
            "event=tree_scaffold module=service status=ok root={} dirs_created={} markers_created={} index_created={}",
            root.display(),
            report.directories_created,
            report.markers_created,
            report.index_created
        );
        Ok(report)
    }

    fn ensure_marked_dir(&self, dir: &Path, report: &mut ScaffoldReport) -> KbResult<()> {
        if ensure_dir(dir)? {
            report.directories_created += 1;
        }
        if touch(&dir.join(MARKER_FILE))? {
            report.markers_created += 1;
        }
        Ok(())
    }
}
