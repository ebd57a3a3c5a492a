//! Journal-driven study runs.
//!
//! # Responsibility
//! - Parse one dated journal section, route each topic, and materialize it.
//! - Commit the resulting tree changes through the version-control seam.
//!
//! # Invariants
//! - A missing journal file or date section is "nothing to do", not an error.
//! - Topics are processed in journal order after one scaffold pass.
//! - Commit failures are recorded in the report and never abort the run.
//! - Topics that cannot name a directory are skipped; only I/O errors abort.

use super::scaffold_service::ScaffoldService;
use super::topic_service::TopicService;
use super::{io_error, KbError, KbResult};
use crate::config::KbConfig;
use crate::journal::{parse_section, parse_section_str, JOURNAL_DATE_FORMAT};
use crate::model::journal::JournalEntry;
use crate::model::route::Route;
use crate::model::topic::MaterializedTopic;
use crate::routing::classify;
use crate::vcs::VersionControl;
use chrono::{Local, NaiveDate};
use log::{info, warn};
use std::path::Path;

/// What happened to the commit step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed,
    /// Commits disabled by configuration or caller.
    Skipped,
    /// The backend reported an error; the run still succeeded.
    Failed(String),
}

/// One journal topic after routing and materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudiedTopic {
    pub title: String,
    pub route: Route,
    pub topic: MaterializedTopic,
}

/// One journal topic left out of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedTopic {
    pub title: String,
    pub reason: String,
}

/// Result of one study run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyOutcome {
    /// The section was missing or listed no topics.
    NothingToDo { date: String },
    Processed(StudyReport),
}

/// Details of a run that materialized at least one topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyReport {
    pub date: String,
    pub topics: Vec<StudiedTopic>,
    pub skipped: Vec<SkippedTopic>,
    pub notes: Vec<String>,
    pub commit: CommitOutcome,
}

/// Commit message for a study run on `date`.
pub fn commit_message(date: &str) -> String {
    format!("study: {date} topics")
}

/// Study orchestrator over one knowledge root and commit backend.
pub struct StudyService<'a, V: VersionControl> {
    config: &'a KbConfig,
    vcs: V,
    today: NaiveDate,
    commit_enabled: bool,
}

impl<'a, V: VersionControl> StudyService<'a, V> {
    /// Creates an orchestrator; commits follow `config.auto_commit`.
    pub fn new(config: &'a KbConfig, vcs: V) -> Self {
        Self {
            config,
            vcs,
            today: Local::now().date_naive(),
            commit_enabled: config.auto_commit,
        }
    }

    /// Pins "today" for default date lookup and README stamps.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Overrides whether the run ends with a commit.
    pub fn with_commit(mut self, enabled: bool) -> Self {
        self.commit_enabled = enabled;
        self
    }

    /// Reads `journal_path` and processes the section for `date`.
    ///
    /// A missing journal file is treated as an empty document.
    pub fn process_journal_file(
        &self,
        journal_path: &Path,
        date: Option<NaiveDate>,
    ) -> KbResult<StudyOutcome> {
        let document = match std::fs::read_to_string(journal_path) {
            Ok(document) => document,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "event=journal_read module=service status=skip path={} reason=not_found",
                    journal_path.display()
                );
                String::new()
            }
            Err(err) => return Err(io_error("read journal", journal_path, err)),
        };
        self.process_journal_date(document.as_str(), date)
    }

    /// Processes the section for `date` (today when `None`) of `document`.
    pub fn process_journal_date(
        &self,
        document: &str,
        date: Option<NaiveDate>,
    ) -> KbResult<StudyOutcome> {
        let entry = self.parse(document, date);
        if !entry.has_topics() {
            info!(
                "event=study_run module=service status=skip date={} reason=no_topics",
                entry.date
            );
            return Ok(StudyOutcome::NothingToDo { date: entry.date });
        }

        ScaffoldService::new(self.config).ensure_tree()?;
        let materializer = TopicService::with_today(self.config, self.today);

        let mut topics = Vec::with_capacity(entry.topics.len());
        let mut skipped = Vec::new();
        for title in &entry.topics {
            let matched = classify(title);
            let route = matched.route;
            let topic =
                match materializer.materialize(route.area, route.group, title, route.language) {
                    Ok(topic) => topic,
                    Err(err @ (KbError::EmptyTopicSlug(_) | KbError::InvalidSegment { .. })) => {
                        warn!(
                            "event=topic_route module=service status=skip route={}/{} reason={}",
                            route.area, route.group, err
                        );
                        skipped.push(SkippedTopic {
                            title: title.clone(),
                            reason: err.to_string(),
                        });
                        continue;
                    }
                    Err(err) => return Err(err),
                };
            info!(
                "event=topic_route module=service status=ok route={}/{} language={} keyword={} path={}",
                route.area,
                route.group,
                route.language,
                matched.keyword.unwrap_or("-"),
                topic.path.display()
            );
            topics.push(StudiedTopic {
                title: title.clone(),
                route,
                topic,
            });
        }

        let commit = self.commit(entry.date.as_str());
        info!(
            "event=study_run module=service status=ok date={} topics={} skipped={} notes={}",
            entry.date,
            topics.len(),
            skipped.len(),
            entry.notes.len()
        );

        Ok(StudyOutcome::Processed(StudyReport {
            date: entry.date,
            topics,
            skipped,
            notes: entry.notes,
            commit,
        }))
    }

    fn parse(&self, document: &str, date: Option<NaiveDate>) -> JournalEntry {
        match date {
            Some(date) => parse_section(document, Some(date)),
            None => {
                let today = self.today.format(JOURNAL_DATE_FORMAT).to_string();
                parse_section_str(document, today.as_str())
            }
        }
    }

    fn commit(&self, date: &str) -> CommitOutcome {
        if !self.commit_enabled {
            return CommitOutcome::Skipped;
        }
        match self.vcs.commit_all(commit_message(date).as_str()) {
            Ok(()) => CommitOutcome::Committed,
            Err(err) => {
                info!(
                    "event=study_commit module=service status=skip date={} reason={}",
                    date, err
                );
                CommitOutcome::Failed(err.to_string())
            }
        }
    }
}
