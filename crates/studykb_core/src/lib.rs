//! Core logic for the studykb knowledge-base scaffolder.
//! This crate is the single source of truth for parsing, routing, and
//! knowledge-tree layout rules.

pub mod config;
pub mod journal;
pub mod logging;
pub mod model;
pub mod routing;
pub mod service;
pub mod slug;
pub mod taxonomy;
pub mod vcs;

pub use config::{ConfigError, KbConfig};
pub use journal::{parse_section, parse_section_str, section_dates};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use model::journal::JournalEntry;
pub use model::route::Route;
pub use model::topic::{ExampleLanguage, MaterializedTopic, TopicRequest};
pub use routing::{classify, route, RouteMatch};
pub use service::index_service::{IndexService, IndexSummary};
pub use service::scaffold_service::{ScaffoldReport, ScaffoldService};
pub use service::study_service::{
    commit_message, CommitOutcome, SkippedTopic, StudiedTopic, StudyOutcome, StudyReport,
    StudyService,
};
pub use service::topic_service::TopicService;
pub use service::{KbError, KbResult};
pub use slug::slugify;
pub use vcs::{GitCli, VcsError, VcsResult, VersionControl};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
