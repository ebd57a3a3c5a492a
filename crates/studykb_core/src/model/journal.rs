//! Journal entry projection.

use serde::Serialize;

/// Topics and notes listed under one dated journal section.
///
/// An entry with both lists empty means nothing was scheduled for `date`,
/// either because the section is missing or because it has no bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JournalEntry {
    /// ISO `YYYY-MM-DD` date the section was looked up by.
    pub date: String,
    /// Bullets under `Topics:` in document order.
    pub topics: Vec<String>,
    /// Bullets under `Notes:` in document order.
    pub notes: Vec<String>,
}

impl JournalEntry {
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            topics: Vec::new(),
            notes: Vec::new(),
        }
    }

    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }
}
