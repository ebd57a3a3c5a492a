//! Line-scanner for dated journal sections.
//!
//! # Responsibility
//! - Locate the `## YYYY-MM-DD` section for one date.
//! - Collect bullets listed under its `Topics:` and `Notes:` sub-headings.
//!
//! # Invariants
//! - The first section whose heading equals the target date wins.
//! - A section ends at the next date heading or end of document.
//! - Only the first `Topics:` and first `Notes:` block of a section count.
//! - Malformed input yields fewer bullets, never an error.

use crate::model::journal::JournalEntry;
use chrono::{Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Date format used by section headings and lookups.
pub const JOURNAL_DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*##\s*(\d{4}-\d{2}-\d{2})\s*$").expect("valid date heading regex")
});
static SUB_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(topics|notes)\s*:\s*$").expect("valid sub-heading regex")
});
static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*-\s*(.*)$").expect("valid bullet regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingDate,
    InSection,
    InTopics,
    InNotes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubHeading {
    Topics,
    Notes,
}

/// Extracts the section for `target_date` (local today when `None`).
///
/// A missing section returns an empty entry for that date.
pub fn parse_section(document: &str, target_date: Option<NaiveDate>) -> JournalEntry {
    let date = target_date
        .unwrap_or_else(|| Local::now().date_naive())
        .format(JOURNAL_DATE_FORMAT)
        .to_string();
    parse_section_str(document, date.as_str())
}

/// Same as [`parse_section`], but matches the heading text verbatim.
pub fn parse_section_str(document: &str, target_date: &str) -> JournalEntry {
    let target = target_date.trim();
    let mut entry = JournalEntry::empty(target);
    let mut state = ScanState::SeekingDate;
    let mut topics_seen = false;
    let mut notes_seen = false;

    for line in document.lines() {
        if let Some(heading_date) = date_heading(line) {
            if state != ScanState::SeekingDate {
                break;
            }
            if heading_date == target {
                state = ScanState::InSection;
            }
            continue;
        }

        if state == ScanState::SeekingDate {
            continue;
        }

        if let Some(sub_heading) = sub_heading(line) {
            state = match sub_heading {
                SubHeading::Topics if !topics_seen => {
                    topics_seen = true;
                    ScanState::InTopics
                }
                SubHeading::Notes if !notes_seen => {
                    notes_seen = true;
                    ScanState::InNotes
                }
                _ => ScanState::InSection,
            };
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        match (state, bullet_text(line)) {
            // Empty bullets still belong to the block but contribute nothing.
            (_, Some("")) => {}
            (ScanState::InTopics, Some(text)) => entry.topics.push(text.to_string()),
            (ScanState::InNotes, Some(text)) => entry.notes.push(text.to_string()),
            (_, Some(_)) => {}
            // Free text closes the current block.
            (_, None) => state = ScanState::InSection,
        }
    }

    entry
}

/// Lists every date heading in document order.
pub fn section_dates(document: &str) -> Vec<String> {
    document
        .lines()
        .filter_map(date_heading)
        .map(str::to_string)
        .collect()
}

fn date_heading(line: &str) -> Option<&str> {
    DATE_HEADING_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

fn sub_heading(line: &str) -> Option<SubHeading> {
    let captures = SUB_HEADING_RE.captures(line)?;
    let name = captures.get(1)?.as_str();
    if name.eq_ignore_ascii_case("topics") {
        Some(SubHeading::Topics)
    } else {
        Some(SubHeading::Notes)
    }
}

fn bullet_text(line: &str) -> Option<&str> {
    BULLET_RE
        .captures(line)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
}
