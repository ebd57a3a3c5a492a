//! Yearly journal parsing.
//!
//! # Responsibility
//! - Extract one dated section and its `Topics:`/`Notes:` bullet lists.
//!
//! # Invariants
//! - Parsing is best-effort and never fails; unmatched input yields empty lists.

pub mod parser;

pub use parser::{parse_section, parse_section_str, section_dates, JOURNAL_DATE_FORMAT};
