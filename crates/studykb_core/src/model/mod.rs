//! Domain model for the knowledge tree.
//!
//! # Responsibility
//! - Define the records passed between parser, router, and services.
//!
//! # Invariants
//! - A topic is identified by `(area, group, slug)` and its directory path.
//! - Journal entries are read-only projections of an external document.

pub mod journal;
pub mod route;
pub mod topic;
