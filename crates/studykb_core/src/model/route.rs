//! Routing result for one free-text topic.

use serde::Serialize;
use std::fmt::{Display, Formatter};

/// `(area, group, language)` classification for a topic string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub area: &'static str,
    pub group: &'static str,
    pub language: &'static str,
}

impl Route {
    pub const fn new(area: &'static str, group: &'static str, language: &'static str) -> Self {
        Self {
            area,
            group,
            language,
        }
    }

    /// Returns the route as a plain tuple.
    pub fn as_tuple(&self) -> (&'static str, &'static str, &'static str) {
        (self.area, self.group, self.language)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({})", self.area, self.group, self.language)
    }
}
