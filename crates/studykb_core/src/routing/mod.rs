//! Keyword routing of free-text topics into the knowledge tree.

pub mod router;

pub use router::{classify, route, RouteMatch, RouteRule, FALLBACK_ROUTE, ROUTE_RULES};
