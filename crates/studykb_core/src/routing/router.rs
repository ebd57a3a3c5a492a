//! Ordered keyword router.
//!
//! # Responsibility
//! - Map a free-text topic to an `(area, group, language)` route.
//!
//! # Invariants
//! - Rules are evaluated in declaration order; the first rule with any
//!   keyword contained in the lowercased topic wins.
//! - Keyword position inside the topic is irrelevant to precedence.
//! - Unmatched topics fall back to `swe/misc` with `python`.

use crate::model::route::Route;

/// One `(keywords, route)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    /// Lowercase substrings; any one match selects `route`.
    pub keywords: &'static [&'static str],
    pub route: Route,
}

impl RouteRule {
    fn matching_keyword(&self, lowered_topic: &str) -> Option<&'static str> {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| lowered_topic.contains(keyword))
    }
}

/// Route used when no rule matches.
pub const FALLBACK_ROUTE: Route = Route::new("swe", "misc", "python");

/// Priority-ordered routing table.
pub const ROUTE_RULES: &[RouteRule] = &[
    RouteRule {
        keywords: &["react", "ag grid", "frontend", "tsx", "typescript"],
        route: Route::new("swe", "frontend", "typescript"),
    },
    RouteRule {
        keywords: &[
            "git",
            "docker",
            "kubernetes",
            "ci/cd",
            "ci-cd",
            "shell",
            "zsh",
            "brew",
            "homebrew",
        ],
        route: Route::new("swe", "devops", "bash"),
    },
    RouteRule {
        keywords: &["java", "spring"],
        route: Route::new("swe", "backend", "java"),
    },
    RouteRule {
        keywords: &["django", "python"],
        route: Route::new("swe", "backend", "python"),
    },
    RouteRule {
        keywords: &["langchain", "agent", "crewai"],
        route: Route::new("ai", "agents", "python"),
    },
    RouteRule {
        keywords: &[
            "rag",
            "prompt",
            "fine-tuning",
            "evals",
            "transformer",
            "embedding",
        ],
        route: Route::new("ai", "llms", "python"),
    },
    RouteRule {
        keywords: &[
            "sklearn",
            "regression",
            "clustering",
            "pytorch",
            "tensorflow",
        ],
        route: Route::new("ml", "frameworks", "python"),
    },
];

/// Route plus the keyword that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteMatch {
    pub route: Route,
    /// `None` when the fallback route was used.
    pub keyword: Option<&'static str>,
}

impl RouteMatch {
    pub fn is_fallback(&self) -> bool {
        self.keyword.is_none()
    }
}

/// Classifies `topic` and reports which keyword fired.
pub fn classify(topic: &str) -> RouteMatch {
    let lowered = topic.to_lowercase();
    ROUTE_RULES
        .iter()
        .find_map(|rule| {
            rule.matching_keyword(lowered.as_str())
                .map(|keyword| RouteMatch {
                    route: rule.route,
                    keyword: Some(keyword),
                })
        })
        .unwrap_or(RouteMatch {
            route: FALLBACK_ROUTE,
            keyword: None,
        })
}

/// Classifies `topic` into an `(area, group, language)` route.
pub fn route(topic: &str) -> Route {
    classify(topic).route
}

#[cfg(test)]
mod tests {
    use super::{classify, FALLBACK_ROUTE};

    #[test]
    fn reports_first_keyword_of_winning_rule() {
        let matched = classify("Docker and Kubernetes");
        assert_eq!(matched.keyword, Some("docker"));
        assert!(!matched.is_fallback());
    }

    #[test]
    fn substring_match_has_no_word_boundaries() {
        // "digital" contains "git".
        assert_eq!(classify("digital signal processing").route.group, "devops");
    }

    #[test]
    fn empty_topic_uses_fallback() {
        let matched = classify("");
        assert!(matched.is_fallback());
        assert_eq!(matched.route, FALLBACK_ROUTE);
    }
}
