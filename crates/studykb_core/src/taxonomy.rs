//! Static area/group/topic taxonomy used to pre-seed the knowledge tree.
//!
//! # Responsibility
//! - Declare the suggested directory skeleton.
//!
//! # Invariants
//! - The taxonomy only seeds directories; it never restricts which
//!   area/group pairs the router or manual `add` may create.
//! - Entries are already slug-shaped.

/// One group inside an area with its suggested topic directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSeed {
    pub name: &'static str,
    pub topics: &'static [&'static str],
}

/// One top-level area with its groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaSeed {
    pub name: &'static str,
    pub groups: &'static [GroupSeed],
}

const fn group(name: &'static str, topics: &'static [&'static str]) -> GroupSeed {
    GroupSeed { name, topics }
}

/// Area names accepted by the CLI `add` command.
pub const KNOWN_AREAS: &[&str] = &["swe", "ml", "ai"];

/// Seed taxonomy in declaration order.
pub const CATEGORY_TREE: &[AreaSeed] = &[
    AreaSeed {
        name: "swe",
        groups: &[
            group("frontend", &["react", "typescript", "css-tailwind"]),
            group("backend", &["java-spring", "python-django", "node-express"]),
            group("languages", &["javascript", "python", "java", "rust"]),
            group(
                "devops",
                &["git", "ci-cd", "docker-k8s", "cloud-aws", "shell"],
            ),
            group(
                "security",
                &["web-security", "authentication", "cryptography"],
            ),
            group("misc", &[]),
        ],
    },
    AreaSeed {
        name: "ml",
        groups: &[
            group(
                "fundamentals",
                &["linear-regression", "decision-trees", "clustering"],
            ),
            group(
                "data-engineering",
                &["preprocessing", "feature-engineering", "pipelines"],
            ),
            group(
                "mlops",
                &["model-training", "model-deployment", "monitoring"],
            ),
            group("frameworks", &["sklearn", "tensorflow", "pytorch"]),
            group("misc", &[]),
        ],
    },
    AreaSeed {
        name: "ai",
        groups: &[
            group(
                "llms",
                &["prompting", "fine-tuning", "evals", "safety-redteaming"],
            ),
            group("nlp-classic", &["embeddings", "transformers", "seq2seq"]),
            group("agents", &["langchain", "crewai", "orchestration"]),
            group(
                "applications",
                &["chatbots", "search", "retrieval-augmented-gen"],
            ),
            group("misc", &[]),
        ],
    },
];

/// Returns whether `area` is one of the CLI-accepted areas.
pub fn is_known_area(area: &str) -> bool {
    KNOWN_AREAS.contains(&area.trim().to_ascii_lowercase().as_str())
}
