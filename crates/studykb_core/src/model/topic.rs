//! Topic records and example-language mapping.

use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Language used for a topic's starter example file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExampleLanguage {
    Python,
    TypeScript,
    JavaScript,
    Bash,
    /// Any unmapped language; written as a plain-text placeholder.
    Other(String),
}

impl ExampleLanguage {
    /// Parses a free-text language name. Unknown names are kept as `Other`.
    pub fn parse(value: &str) -> Self {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "python" => Self::Python,
            "typescript" => Self::TypeScript,
            "javascript" => Self::JavaScript,
            "bash" => Self::Bash,
            _ => Self::Other(normalized),
        }
    }

    /// File extension for `examples/main.<ext>`.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Python => "py",
            Self::TypeScript => "ts",
            Self::JavaScript => "js",
            Self::Bash => "sh",
            Self::Other(_) => "txt",
        }
    }

    /// One-line starter body, newline-terminated.
    pub fn starter_body(&self) -> &'static str {
        match self {
            Self::Python => "print(\"hello from example\")\n",
            Self::TypeScript | Self::JavaScript => "console.log(\"hello from example\")\n",
            Self::Bash => "echo \"hello from example\"\n",
            Self::Other(_) => "Example placeholder.\n",
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &str {
        match self {
            Self::Python => "python",
            Self::TypeScript => "typescript",
            Self::JavaScript => "javascript",
            Self::Bash => "bash",
            Self::Other(name) => name.as_str(),
        }
    }
}

impl Display for ExampleLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Input for one topic materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRequest {
    /// Top-level area, e.g. `swe`.
    pub area: String,
    /// Group inside the area, e.g. `frontend`.
    pub group: String,
    /// Display title before slugging. Used verbatim as the README heading.
    pub title: String,
    pub language: ExampleLanguage,
}

impl TopicRequest {
    pub fn new(
        area: impl Into<String>,
        group: impl Into<String>,
        title: impl Into<String>,
        language: &str,
    ) -> Self {
        Self {
            area: area.into(),
            group: group.into(),
            title: title.into(),
            language: ExampleLanguage::parse(language),
        }
    }
}

/// Result of ensuring one topic directory exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedTopic {
    /// Normalized lowercase area.
    pub area: String,
    /// Normalized lowercase group.
    pub group: String,
    /// Directory name derived from the title.
    pub slug: String,
    /// Resolved topic directory.
    pub path: PathBuf,
    /// `true` when this call wrote `README.md`.
    pub readme_created: bool,
    /// `true` when this call wrote the example file.
    pub example_created: bool,
}

impl MaterializedTopic {
    /// Returns whether this call wrote nothing new.
    pub fn already_existed(&self) -> bool {
        !self.readme_created && !self.example_created
    }
}
