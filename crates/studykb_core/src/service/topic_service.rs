//! Topic materialization.
//!
//! # Responsibility
//! - Resolve `(area, group, title)` into `<root>/<area>/<group>/<slug>`.
//! - Create the topic directory, `examples/`, README stub, and starter file.
//!
//! # Invariants
//! - README and example files are written at most once; existing files are
//!   never overwritten.
//! - Area and group are lowercased; the directory name is the title slug.
//! - Resolved paths always stay directly under the configured root.

use super::{ensure_dir, touch, write_if_absent, KbError, KbResult, MARKER_FILE};
use crate::config::KbConfig;
use crate::journal::JOURNAL_DATE_FORMAT;
use crate::model::topic::{ExampleLanguage, MaterializedTopic, TopicRequest};
use crate::slug::slugify;
use chrono::{Local, NaiveDate};
use log::info;

const README_FILE: &str = "README.md";
const EXAMPLES_DIR: &str = "examples";
const EXAMPLE_STEM: &str = "main";

/// Topic materializer over one knowledge root.
pub struct TopicService<'a> {
    config: &'a KbConfig,
    today: NaiveDate,
}

impl<'a> TopicService<'a> {
    /// Creates a materializer stamping READMEs with the local date.
    pub fn new(config: &'a KbConfig) -> Self {
        Self::with_today(config, Local::now().date_naive())
    }

    /// Creates a materializer with a fixed creation date.
    pub fn with_today(config: &'a KbConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    /// Ensures one topic exists and returns its resolved location.
    ///
    /// # Errors
    /// - `InvalidSegment` when area or group is not one directory name.
    /// - `EmptyTopicSlug` when the title has no slug characters.
    /// - `Io` on filesystem failures.
    pub fn materialize(
        &self,
        area: &str,
        group: &str,
        title: &str,
        language: &str,
    ) -> KbResult<MaterializedTopic> {
        self.materialize_request(&TopicRequest::new(area, group, title, language))
    }

    /// Same as [`TopicService::materialize`] with a prepared request.
    pub fn materialize_request(&self, request: &TopicRequest) -> KbResult<MaterializedTopic> {
        let area = normalize_segment("area", request.area.as_str())?;
        let group = normalize_segment("group", request.group.as_str())?;
        let slug = slugify(request.title.as_str());
        if slug.is_empty() {
            return Err(KbError::EmptyTopicSlug(request.title.clone()));
        }

        let path = self.config.root.join(&area).join(&group).join(&slug);
        let examples_dir = path.join(EXAMPLES_DIR);
        ensure_dir(&examples_dir)?;
        touch(&path.join(MARKER_FILE))?;

        let readme = render_readme(request.title.as_str(), &area, &group, self.today);
        let readme_created = write_if_absent(&path.join(README_FILE), readme.as_str())?;

        let example_path = examples_dir.join(example_file_name(&request.language));
        let example_created =
            write_if_absent(&example_path, request.language.starter_body())?;

        info!(
            "event=topic_materialize module=service status={} path={} readme_created={} example_created={} language={}",
            if readme_created || example_created { "ok" } else { "skip" },
            path.display(),
            readme_created,
            example_created,
            request.language
        );

        Ok(MaterializedTopic {
            area,
            group,
            slug,
            path,
            readme_created,
            example_created,
        })
    }
}

/// Example file name for a language, e.g. `main.py`.
pub fn example_file_name(language: &ExampleLanguage) -> String {
    format!("{EXAMPLE_STEM}.{}", language.extension())
}

/// Renders the README stub for a new topic.
pub fn render_readme(title: &str, area: &str, group: &str, created: NaiveDate) -> String {
    let created = created.format(JOURNAL_DATE_FORMAT);
    format!(
        "# {title}\n\
         \n\
         **Area:** {area} / **Group:** {group}  \n\
         **Created:** {created}\n\
         \n\
         ## Difficulty\n\
         (easy|medium|hard)\n\
         \n\
         ## Why this matters\n\
         (short note)\n\
         \n\
         ## Key concepts\n\
         - …\n\
         \n\
         ## Pitfalls\n\
         - …\n\
         \n\
         ## Further reading\n\
         - …\n\
         \n"
    )
}

fn normalize_segment(field: &'static str, value: &str) -> KbResult<String> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty()
        || normalized == "."
        || normalized == ".."
        || normalized.contains(['/', '\\'])
    {
        return Err(KbError::InvalidSegment {
            field,
            value: value.to_string(),
        });
    }
    Ok(normalized)
}
