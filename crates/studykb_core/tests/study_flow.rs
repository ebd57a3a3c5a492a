use chrono::NaiveDate;
use std::cell::RefCell;
use std::io;
use studykb_core::{
    commit_message, CommitOutcome, KbConfig, SkippedTopic, StudyOutcome, StudyService, VcsError,
    VcsResult, VersionControl,
};

const JOURNAL: &str = "\
## 2025-06-01
Topics:
- Learning Django REST
- Kubernetes CI/CD pipeline
- something unrelated

Notes:
- review later

## 2025-06-02
Notes:
- rest day
";

#[derive(Default)]
struct RecordingVcs {
    messages: RefCell<Vec<String>>,
    fail: bool,
}

impl VersionControl for RecordingVcs {
    fn commit_all(&self, message: &str) -> VcsResult<()> {
        self.messages.borrow_mut().push(message.to_string());
        if self.fail {
            return Err(VcsError::Spawn {
                command: "git add -A".to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "git not installed"),
            });
        }
        Ok(())
    }
}

fn setup() -> (tempfile::TempDir, KbConfig) {
    let dir = tempfile::tempdir().unwrap();
    let config = KbConfig::with_root(dir.path().join("knowledge"));
    (dir, config)
}

fn june_first() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, 1)
}

#[test]
fn routes_materializes_and_commits_each_topic() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs);

    let outcome = service.process_journal_date(JOURNAL, june_first()).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };

    let paths: Vec<_> = report
        .topics
        .iter()
        .map(|studied| studied.topic.path.strip_prefix(&config.root).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        paths,
        vec![
            std::path::Path::new("swe/backend/learning-django-rest").to_path_buf(),
            std::path::Path::new("swe/devops/kubernetes-ci-cd-pipeline").to_path_buf(),
            std::path::Path::new("swe/misc/something-unrelated").to_path_buf(),
        ]
    );
    assert!(config
        .root
        .join("swe/devops/kubernetes-ci-cd-pipeline/examples/main.sh")
        .is_file());
    assert!(config.root.join("ai/llms/prompting/.gitkeep").is_file());
    assert_eq!(report.notes, vec!["review later"]);
    assert_eq!(report.commit, CommitOutcome::Committed);
    assert_eq!(
        vcs.messages.borrow().as_slice(),
        [commit_message("2025-06-01")]
    );
    assert_eq!(commit_message("2025-06-01"), "study: 2025-06-01 topics");
}

#[test]
fn section_without_topics_is_nothing_to_do() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs);

    let outcome = service
        .process_journal_date(JOURNAL, NaiveDate::from_ymd_opt(2025, 6, 2))
        .unwrap();
    assert_eq!(
        outcome,
        StudyOutcome::NothingToDo {
            date: "2025-06-02".to_string()
        }
    );
    assert!(!config.root.exists());
    assert!(vcs.messages.borrow().is_empty());
}

#[test]
fn commit_failure_is_reported_not_fatal() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs {
        fail: true,
        ..RecordingVcs::default()
    };
    let service = StudyService::new(&config, &vcs);

    let outcome = service.process_journal_date(JOURNAL, june_first()).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    assert!(matches!(report.commit, CommitOutcome::Failed(ref reason) if reason.contains("git")));
    assert_eq!(report.topics.len(), 3);
}

#[test]
fn disabled_commit_skips_backend() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs).with_commit(false);

    let outcome = service.process_journal_date(JOURNAL, june_first()).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    assert_eq!(report.commit, CommitOutcome::Skipped);
    assert!(vcs.messages.borrow().is_empty());
}

#[test]
fn default_date_uses_pinned_today_and_readme_stamp() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let service = StudyService::new(&config, &vcs)
        .with_today(today)
        .with_commit(false);

    let outcome = service.process_journal_date(JOURNAL, None).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    let readme =
        std::fs::read_to_string(report.topics[0].topic.path.join("README.md")).unwrap();
    assert!(readme.contains("**Created:** 2025-06-01"));
}

#[test]
fn rerun_keeps_existing_topics() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs).with_commit(false);

    service.process_journal_date(JOURNAL, june_first()).unwrap();
    let StudyOutcome::Processed(second) =
        service.process_journal_date(JOURNAL, june_first()).unwrap()
    else {
        panic!("expected processed outcome");
    };
    assert!(second
        .topics
        .iter()
        .all(|studied| studied.topic.already_existed()));
}

#[test]
fn missing_journal_file_is_nothing_to_do() {
    let (dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs);

    let outcome = service
        .process_journal_file(&dir.path().join("journal/2025.md"), june_first())
        .unwrap();
    assert!(matches!(outcome, StudyOutcome::NothingToDo { .. }));
}

#[test]
fn journal_file_is_read_from_disk() {
    let (dir, config) = setup();
    let journal = dir.path().join("2025.md");
    std::fs::write(&journal, JOURNAL).unwrap();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs).with_commit(false);

    let outcome = service.process_journal_file(&journal, june_first()).unwrap();
    assert!(matches!(outcome, StudyOutcome::Processed(ref report) if report.topics.len() == 3));
}

#[test]
fn unsluggable_topic_is_skipped_and_run_continues() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs);
    let journal = "## 2025-06-01\nTopics:\n- 机器学习\n- ???\n- rust basics\n";

    let outcome = service.process_journal_date(journal, june_first()).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };

    assert_eq!(report.topics.len(), 1);
    assert!(config.root.join("swe/misc/rust-basics/README.md").is_file());
    let skipped_titles: Vec<_> = report
        .skipped
        .iter()
        .map(|skipped: &SkippedTopic| skipped.title.as_str())
        .collect();
    assert_eq!(skipped_titles, vec!["机器学习", "???"]);
    assert!(report.skipped[0].reason.contains("no letters or digits"));
    assert_eq!(report.commit, CommitOutcome::Committed);
    assert_eq!(vcs.messages.borrow().len(), 1);
}

#[test]
fn malformed_section_yields_fewer_topics_without_error() {
    let (_dir, config) = setup();
    let vcs = RecordingVcs::default();
    let service = StudyService::new(&config, &vcs).with_commit(false);
    let journal = "## 2025-06-01\nTopics:\n-\n- docker basics\nstray prose ends the list\n- not a topic\n";

    let outcome = service.process_journal_date(journal, june_first()).unwrap();
    let StudyOutcome::Processed(report) = outcome else {
        panic!("expected processed outcome");
    };
    let titles: Vec<_> = report.topics.iter().map(|studied| studied.title.as_str()).collect();
    assert_eq!(titles, vec!["docker basics"]);
    assert!(report.skipped.is_empty());
}
