//! `studykb` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration from file and flags, then bootstrap logging.
//! - Dispatch subcommands to core services and print user-facing results.
//!
//! # Invariants
//! - "Nothing to do" and failed commits exit with status 0.
//! - Only config, logging, or filesystem errors exit non-zero.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use log::error;
use studykb_core::{
    classify, init_logging, parse_section, section_dates, CommitOutcome, GitCli, IndexService,
    KbConfig, LogTarget, ScaffoldService, StudyOutcome, StudyService, TopicService,
};

use crate::cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_exit module=cli status=error error={message}");
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;
    init_logging(
        config.log_level.as_str(),
        LogTarget::from_dir(config.log_dir.as_deref()),
    )?;

    match cli.command {
        Command::Bootstrap => {
            ScaffoldService::new(&config)
                .ensure_tree()
                .map_err(|e| e.to_string())?;
            println!("Bootstrapped under {}/", config.root.display());
        }
        Command::Add {
            area,
            group,
            topic,
            lang,
        } => {
            ScaffoldService::new(&config)
                .ensure_tree()
                .map_err(|e| e.to_string())?;
            let language = lang.unwrap_or_else(|| config.default_language.clone());
            let added = TopicService::new(&config)
                .materialize(area.as_str(), &group, &topic, &language)
                .map_err(|e| e.to_string())?;
            if added.already_existed() {
                println!("Topic already exists: {}", added.path.display());
            } else {
                println!("Added topic: {}", added.path.display());
            }
        }
        Command::BuildIndex => {
            let summary = IndexService::new(&config)
                .build_index()
                .map_err(|e| e.to_string())?;
            println!(
                "{} updated ({} topics)",
                summary.path.display(),
                summary.topics
            );
        }
        Command::Study {
            journal,
            date,
            no_commit,
        } => run_study(&config, &journal, date, no_commit)?,
        Command::Route { topic } => {
            let matched = classify(&topic);
            let reason = matched
                .keyword
                .map(|keyword| format!("keyword `{keyword}`"))
                .unwrap_or_else(|| "fallback".to_string());
            println!("{} <- {}", matched.route, reason);
        }
        Command::Journal {
            journal,
            date,
            json,
        } => show_journal(&journal, date, json)?,
    }
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<KbConfig, String> {
    let mut config = KbConfig::load(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if let Some(root) = cli.root.as_ref() {
        config.root = root.clone();
    }
    if let Some(level) = cli.log_level.as_ref() {
        config.log_level = level.clone();
    }
    if let Some(dir) = cli.log_dir.as_ref() {
        config.log_dir = Some(dir.clone());
    }
    config.validate().map_err(|e| e.to_string())?;
    Ok(config)
}

fn run_study(
    config: &KbConfig,
    journal: &Path,
    date: Option<NaiveDate>,
    no_commit: bool,
) -> Result<(), String> {
    let vcs = GitCli::new(config.repo_dir.clone());
    let service = StudyService::new(config, vcs).with_commit(config.auto_commit && !no_commit);
    let outcome = service
        .process_journal_file(journal, date)
        .map_err(|e| e.to_string())?;

    match outcome {
        StudyOutcome::NothingToDo { date } => {
            println!("No topics found for {date}. Add a 'Topics:' list under '## {date}'.");
        }
        StudyOutcome::Processed(report) => {
            for studied in &report.topics {
                let verb = if studied.topic.already_existed() {
                    "Kept"
                } else {
                    "Added"
                };
                println!(
                    "{verb} topic: {} [{}]",
                    studied.topic.path.display(),
                    studied.route
                );
            }
            for skipped in &report.skipped {
                println!("Skipped topic: {} ({})", skipped.title, skipped.reason);
            }
            match report.commit {
                CommitOutcome::Committed => println!("Committed changes"),
                CommitOutcome::Skipped => {}
                CommitOutcome::Failed(_) => println!("Nothing to commit"),
            }
        }
    }
    Ok(())
}

fn show_journal(journal: &Path, date: Option<NaiveDate>, json: bool) -> Result<(), String> {
    let document = match std::fs::read_to_string(journal) {
        Ok(document) => document,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(err) => return Err(format!("read {}: {err}", journal.display())),
    };
    let entry = parse_section(&document, date);

    if json {
        let output = serde_json::json!({
            "entry": entry,
            "sections": section_dates(&document),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).map_err(|e| format!("json encode: {e}"))?
        );
        return Ok(());
    }

    println!("date={}", entry.date);
    for topic in &entry.topics {
        println!("topic={topic}");
    }
    for note in &entry.notes {
        println!("note={note}");
    }
    println!("sections={}", section_dates(&document).len());
    Ok(())
}
