#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use trivia_core::{QuestionBank, RESULTS_PER_PAGE};

/// Question set shipped with the app, used when no file is given
const SAMPLE_QUESTIONS: &str = include_str!("../assets/questions.json");

/// Questions the app starts with, set from command line
static INITIAL_BANK: OnceLock<QuestionBank> = OnceLock::new();

/// Questions per page, set from command line
static PAGE_SIZE: OnceLock<usize> = OnceLock::new();

/// Get the starting question bank (empty if never set)
pub fn initial_bank() -> QuestionBank {
    INITIAL_BANK.get().cloned().unwrap_or_default()
}

/// Get the page size (set from command line or default)
pub fn page_size() -> usize {
    PAGE_SIZE.get().copied().unwrap_or(RESULTS_PER_PAGE)
}

/// Trivia Card - browse, rate and prune trivia questions
#[derive(Parser, Debug)]
#[command(name = "trivia-desktop")]
#[command(about = "Trivia Card - browse, rate and prune trivia questions")]
struct Args {
    /// JSON file with the question set (defaults to the bundled sample)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Questions shown per page
    #[arg(short, long, default_value_t = RESULTS_PER_PAGE)]
    page_size: usize,

    /// Tracing filter, overridden by RUST_LOG
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Directory holding category icons and delete.png
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,
}

fn setup_logging(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Load questions from a file, or the bundled sample when no path is given
fn load_bank(path: Option<&Path>) -> anyhow::Result<QuestionBank> {
    match path {
        Some(path) => QuestionBank::load(path)
            .with_context(|| format!("Failed to load questions from {}", path.display())),
        None => QuestionBank::from_json_str(SAMPLE_QUESTIONS)
            .context("Bundled question set is invalid"),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(&args.log_level);

    anyhow::ensure!(args.page_size > 0, "--page-size must be at least 1");

    let bank = load_bank(args.questions.as_deref())?;
    tracing::info!(
        "Starting with {} questions in {} categories, assets from {:?}",
        bank.len(),
        bank.categories().len(),
        args.assets_dir
    );

    let _ = INITIAL_BANK.set(bank);
    let _ = PAGE_SIZE.set(args.page_size);

    // Configure desktop window
    let config = Config::new()
        .with_resource_directory(args.assets_dir)
        .with_window(
            WindowBuilder::new()
                .with_title("Trivia Card")
                .with_inner_size(dioxus::desktop::LogicalSize::new(720.0, 900.0))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_sample_loads() {
        let bank = load_bank(None).unwrap();
        assert!(!bank.is_empty());
        assert!(bank.categories().len() > 1);
    }

    #[test]
    fn loads_question_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.json");
        std::fs::write(
            &path,
            r#"[{"id": 1, "question": "Q?", "answer": "A", "category": "Art", "difficulty": 1}]"#,
        )
        .unwrap();

        let bank = load_bank(Some(&path)).unwrap();
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_bank(Some(Path::new("/nonexistent/questions.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/questions.json"));
    }

    #[test]
    fn args_defaults() {
        let args = Args::parse_from(["trivia-desktop"]);
        assert_eq!(args.page_size, RESULTS_PER_PAGE);
        assert_eq!(args.log_level, "info");
        assert_eq!(args.assets_dir, PathBuf::from("assets"));
        assert!(args.questions.is_none());
    }

    #[test]
    fn args_overrides() {
        let args = Args::parse_from([
            "trivia-desktop",
            "--questions",
            "bank.json",
            "--page-size",
            "4",
        ]);
        assert_eq!(args.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(args.page_size, 4);
    }
}
