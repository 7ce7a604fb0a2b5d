//! gemini-commit - CLI entry point.

use std::io::{self, Stderr, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gemini_commit::config::ConfigStore;
use gemini_commit::git::{SystemGit, check_git_installed};
use gemini_commit::llm::{GeminiClient, MessageGenerator};
use gemini_commit::workflow::{CommitOptions, TerminalPrompter, Workflow, run_setup};

/// Write conventional commit messages with Gemini.
#[derive(Parser, Debug)]
#[command(name = "gemini-commit")]
#[command(about = "AI commit tool: conventional commit messages from your git changes")]
#[command(version)]
struct Cli {
    /// Path to the configuration file (default: ~/gemini-commit-config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Setup Gemini API key and configuration
    Setup,

    /// Create a conventional commit based on staged changes
    Commit {
        /// Dry run - print the generated message without committing
        #[arg(short, long)]
        dry_run: bool,

        /// Stage all changes without asking when nothing is staged
        #[arg(short = 'a', long)]
        all: bool,
    },

    /// Analyze a specific commit by SHA
    Analyze {
        /// The SHA of the commit to analyze
        #[arg(value_name = "COMMIT_SHA")]
        commit_sha: String,
    },

    /// Fix the last commit message with conventional format
    Fix {
        /// Dry run - show the amended commit message without amending
        #[arg(short, long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = match cli.config {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::default_location().context("Cannot locate the configuration file")?,
    };

    let outcome = match cli.command {
        Command::Setup => {
            run_setup(&store, &TerminalPrompter, &mut io::stdout()).context("Setup failed")?
        }
        Command::Commit { dry_run, all } => {
            workflow(&store)?
                .commit(CommitOptions {
                    dry_run,
                    stage_all: all,
                })
                .await?
        }
        Command::Analyze { commit_sha } => workflow(&store)?.analyze(&commit_sha).await?,
        Command::Fix { dry_run } => workflow(&store)?.fix(dry_run).await?,
    };
    tracing::debug!("Finished: {:?}", outcome);

    Ok(())
}

type CliWorkflow = Workflow<SystemGit, GeminiClient, TerminalPrompter, Stdout, Stderr>;

/// Workflow over the repository in the current directory.
fn workflow(store: &ConfigStore) -> Result<CliWorkflow> {
    if let Err(e) = check_git_installed() {
        eprintln!("Warning: {}. Repository context will be empty.", e);
    }

    // The config is read exactly once, here, and injected from then on.
    let generator = MessageGenerator::connect(store)
        .context("A valid configuration is required. Run `gemini-commit setup`.")?;

    Ok(Workflow::new(
        SystemGit::new(),
        generator,
        TerminalPrompter,
        io::stdout(),
        io::stderr(),
    ))
}

/// Log to stderr. `RUST_LOG` wins; otherwise errors only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "gemini_commit=debug"
    } else {
        "error"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
