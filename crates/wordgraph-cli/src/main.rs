//! Wordgraph CLI - Command-line interface for Wordgraph
//!
//! Builds a word graph from a text file and runs one analysis on it:
//! adjacency listing, bridge words, text generation, shortest paths,
//! PageRank or a random walk.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordgraph_core::Config;

mod commands;

#[derive(Parser)]
#[command(name = "wordgraph")]
#[command(author = "Wordgraph Contributors")]
#[command(version)]
#[command(about = "Word adjacency graphs from plain text", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./wordgraph.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for random choices (overrides the config)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default wordgraph.json
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Print the graph as an adjacency list
    Show {
        /// Corpus text file
        corpus: PathBuf,

        /// Also write the graph as JSON for rendering
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// Find bridge words between two words
    Bridge {
        corpus: PathBuf,
        word1: String,
        word2: String,
    },

    /// Insert bridge words into new text
    Generate {
        corpus: PathBuf,

        /// Text to extend
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Shortest paths from one word, or all shortest paths between two
    Path {
        corpus: PathBuf,
        from: String,
        to: Option<String>,

        /// Write the graph and highlighted paths as JSON
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// PageRank of a word
    Rank {
        corpus: PathBuf,
        word: String,

        /// Also list the N highest-ranked words
        #[arg(short, long)]
        top: Option<usize>,

        /// Damping factor (overrides the config)
        #[arg(long)]
        damping: Option<f64>,
    },

    /// Random walk that stops on a dead end or a reused edge
    Walk {
        corpus: PathBuf,

        /// File rewritten with the current path after each step
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Walk to the end without asking
        #[arg(long)]
        auto: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> commands::Result<()> {
    if let Commands::Init { path } = &cli.command {
        return commands::init(path);
    }

    let cwd = std::env::current_dir()?;
    let mut config = Config::discover(cli.config.as_deref(), &cwd)?;
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Show { corpus, export } => commands::show(&corpus, export.as_deref()),
        Commands::Bridge {
            corpus,
            word1,
            word2,
        } => commands::bridge(&corpus, &word1, &word2),
        Commands::Generate { corpus, text } => {
            commands::generate(&corpus, &text.join(" "), &config)
        }
        Commands::Path {
            corpus,
            from,
            to,
            export,
        } => commands::path(&corpus, &from, to.as_deref(), export.as_deref()),
        Commands::Rank {
            corpus,
            word,
            top,
            damping,
        } => {
            if let Some(damping) = damping {
                config.damping = damping;
                config.validate()?;
            }
            commands::rank(&corpus, &word, top, &config)
        }
        Commands::Walk {
            corpus,
            output,
            auto,
        } => {
            if let Some(output) = output {
                config.walk_output = output;
            }
            commands::walk(&corpus, auto, &config)
        }
    }
}
