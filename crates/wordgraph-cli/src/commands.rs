//! CLI command implementations.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;
use wordgraph_core::{load_corpus, Config, DEFAULT_CONFIG_FILE};
use wordgraph_graph::{
    compute_page_rank, GraphBuilder, GraphError, GraphExport, PathSet, RandomWalk, RankConfig,
    ShortestPath, Step, WalkEnd, WordGraph,
};

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a default config file.
pub fn init(path: &Path) -> Result<()> {
    let config_path = path.join(DEFAULT_CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(path)?;
    Config::default().save(&config_path)?;

    println!(
        "{} Wrote default config to {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}

/// Load a corpus and build its graph.
///
/// A failed load returns the error; no partial graph is produced.
fn build_graph(corpus: &Path) -> Result<WordGraph> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Reading {}...", corpus.display()));

    let tokens = load_corpus(corpus);
    spinner.finish_and_clear();

    let graph = GraphBuilder::from_tokens(&tokens?);
    info!(
        "Built graph with {} words and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

fn write_export(export: &GraphExport, path: &Path) -> Result<()> {
    fs::write(path, export.to_json()?)?;
    println!("{} Exported to {}", "✓".green(), path.display());
    Ok(())
}

/// Print the adjacency list.
pub fn show(corpus: &Path, export: Option<&Path>) -> Result<()> {
    let graph = build_graph(corpus)?;

    println!("Directed Graph (Adjacency List with weights):");
    for line in graph.adjacency_lines() {
        println!("{}", line);
    }

    if let Some(out_path) = export {
        write_export(&GraphExport::new(&graph), out_path)?;
    }
    Ok(())
}

/// Print the bridge words between two words.
pub fn bridge(corpus: &Path, word1: &str, word2: &str) -> Result<()> {
    let graph = build_graph(corpus)?;
    println!("{}", graph.bridge_words(word1, word2));
    Ok(())
}

/// Print `text` with bridge words inserted.
pub fn generate(corpus: &Path, text: &str, config: &Config) -> Result<()> {
    let graph = build_graph(corpus)?;
    let mut rng = make_rng(config.seed);
    println!("{}", graph.generate_text(text, &mut rng));
    Ok(())
}

/// Print shortest paths from `from`, or all shortest paths to `to`.
pub fn path(corpus: &Path, from: &str, to: Option<&str>, export: Option<&Path>) -> Result<()> {
    let graph = build_graph(corpus)?;

    let (lines, highlighted) = match to {
        None => match graph.shortest_paths_from(from) {
            Ok(entries) => (format_single_source(&entries), Vec::new()),
            Err(e) => (vec![e.to_string()], Vec::new()),
        },
        Some(to) => match graph.shortest_paths_between(from, to) {
            Ok(set) => (format_path_set(&set), set.paths),
            Err(e @ (GraphError::NodeNotFound(_) | GraphError::NoPath { .. })) => {
                (vec![e.to_string()], Vec::new())
            }
            Err(e) => return Err(e.into()),
        },
    };

    for line in lines {
        println!("{}", line);
    }

    if let Some(out_path) = export {
        write_export(&GraphExport::new(&graph).with_paths(highlighted), out_path)?;
    }
    Ok(())
}

/// Lines for a single-source query: every other reachable word,
/// alphabetically, then a closing summary.
fn format_single_source(entries: &[ShortestPath]) -> Vec<String> {
    let Some(source) = entries.first().map(|e| e.target.as_str()) else {
        return Vec::new();
    };

    let mut others: Vec<&ShortestPath> = entries.iter().skip(1).collect();
    others.sort_by(|a, b| a.target.cmp(&b.target));

    let mut lines: Vec<String> = others
        .iter()
        .map(|e| {
            format!(
                "{} -> {}: {} (length={})",
                source,
                e.target,
                e.path_string(),
                e.distance
            )
        })
        .collect();
    lines.push(format!("All shortest paths from {} shown above.", source));
    lines
}

fn format_path_set(set: &PathSet) -> Vec<String> {
    let mut lines = vec![format!(
        "All shortest paths from {} to {} (length = {}):",
        set.source, set.target, set.distance
    )];
    lines.extend(set.path_strings());
    lines.push(format!(
        "{} shortest path(s) found of length {}.",
        set.paths.len(),
        set.distance
    ));
    lines
}

/// Print the PageRank of a word.
pub fn rank(corpus: &Path, word: &str, top: Option<usize>, config: &Config) -> Result<()> {
    let graph = build_graph(corpus)?;
    let scores = compute_page_rank(&graph, &RankConfig::from(config));

    println!("PageRank of '{}' is {:.4}", word, scores.get(word));

    if let Some(n) = top {
        println!("\nTop {} words:", n);
        for (i, (name, score)) in scores.ranked().into_iter().take(n).enumerate() {
            println!("  {:>3}. {} {}", i + 1, name.cyan(), format!("{:.4}", score).dimmed());
        }
    }
    Ok(())
}

/// Rewrites the walk file with the current path.
struct WalkRecorder {
    path: PathBuf,
}

impl WalkRecorder {
    fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn record<R>(&self, walk: &RandomWalk<'_, R>) -> io::Result<()> {
        fs::write(&self.path, walk.path_string())
    }
}

/// Run a random walk, asking before each further step unless `auto`.
pub fn walk(corpus: &Path, auto: bool, config: &Config) -> Result<()> {
    let graph = build_graph(corpus)?;
    let mut walk = match RandomWalk::start(&graph, make_rng(config.seed)) {
        Ok(walk) => walk,
        Err(e @ GraphError::EmptyGraph) => {
            println!("{}", e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let recorder = WalkRecorder::new(&config.walk_output);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    writeln!(stdout, "Start from node: {}", walk.current())?;
    let prompt = if auto { None } else { Some(&mut input) };
    drive_walk(&mut walk, &recorder, prompt, &mut stdout)?;

    println!("Random walk finished.");
    println!("Random walk result: {}", walk.path_string());
    println!(
        "{} Path written to {}",
        "✓".green(),
        config.walk_output.display()
    );
    Ok(())
}

/// Steps the walk to its end, recording the path after every step.
///
/// With `input`, the user is asked after each move whether to go on.
fn drive_walk<R: Rng, B: BufRead, W: Write>(
    walk: &mut RandomWalk<'_, R>,
    recorder: &WalkRecorder,
    mut input: Option<&mut B>,
    out: &mut W,
) -> Result<WalkEnd> {
    loop {
        let step = walk.step();
        recorder.record(walk)?;

        match step {
            Step::Moved { to, .. } => {
                writeln!(out, "Moved to: {}", to)?;
                writeln!(out, "Current path: {}", walk.path_string())?;
                if let Some(input) = input.as_deref_mut() {
                    if !ask_continue(input, out)? {
                        walk.stop();
                    }
                }
            }
            Step::Ended(end) => {
                writeln!(out, "{}", end)?;
                return Ok(end);
            }
        }
    }
}

/// Prompts until the user answers y or n. End of input counts as n.
fn ask_continue<B: BufRead, W: Write>(input: &mut B, out: &mut W) -> io::Result<bool> {
    write!(out, "Continue walking? (y/n): ")?;
    loop {
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        match line.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => write!(out, "Please enter 'y' or 'n': ")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempdir().unwrap();
        init(dir.path()).unwrap();

        let config = Config::load(&dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_build_graph_missing_file_fails() {
        let dir = tempdir().unwrap();
        assert!(build_graph(&dir.path().join("absent.txt")).is_err());
    }

    #[test]
    fn test_format_single_source() {
        let graph = GraphBuilder::from_text("a c b a b");
        let entries = graph.shortest_paths_from("a").unwrap();

        assert_eq!(
            format_single_source(&entries),
            vec![
                "a -> b: a -> b (length=1)",
                "a -> c: a -> c (length=1)",
                "All shortest paths from a shown above.",
            ]
        );
    }

    #[test]
    fn test_format_path_set() {
        let graph = GraphBuilder::from_text("a b d x a c d");
        let set = graph.shortest_paths_between("a", "d").unwrap();

        assert_eq!(
            format_path_set(&set),
            vec![
                "All shortest paths from a to d (length = 2):",
                "a -> b -> d",
                "a -> c -> d",
                "2 shortest path(s) found of length 2.",
            ]
        );
    }

    #[test]
    fn test_auto_walk_records_final_path() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("walk.txt");
        let graph = GraphBuilder::from_text("one two three");
        let mut walk = RandomWalk::start(&graph, make_rng(Some(5))).unwrap();
        let mut out = Vec::new();

        let end = drive_walk::<_, Cursor<&[u8]>, _>(
            &mut walk,
            &WalkRecorder::new(&out_path),
            None,
            &mut out,
        )
        .unwrap();

        assert_eq!(
            end,
            WalkEnd::DeadEnd {
                at: "three".into()
            }
        );
        assert_eq!(fs::read_to_string(&out_path).unwrap(), walk.path_string());
        assert!(walk.path_string().ends_with("three"));
    }

    #[test]
    fn test_answer_n_stops_after_one_move() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("walk.txt");
        let graph = GraphBuilder::from_text("ping pong ping");
        let mut walk = RandomWalk::start(&graph, make_rng(Some(1))).unwrap();
        let mut input = Cursor::new("maybe\nn\n".as_bytes());
        let mut out = Vec::new();

        let end = drive_walk(
            &mut walk,
            &WalkRecorder::new(&out_path),
            Some(&mut input),
            &mut out,
        )
        .unwrap();

        assert_eq!(end, WalkEnd::Stopped);
        assert_eq!(walk.moves(), 1);
        assert_eq!(fs::read_to_string(&out_path).unwrap(), walk.path_string());

        let transcript = String::from_utf8(out).unwrap();
        assert!(transcript.contains("Please enter 'y' or 'n': "));
        assert!(transcript.contains("Walk stopped."));
    }

    #[test]
    fn test_end_of_input_counts_as_no() {
        let mut input = Cursor::new(&b""[..]);
        let mut out = Vec::new();
        assert!(!ask_continue(&mut input, &mut out).unwrap());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a: u64 = make_rng(Some(3)).gen();
        let b: u64 = make_rng(Some(3)).gen();
        assert_eq!(a, b);
    }
}
