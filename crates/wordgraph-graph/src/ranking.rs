//! PageRank scoring over weighted edges.
//!
//! Each node passes its rank to its successors in proportion to edge
//! weight. Dangling nodes (no outgoing edges) spread their rank evenly
//! over the whole graph, so the scores always sum to one.

use crate::graph::WordGraph;
use std::collections::HashMap;
use tracing::{debug, warn};
use wordgraph_core::{normalize_word, Config};

/// Parameters for the power iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankConfig {
    /// Probability of following an edge rather than teleporting.
    pub damping: f64,
    pub max_iterations: usize,
    /// Iteration stops once the L1 change drops below `tolerance * N`.
    pub tolerance: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

impl From<&Config> for RankConfig {
    fn from(config: &Config) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            tolerance: config.tolerance,
        }
    }
}

/// PageRank score for every word in the graph.
#[derive(Debug, Clone, Default)]
pub struct PageRankScores {
    /// Words in first-seen order, parallel to `scores`.
    words: Vec<String>,
    scores: Vec<f64>,
    index: HashMap<String, usize>,
    iterations: usize,
    converged: bool,
}

impl PageRankScores {
    /// Rank of a word, or exactly 0.0 if it is not in the graph.
    pub fn get(&self, word: &str) -> f64 {
        self.index
            .get(&normalize_word(word))
            .map(|&i| self.scores[i])
            .unwrap_or(0.0)
    }

    /// All words, highest rank first. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<(&str, f64)> = self
            .words
            .iter()
            .map(String::as_str)
            .zip(self.scores.iter().copied())
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    /// Sum of all scores; ≈1.0 for a non-empty graph.
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of power iterations performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the tolerance was reached before the iteration cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn into_map(self) -> HashMap<String, f64> {
        self.words.into_iter().zip(self.scores).collect()
    }
}

/// Computes PageRank for every word by power iteration.
pub fn compute_page_rank(graph: &WordGraph, config: &RankConfig) -> PageRankScores {
    let n = graph.node_count();
    if n == 0 {
        return PageRankScores::default();
    }

    let nf = n as f64;
    let damping = config.damping;

    // (target, weight / out_weight) per source
    let transitions: Vec<Vec<(usize, f64)>> = graph
        .node_indexes()
        .map(|index| {
            let total = graph.out_weight(index) as f64;
            graph
                .successors(index)
                .into_iter()
                .map(|s| (s.node.index(), f64::from(s.weight) / total))
                .collect()
        })
        .collect();

    let mut rank = vec![1.0 / nf; n];
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        iterations += 1;

        let dangling: f64 = transitions
            .iter()
            .zip(&rank)
            .filter(|(out, _)| out.is_empty())
            .map(|(_, r)| r)
            .sum();

        let base = (1.0 - damping) / nf + damping * dangling / nf;
        let mut next = vec![base; n];
        for (source, out) in transitions.iter().enumerate() {
            for &(target, share) in out {
                next[target] += damping * rank[source] * share;
            }
        }

        let change: f64 = next.iter().zip(&rank).map(|(a, b)| (a - b).abs()).sum();
        rank = next;

        if change < nf * config.tolerance {
            converged = true;
            break;
        }
    }

    if converged {
        debug!("PageRank converged after {} iterations", iterations);
    } else {
        warn!(
            "PageRank did not converge within {} iterations",
            config.max_iterations
        );
    }

    let words: Vec<String> = graph.words().map(str::to_string).collect();
    let index = words
        .iter()
        .enumerate()
        .map(|(i, w)| (w.clone(), i))
        .collect();

    PageRankScores {
        words,
        scores: rank,
        index,
        iterations,
        converged,
    }
}
