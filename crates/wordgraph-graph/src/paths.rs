//! Weighted shortest paths.
//!
//! Dijkstra over edge weights, written out by hand because the pairwise
//! query needs every predecessor that achieves a node's minimal distance,
//! which `petgraph::algo::dijkstra` does not keep.
//!
//! The frontier is a min-heap keyed on `(distance, NodeIndex)`, so equal
//! distances settle in first-seen word order and results are stable for a
//! given corpus.

use crate::error::GraphError;
use crate::graph::{NodeId, WordGraph};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;
use wordgraph_core::normalize_word;

/// Shortest route from the query source to one reachable word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath {
    pub target: String,
    pub distance: u64,
    /// Words from source to target, both included.
    pub path: Vec<String>,
}

impl ShortestPath {
    /// The path joined by `" -> "`.
    pub fn path_string(&self) -> String {
        self.path.join(" -> ")
    }
}

/// Every minimal-weight path between two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathSet {
    pub source: String,
    pub target: String,
    pub distance: u64,
    pub paths: Vec<Vec<String>>,
}

impl PathSet {
    /// Each path joined by `" -> "`.
    pub fn path_strings(&self) -> Vec<String> {
        self.paths.iter().map(|p| p.join(" -> ")).collect()
    }
}

/// Distances and predecessors from one Dijkstra run.
struct DijkstraRun {
    distance: Vec<Option<u64>>,
    /// Predecessors achieving the minimal distance, in settle order.
    predecessors: Vec<Vec<NodeId>>,
    /// Nodes in the order they were settled.
    settled: Vec<NodeId>,
}

impl WordGraph {
    fn require(&self, word: &str) -> Result<NodeId, GraphError> {
        self.get_index(word)
            .ok_or_else(|| GraphError::NodeNotFound(word.to_string()))
    }

    /// Runs Dijkstra from `source`, stopping early once `stop_at` settles.
    ///
    /// With `keep_ties` every equal-distance predecessor is kept; otherwise
    /// only the first one found.
    fn dijkstra(
        &self,
        source: NodeId,
        stop_at: Option<NodeId>,
        keep_ties: bool,
    ) -> DijkstraRun {
        let n = self.node_count();
        let mut distance: Vec<Option<u64>> = vec![None; n];
        let mut predecessors: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        let mut done = vec![false; n];
        let mut settled = Vec::new();
        let mut heap = BinaryHeap::new();

        distance[source.index()] = Some(0);
        heap.push(Reverse((0u64, source)));

        while let Some(Reverse((dist, node))) = heap.pop() {
            if done[node.index()] {
                continue;
            }
            done[node.index()] = true;
            settled.push(node);

            if Some(node) == stop_at {
                break;
            }

            for successor in self.successors(node) {
                let next = successor.node;
                if done[next.index()] {
                    continue;
                }
                let candidate = dist + u64::from(successor.weight);
                match distance[next.index()] {
                    Some(current) if candidate > current => {}
                    Some(current) if candidate == current => {
                        if keep_ties {
                            predecessors[next.index()].push(node);
                        }
                    }
                    _ => {
                        distance[next.index()] = Some(candidate);
                        predecessors[next.index()] = vec![node];
                        heap.push(Reverse((candidate, next)));
                    }
                }
            }
        }

        DijkstraRun {
            distance,
            predecessors,
            settled,
        }
    }

    /// Shortest paths from `source` to every reachable word.
    ///
    /// Entries come in settle order, so the source itself is first with
    /// distance 0. Unreachable words are left out.
    pub fn shortest_paths_from(&self, source: &str) -> Result<Vec<ShortestPath>, GraphError> {
        let source = normalize_word(source);
        let start = self.require(&source)?;
        let run = self.dijkstra(start, None, false);

        let result: Vec<ShortestPath> = run
            .settled
            .iter()
            .filter_map(|&node| {
                let distance = run.distance[node.index()]?;
                let mut path = vec![node];
                let mut current = node;
                while let Some(&prev) = run.predecessors[current.index()].first() {
                    path.push(prev);
                    current = prev;
                }
                path.reverse();

                Some(ShortestPath {
                    target: self.word(node)?.to_string(),
                    distance,
                    path: self.words_of(&path),
                })
            })
            .collect();

        debug!("{} words reachable from {}", result.len(), source);
        Ok(result)
    }

    /// All minimal-weight paths from `source` to `target`.
    ///
    /// # Errors
    ///
    /// [`GraphError::NodeNotFound`] for an unknown word (source checked
    /// first), [`GraphError::NoPath`] when `target` is unreachable.
    pub fn shortest_paths_between(
        &self,
        source: &str,
        target: &str,
    ) -> Result<PathSet, GraphError> {
        let source = normalize_word(source);
        let target = normalize_word(target);
        let start = self.require(&source)?;
        let end = self.require(&target)?;

        if start == end {
            return Ok(PathSet {
                paths: vec![vec![source.clone()]],
                source,
                target,
                distance: 0,
            });
        }

        let run = self.dijkstra(start, Some(end), true);
        let Some(distance) = run.distance[end.index()] else {
            return Err(GraphError::NoPath {
                from: source,
                to: target,
            });
        };

        let paths = collect_paths(&run.predecessors, start, end);
        let paths: Vec<Vec<String>> = paths.iter().map(|p| self.words_of(p)).collect();

        debug!(
            "{} shortest path(s) from {} to {} of length {}",
            paths.len(),
            source,
            target,
            distance
        );

        Ok(PathSet {
            source,
            target,
            distance,
            paths,
        })
    }

    fn words_of(&self, nodes: &[NodeId]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|&idx| self.word(idx).map(str::to_string))
            .collect()
    }
}

/// Expands the predecessor DAG backwards from `end` into every path
/// that starts at `start`, in predecessor order.
///
/// Each frame on the stack is a node of the partial path (target first)
/// plus the index of the next predecessor to try. Edge weights are at
/// least 1, so the DAG is acyclic and the stack never exceeds the number
/// of nodes.
fn collect_paths(
    predecessors: &[Vec<NodeId>],
    start: NodeId,
    end: NodeId,
) -> Vec<Vec<NodeId>> {
    let mut out = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = vec![(end, 0)];

    while let Some(frame) = stack.last_mut() {
        let (node, next) = *frame;
        if node == start {
            out.push(stack.iter().rev().map(|&(n, _)| n).collect());
            stack.pop();
            continue;
        }
        match predecessors[node.index()].get(next) {
            Some(&prev) => {
                frame.1 += 1;
                stack.push((prev, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    out
}
