//! Random walks that never reuse an edge.
//!
//! The walk is a state machine driven one step at a time, so the caller
//! decides the pacing (prompting a user, writing progress to disk, or just
//! looping). Each successful step consumes an unused edge, so a walk makes
//! at most |E| moves and ends within |E| + 1 calls to [`RandomWalk::step`].

use crate::error::GraphError;
use crate::graph::{EdgeId, NodeId, WordGraph};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Why a walk ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum WalkEnd {
    /// The current word has no outgoing edges.
    DeadEnd { at: String },
    /// The chosen edge was already taken earlier in this walk.
    CycleDetected { from: String, to: String },
    /// The caller stopped the walk.
    Stopped,
}

impl fmt::Display for WalkEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkEnd::DeadEnd { at } => write!(f, "No outgoing edges from {}. Walk ends.", at),
            WalkEnd::CycleDetected { from, to } => {
                write!(f, "Edge ({}, {}) already visited. Walk ends.", from, to)
            }
            WalkEnd::Stopped => write!(f, "Walk stopped."),
        }
    }
}

/// Result of a single [`RandomWalk::step`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Moved { from: String, to: String },
    Ended(WalkEnd),
}

/// A random walk in progress over a borrowed graph.
pub struct RandomWalk<'g, R> {
    graph: &'g WordGraph,
    rng: R,
    current: NodeId,
    path: Vec<NodeId>,
    visited: HashSet<EdgeId>,
    end: Option<WalkEnd>,
}

impl<'g, R: Rng> RandomWalk<'g, R> {
    /// Starts a walk at a uniformly random word.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptyGraph`] if the graph has no words.
    pub fn start(graph: &'g WordGraph, mut rng: R) -> Result<Self, GraphError> {
        let nodes: Vec<NodeId> = graph.node_indexes().collect();
        let &current = nodes.choose(&mut rng).ok_or(GraphError::EmptyGraph)?;

        debug!("Random walk starts at {}", graph.word(current).unwrap_or_default());

        Ok(Self {
            graph,
            rng,
            current,
            path: vec![current],
            visited: HashSet::new(),
            end: None,
        })
    }

    /// Advances one edge, or ends the walk.
    ///
    /// Stepping a finished walk changes nothing and returns its end again.
    pub fn step(&mut self) -> Step {
        if let Some(end) = &self.end {
            return Step::Ended(end.clone());
        }

        let successors = self.graph.successors(self.current);
        let Some(&chosen) = successors.choose(&mut self.rng) else {
            return self.finish(WalkEnd::DeadEnd {
                at: self.word_at(self.current),
            });
        };

        let from = self.word_at(self.current);
        let to = self.word_at(chosen.node);

        if !self.visited.insert(chosen.edge) {
            return self.finish(WalkEnd::CycleDetected { from, to });
        }

        self.path.push(chosen.node);
        self.current = chosen.node;
        Step::Moved { from, to }
    }

    /// Ends the walk on the caller's request. No-op if already finished.
    pub fn stop(&mut self) {
        if self.end.is_none() {
            self.finish(WalkEnd::Stopped);
        }
    }

    /// Steps until the walk ends on its own.
    pub fn run_to_end(&mut self) -> WalkEnd {
        loop {
            if let Step::Ended(end) = self.step() {
                return end;
            }
        }
    }

    fn finish(&mut self, end: WalkEnd) -> Step {
        debug!("Random walk ended after {} moves: {}", self.moves(), end);
        self.end = Some(end.clone());
        Step::Ended(end)
    }

    fn word_at(&self, index: NodeId) -> String {
        self.graph.word(index).unwrap_or_default().to_string()
    }
}

impl<R> RandomWalk<'_, R> {
    /// Words visited so far, starting word first.
    pub fn path(&self) -> Vec<&str> {
        self.path
            .iter()
            .filter_map(|&idx| self.graph.word(idx))
            .collect()
    }

    /// The path joined by `" -> "`.
    pub fn path_string(&self) -> String {
        self.path().join(" -> ")
    }

    /// The word the walk currently sits on.
    pub fn current(&self) -> &str {
        self.graph.word(self.current).unwrap_or_default()
    }

    /// Number of edges followed.
    pub fn moves(&self) -> usize {
        self.path.len() - 1
    }

    pub fn end(&self) -> Option<&WalkEnd> {
        self.end.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.end.is_some()
    }
}
