//! Backtracking search for words traced through adjacent grid cells.
//!
//! A word is traceable when a simple path (no cell used twice) of king-move neighbours spells
//! it out. Every start cell is tried in row-major order and the first successful path wins.

use crate::grid::{Grid, Position};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// How the first character of a word relates to the start cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StartPolicy {
    /// The start cell must hold the first character; the rest is matched through neighbours.
    #[default]
    Strict,
    /// The start cell's own letter is never checked: the whole word, first character included,
    /// is matched against cells reached from the start. The start cell stays marked as used.
    Legacy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceOutcome {
    /// Matched cells, one per character of the word.
    Found(Vec<Position>),
    Missing,
    /// The node budget ran out before the search finished.
    BudgetExceeded,
}

impl TraceOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

enum Step {
    Found,
    DeadEnd,
    OutOfBudget,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathFinder {
    pub policy: StartPolicy,
    /// Maximum number of cells entered while searching one word.
    pub node_budget: Option<u64>,
}

impl PathFinder {
    pub fn new(policy: StartPolicy, node_budget: Option<u64>) -> Self {
        Self {
            policy,
            node_budget,
        }
    }

    pub fn is_traceable(&self, word: &str, grid: &Grid) -> bool {
        self.trace(word, grid).is_found()
    }

    /// Words shorter than two characters are never searched and come back `Missing`.
    pub fn trace(&self, word: &str, grid: &Grid) -> TraceOutcome {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() < 2 {
            return TraceOutcome::Missing;
        }

        let mut search = Search {
            grid,
            visited: vec![false; grid.cell_count()],
            path: Vec::with_capacity(chars.len()),
            nodes: 0,
            budget: self.node_budget,
        };

        for start in grid.positions() {
            let rest = match self.policy {
                StartPolicy::Strict => {
                    if grid.letter(start) != Some(chars[0]) {
                        continue;
                    }
                    search.path.push(start);
                    &chars[1..]
                }
                StartPolicy::Legacy => &chars[..],
            };

            let start_idx = grid.index(start);
            search.visited[start_idx] = true;
            let step = search.extend(rest, start);
            search.visited[start_idx] = false;

            match step {
                Step::Found => return TraceOutcome::Found(search.path),
                Step::OutOfBudget => return TraceOutcome::BudgetExceeded,
                Step::DeadEnd => search.path.clear(),
            }
        }

        TraceOutcome::Missing
    }
}

/// State for one word; the visited mask is undone on backtrack.
struct Search<'a> {
    grid: &'a Grid,
    visited: Vec<bool>,
    path: Vec<Position>,
    nodes: u64,
    budget: Option<u64>,
}

impl Search<'_> {
    fn extend(&mut self, rest: &[char], from: Position) -> Step {
        let Some((&wanted, tail)) = rest.split_first() else {
            return Step::Found;
        };

        let grid = self.grid;
        for next in grid.adjacent_positions(from) {
            let idx = grid.index(next);
            if self.visited[idx] || grid.letter(next) != Some(wanted) {
                continue;
            }

            self.nodes += 1;
            if self.budget.is_some_and(|limit| self.nodes > limit) {
                return Step::OutOfBudget;
            }

            self.visited[idx] = true;
            self.path.push(next);
            match self.extend(tail, next) {
                Step::DeadEnd => {}
                done => return done,
            }
            self.path.pop();
            self.visited[idx] = false;
        }

        Step::DeadEnd
    }
}
