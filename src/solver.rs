//! Breadth-first search over board states.
//!
//! One traversal serves two callers: targeted search finds a shortest
//! move sequence between two boards (or reports that none exists), and
//! exploration search walks outward from a scrambled board until a
//! requested depth, shuffling expansion order so repeated runs land on
//! different goal boards.

use std::collections::{HashSet, VecDeque};

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::board::{Board, BoardError};
use crate::tile::Direction;

/// One step along a search path. The first step of every path carries
/// the start board and no move.
#[derive(Debug, Clone)]
pub struct PathStep {
    pub board: Board,
    pub moved: Option<Direction>,
}

/// A non-empty sequence of boards connected by legal moves.
#[derive(Debug, Clone)]
pub struct SearchPath {
    steps: Vec<PathStep>,
}

impl SearchPath {
    fn seed(start: Board) -> SearchPath {
        SearchPath {
            steps: vec![PathStep {
                board: start,
                moved: None,
            }],
        }
    }

    fn extended(&self, board: Board, moved: Direction) -> SearchPath {
        let mut steps = self.steps.clone();
        steps.push(PathStep {
            board,
            moved: Some(moved),
        });
        SearchPath { steps }
    }

    /// Number of moves along the path (one less than the stored steps).
    pub fn len(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The board the path ends on.
    pub fn last(&self) -> &Board {
        &self.steps[self.steps.len() - 1].board
    }

    /// Moves in play order, without the start sentinel.
    pub fn moves(&self) -> impl Iterator<Item = Direction> + '_ {
        self.steps.iter().filter_map(|step| step.moved)
    }

    /// Every step, start sentinel included.
    pub fn steps(&self) -> &[PathStep] {
        &self.steps
    }
}

/// Result of a targeted search.
#[derive(Debug, Clone)]
pub struct SolveReport {
    /// Shortest path from start to goal, or `None` when the goal board
    /// is unreachable.
    pub path: Option<SearchPath>,
    /// States expanded before the search stopped.
    pub expanded: usize,
}

/// Result of an exploration search. The path may be shorter than the
/// requested depth when the expansion budget ran out or the reachable
/// component was exhausted first; callers check the length.
#[derive(Debug, Clone)]
pub struct Exploration {
    pub path: SearchPath,
    pub expanded: usize,
}

/// Find a shortest move sequence from `start` to `goal`.
///
/// Expansion follows the fixed [`Direction::ALL`] order, so repeated
/// calls return the same path. `start == goal` yields a zero-move path.
/// The search is unbounded; it ends when the goal is dequeued or the
/// reachable component is exhausted.
pub fn solve(start: &Board, goal: &Board) -> Result<SolveReport, BoardError> {
    let (path, expanded) = search(start, Some(goal), None, None)?;
    Ok(SolveReport { path, expanded })
}

/// Walk outward from `start` until a dequeued path reaches `max_depth`
/// moves, shuffling the expansion order with `rng` at every state.
///
/// Stops early once more than `max_depth * max_depth` states have been
/// expanded, returning the path expanded last; scramble generation
/// treats a short path as a failed attempt and reshuffles.
pub fn explore(
    start: &Board,
    max_depth: usize,
    rng: &mut dyn RngCore,
) -> Result<Exploration, BoardError> {
    let (path, expanded) = search(start, None, Some(max_depth), Some(rng))?;
    let path = path.unwrap_or_else(|| SearchPath::seed(start.clone()));
    Ok(Exploration { path, expanded })
}

/// The traversal behind both modes: FIFO queue of paths, a set of
/// expanded boards for deduplication, per-call state only.
fn search(
    start: &Board,
    goal: Option<&Board>,
    max_depth: Option<usize>,
    mut rng: Option<&mut dyn RngCore>,
) -> Result<(Option<SearchPath>, usize), BoardError> {
    let mut queue: VecDeque<SearchPath> = VecDeque::new();
    queue.push_back(SearchPath::seed(start.clone()));
    let mut visited: HashSet<Board> = HashSet::new();
    let mut expanded = 0usize;
    let mut last: Option<SearchPath> = None;

    while let Some(path) = queue.pop_front() {
        // Depth bound first: the earliest dequeued path of the requested
        // length is the scramble, whether or not its tail is fresh.
        if let Some(depth) = max_depth {
            if path.len() >= depth {
                return Ok((Some(path), expanded));
            }
        }

        if visited.contains(path.last()) {
            last = Some(path);
            continue;
        }
        visited.insert(path.last().clone());
        expanded += 1;

        if goal == Some(path.last()) {
            return Ok((Some(path), expanded));
        }

        let mut moves = path.last().legal_moves()?;
        if let Some(rng) = rng.as_deref_mut() {
            moves.shuffle(rng);
        }
        for dir in moves {
            let mut next = path.last().clone();
            next.apply(dir)?;
            if !visited.contains(&next) {
                queue.push_back(path.extended(next, dir));
            }
        }

        if let Some(depth) = max_depth {
            if expanded > depth * depth {
                return Ok((Some(path), expanded));
            }
        }
        last = Some(path);
    }

    // Queue exhausted: for a targeted search the goal is unreachable;
    // an exploration hands back whatever it dequeued last.
    let result = if goal.is_some() { None } else { last };
    Ok((result, expanded))
}
