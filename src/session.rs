//! Play-session state.
//!
//! Holds a puzzle pair plus the player's progress through it: the
//! current board, the moves played so far, and the best-known solution
//! recorded when the puzzle was generated or imported. Pure data and
//! transitions; rendering and input handling belong to the caller.

use crate::board::{Board, BoardError};
use crate::generator::GeneratedPuzzle;
use crate::import::{puzzle_id, ImportedPuzzle};
use crate::tile::Direction;

/// What an input layer can feed a session: a slide, or a redraw tick
/// that changes nothing. Keeping the tick in the same vocabulary lets a
/// UI queue redraws and slides together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerMove {
    Refresh,
    Slide(Direction),
}

/// A puzzle in play. The start, goal, and best-known solution never
/// change after construction.
#[derive(Debug, Clone)]
pub struct Session {
    start: Board,
    goal: Board,
    current: Board,
    played: Vec<Direction>,
    best: Vec<Direction>,
}

impl Session {
    pub fn new(puzzle: GeneratedPuzzle) -> Session {
        Session::from_parts(puzzle.start, puzzle.goal, puzzle.solution)
    }

    pub fn from_import(puzzle: ImportedPuzzle) -> Session {
        Session::from_parts(puzzle.start, puzzle.goal, puzzle.solution)
    }

    fn from_parts(start: Board, goal: Board, best: Vec<Direction>) -> Session {
        Session {
            current: start.clone(),
            start,
            goal,
            played: Vec::new(),
            best,
        }
    }

    /// Slide a tile. Rejected once the puzzle is solved and for any
    /// direction the board itself rejects; the session is untouched on
    /// rejection.
    pub fn play(&mut self, dir: Direction) -> Result<(), BoardError> {
        if self.is_solved() {
            return Err(BoardError::IllegalMove(dir));
        }
        self.current.apply(dir)?;
        self.played.push(dir);
        Ok(())
    }

    /// Feed one player input through; `Refresh` leaves the session as is.
    pub fn apply(&mut self, mv: PlayerMove) -> Result<(), BoardError> {
        match mv {
            PlayerMove::Refresh => Ok(()),
            PlayerMove::Slide(dir) => self.play(dir),
        }
    }

    /// Take back the most recent move, returning it; `None` when nothing
    /// has been played.
    pub fn undo(&mut self) -> Result<Option<Direction>, BoardError> {
        let dir = match self.played.last() {
            Some(dir) => *dir,
            None => return Ok(None),
        };
        self.current.undo(dir)?;
        self.played.pop();
        Ok(Some(dir))
    }

    /// Back to the start board with an empty played list.
    pub fn reset(&mut self) {
        self.current = self.start.clone();
        self.played.clear();
    }

    pub fn is_solved(&self) -> bool {
        self.current == self.goal
    }

    /// The ID a player can share to re-import this puzzle.
    pub fn puzzle_id(&self) -> String {
        puzzle_id(&self.start, &self.goal)
    }

    /// Difficulty: the length of the best-known solution.
    pub fn level(&self) -> usize {
        self.best.len()
    }

    pub fn played(&self) -> &[Direction] {
        &self.played
    }

    /// The recorded start-to-goal move list, replayable after a reset
    /// for an auto-solve.
    pub fn best_solution(&self) -> &[Direction] {
        &self.best
    }

    pub fn current(&self) -> &Board {
        &self.current
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::import_puzzle;

    // One-move puzzle: the triangle below the center slides north.
    fn one_move_puzzle() -> GeneratedPuzzle {
        let start = Board::decode(3, "241304132").unwrap();
        let mut goal = start.clone();
        goal.apply(Direction::North).unwrap();
        GeneratedPuzzle {
            start,
            goal,
            solution: vec![Direction::North],
            attempts: 1,
        }
    }

    #[test]
    fn test_play_to_solved() {
        let mut session = Session::new(one_move_puzzle());
        assert!(!session.is_solved());
        session.play(Direction::North).unwrap();
        assert!(session.is_solved());
        assert_eq!(session.played(), &[Direction::North]);
    }

    #[test]
    fn test_play_rejected_after_solved() {
        let mut session = Session::new(one_move_puzzle());
        session.play(Direction::North).unwrap();
        assert_eq!(
            session.play(Direction::South),
            Err(BoardError::IllegalMove(Direction::South))
        );
        assert_eq!(session.played(), &[Direction::North]);
    }

    #[test]
    fn test_illegal_play_keeps_state() {
        let mut session = Session::new(one_move_puzzle());
        assert_eq!(
            session.play(Direction::NorthEast),
            Err(BoardError::IllegalMove(Direction::NorthEast))
        );
        assert!(session.played().is_empty());
        assert_eq!(session.current(), session.start());
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut session = Session::new(one_move_puzzle());
        session.play(Direction::North).unwrap();
        assert_eq!(session.undo(), Ok(Some(Direction::North)));
        assert_eq!(session.current(), session.start());
        assert!(session.played().is_empty());
        assert_eq!(session.undo(), Ok(None));
    }

    #[test]
    fn test_reset_clears_progress() {
        let mut session = Session::new(one_move_puzzle());
        session.play(Direction::NorthWest).unwrap();
        session.play(Direction::East).unwrap();
        session.reset();
        assert_eq!(session.current(), session.start());
        assert!(session.played().is_empty());
        assert!(!session.is_solved());
    }

    #[test]
    fn test_refresh_is_a_noop() {
        let mut session = Session::new(one_move_puzzle());
        session.apply(PlayerMove::Refresh).unwrap();
        assert_eq!(session.current(), session.start());
        assert!(session.played().is_empty());

        session.apply(PlayerMove::Slide(Direction::North)).unwrap();
        assert!(session.is_solved());
    }

    #[test]
    fn test_replaying_best_solution_solves() {
        let mut session = Session::new(one_move_puzzle());
        for dir in session.best_solution().to_vec() {
            session.play(dir).unwrap();
        }
        assert!(session.is_solved());
        assert_eq!(session.played().len(), session.level());
    }

    #[test]
    fn test_session_metadata() {
        let session = Session::new(one_move_puzzle());
        assert_eq!(session.puzzle_id(), "241304132241334102");
        assert_eq!(session.level(), 1);
        assert_eq!(session.best_solution(), &[Direction::North]);
    }

    #[test]
    fn test_from_import() {
        let imported = import_puzzle("241304132241334102").unwrap();
        let mut session = Session::from_import(imported);
        assert_eq!(session.level(), 1);
        session.play(Direction::North).unwrap();
        assert!(session.is_solved());
    }
}
