//! Sliding-tile puzzle engine.
//!
//! A square board of typed tiles with a single empty cell; each tile
//! kind may only slide in certain directions. The crate provides the
//! board model, a breadth-first search that both generates solvable
//! scrambles and verifies imported puzzle pairs, the puzzle-ID text
//! codec, and a play session for interactive front ends to drive.

pub mod board;
pub mod generator;
pub mod import;
pub mod session;
pub mod solver;
pub mod tile;

// Re-export main types
pub use board::{canonical_tiles, max_level, Board, BoardError};
pub use generator::{GenerateError, GeneratedPuzzle, Generator, GeneratorConfig};
pub use import::{import_puzzle, puzzle_id, ImportError, ImportedPuzzle};
pub use session::{PlayerMove, Session};
pub use solver::{explore, solve, Exploration, PathStep, SearchPath, SolveReport};
pub use tile::{Direction, TileKind};
