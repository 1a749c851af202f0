//! Scramble generation.
//!
//! Shuffles the canonical tile multiset into a start board, then runs an
//! exploration search to the requested depth. A shuffle whose exploration
//! falls short (too few reachable states, or none at all) is thrown away
//! and the multiset reshuffled, up to a fixed attempt budget.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{canonical_tiles, max_level, Board, BoardError};
use crate::solver::explore;
use crate::tile::Direction;

/// Parameters for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Board side length, 3 or 4.
    pub size: usize,
    /// Requested scramble depth; the recorded solution is at least this
    /// many moves long.
    pub level: usize,
    /// How many shuffles to try before giving up.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            size: 4,
            level: 20,
            max_attempts: 256,
        }
    }
}

/// A freshly generated puzzle: scrambled start, reachable goal, and the
/// move sequence that connects them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub start: Board,
    pub goal: Board,
    /// Forward moves from start to goal; its length is the achieved level.
    pub solution: Vec<Direction>,
    /// Shuffles consumed, counting the successful one.
    pub attempts: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("level {level} is out of range 1..={max} for size {size}")]
    LevelOutOfRange {
        size: usize,
        level: usize,
        max: usize,
    },
    #[error("no level-{level} scramble found in {attempts} attempts")]
    Exhausted { level: usize, attempts: usize },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Puzzle generator owning its RNG, so a seeded run reproduces the same
/// sequence of puzzles.
pub struct Generator {
    rng: StdRng,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Generator {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Generator { rng }
    }

    /// Produce a puzzle whose best-known solution is at least
    /// `config.level` moves.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<GeneratedPuzzle, GenerateError> {
        let max = max_level(config.size)?;
        if config.level < 1 || config.level > max {
            return Err(GenerateError::LevelOutOfRange {
                size: config.size,
                level: config.level,
                max,
            });
        }

        let mut tiles = canonical_tiles(config.size)?;
        for attempt in 1..=config.max_attempts {
            tiles.shuffle(&mut self.rng);
            let start = Board::from_tiles(config.size, &tiles)?;
            let exploration = explore(&start, config.level, &mut self.rng)?;
            if exploration.path.len() >= config.level {
                return Ok(GeneratedPuzzle {
                    goal: exploration.path.last().clone(),
                    solution: exploration.path.moves().collect(),
                    start,
                    attempts: attempt,
                });
            }
        }
        Err(GenerateError::Exhausted {
            level: config.level,
            attempts: config.max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileKind;

    fn config(size: usize, level: usize) -> GeneratorConfig {
        GeneratorConfig {
            size,
            level,
            max_attempts: 256,
        }
    }

    #[test]
    fn test_generate_reaches_requested_level() {
        let mut generator = Generator::new(Some(42));
        let puzzle = generator.generate(&config(3, 1)).unwrap();
        assert_eq!(puzzle.solution.len(), 1);
        assert!(puzzle.attempts >= 1);
    }

    #[test]
    fn test_generated_solution_replays_to_goal() {
        let mut generator = Generator::new(Some(42));
        let puzzle = generator.generate(&config(3, 1)).unwrap();

        let mut board = puzzle.start.clone();
        for dir in &puzzle.solution {
            board.apply(*dir).unwrap();
        }
        assert_eq!(board, puzzle.goal);
        assert_ne!(puzzle.start, puzzle.goal);
    }

    #[test]
    fn test_generate_level_five_replays_to_goal() {
        let mut generator = Generator::new(Some(42));
        let puzzle = generator.generate(&config(3, 5)).unwrap();
        assert!(puzzle.solution.len() >= 5);

        let mut board = puzzle.start.clone();
        for dir in &puzzle.solution {
            board.apply(*dir).unwrap();
        }
        assert_eq!(board, puzzle.goal);
    }

    #[test]
    fn test_generate_default_config_replays_to_goal() {
        let mut generator = Generator::new(Some(7));
        let puzzle = generator.generate(&GeneratorConfig::default()).unwrap();
        assert!(puzzle.solution.len() >= 20);

        let mut board = puzzle.start.clone();
        for dir in &puzzle.solution {
            board.apply(*dir).unwrap();
        }
        assert_eq!(board, puzzle.goal);
    }

    #[test]
    fn test_generated_boards_share_walls_and_tiles() {
        let mut generator = Generator::new(Some(7));
        let puzzle = generator.generate(&config(3, 1)).unwrap();
        assert_eq!(puzzle.start.wall_cells(), puzzle.goal.wall_cells());

        let count = |board: &Board, kind: TileKind| {
            board.tiles().iter().filter(|k| **k == kind).count()
        };
        for kind in TileKind::ALL {
            assert_eq!(count(&puzzle.start, kind), count(&puzzle.goal, kind));
        }
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let puzzle_a = Generator::new(Some(1234)).generate(&config(3, 1)).unwrap();
        let puzzle_b = Generator::new(Some(1234)).generate(&config(3, 1)).unwrap();
        assert_eq!(puzzle_a, puzzle_b);
    }

    #[test]
    fn test_level_bounds_are_enforced() {
        let mut generator = Generator::new(Some(1));
        assert_eq!(
            generator.generate(&config(3, 0)),
            Err(GenerateError::LevelOutOfRange {
                size: 3,
                level: 0,
                max: 50
            })
        );
        assert_eq!(
            generator.generate(&config(3, 51)),
            Err(GenerateError::LevelOutOfRange {
                size: 3,
                level: 51,
                max: 50
            })
        );
        assert_eq!(
            generator.generate(&config(5, 10)),
            Err(GenerateError::Board(BoardError::UnsupportedSize(5)))
        );
    }

    #[test]
    fn test_zero_attempt_budget_is_exhausted() {
        let mut generator = Generator::new(Some(1));
        let result = generator.generate(&GeneratorConfig {
            size: 3,
            level: 1,
            max_attempts: 0,
        });
        assert_eq!(
            result,
            Err(GenerateError::Exhausted {
                level: 1,
                attempts: 0
            })
        );
    }
}
