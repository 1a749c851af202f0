//! Puzzle-ID import and export.
//!
//! A puzzle ID is the concatenated row-major digit encoding of the start
//! and goal boards, one digit per cell. Import validates the text shape,
//! the tile multiset, and the wall placement, then proves the pair
//! reachable with a targeted solve; the solve's path becomes the
//! puzzle's best-known solution.

use crate::board::{canonical_tiles, Board, BoardError};
use crate::solver::solve;
use crate::tile::{Direction, TileKind};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("character {found:?} at position {index} is not a tile digit")]
    BadDigit { index: usize, found: char },
    #[error("puzzle ID is {found} digits long, expected 18 (size 3) or 32 (size 4)")]
    BadLength { found: usize },
    #[error("boards are not permutations of the size-{size} tile set")]
    TileSetMismatch { size: usize },
    #[error("wall cells differ between the start and goal boards")]
    WallMismatch,
    #[error("goal board is unreachable from the start board")]
    Unreachable,
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A validated, solvable puzzle pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedPuzzle {
    pub start: Board,
    pub goal: Board,
    /// Shortest start-to-goal move sequence found by the verification
    /// solve; its length is the puzzle's level.
    pub solution: Vec<Direction>,
    /// States the verification solve expanded.
    pub expanded: usize,
}

/// The export format: start digits followed by goal digits.
pub fn puzzle_id(start: &Board, goal: &Board) -> String {
    format!("{}{}", start.encode(), goal.encode())
}

/// Parse and verify a puzzle ID.
///
/// The board size is inferred from the digit count; the two supported
/// encodings (18 and 32 digits) cannot collide. An identity pair imports
/// successfully with an empty solution.
pub fn import_puzzle(id: &str) -> Result<ImportedPuzzle, ImportError> {
    let mut tiles = Vec::with_capacity(id.len());
    for (index, c) in id.chars().enumerate() {
        match TileKind::from_digit(c) {
            Some(kind) => tiles.push(kind),
            None => return Err(ImportError::BadDigit { index, found: c }),
        }
    }

    let size = match tiles.len() {
        18 => 3,
        32 => 4,
        found => return Err(ImportError::BadLength { found }),
    };
    let (first, second) = tiles.split_at(size * size);

    let canonical = canonical_tiles(size)?;
    if kind_counts(first) != kind_counts(&canonical)
        || kind_counts(second) != kind_counts(&canonical)
    {
        return Err(ImportError::TileSetMismatch { size });
    }

    // The multiset check guarantees exactly one empty per half, so these
    // constructions cannot fail.
    let start = Board::from_tiles(size, first)?;
    let goal = Board::from_tiles(size, second)?;

    // Walls never move; differing wall cells make the pair unsolvable by
    // construction, so reject before searching.
    if start.wall_cells() != goal.wall_cells() {
        return Err(ImportError::WallMismatch);
    }

    let report = solve(&start, &goal)?;
    match report.path {
        Some(path) => Ok(ImportedPuzzle {
            solution: path.moves().collect(),
            expanded: report.expanded,
            start,
            goal,
        }),
        None => Err(ImportError::Unreachable),
    }
}

fn kind_counts(tiles: &[TileKind]) -> [usize; 5] {
    let mut counts = [0usize; 5];
    for kind in tiles {
        counts[*kind as usize] += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_pair_imports_with_empty_solution() {
        let imported = import_puzzle("011234234011234234").unwrap();
        assert_eq!(imported.start, imported.goal);
        assert!(imported.solution.is_empty());
    }

    #[test]
    fn test_one_move_pair() {
        let imported = import_puzzle("241304132241334102").unwrap();
        assert_eq!(imported.solution, vec![Direction::North]);

        let mut board = imported.start.clone();
        board.apply(Direction::North).unwrap();
        assert_eq!(board, imported.goal);
    }

    #[test]
    fn test_puzzle_id_round_trip() {
        let id = "241304132241334102";
        let imported = import_puzzle(id).unwrap();
        assert_eq!(puzzle_id(&imported.start, &imported.goal), id);
    }

    #[test]
    fn test_rejects_bad_digit() {
        assert_eq!(
            import_puzzle("241304132241x34102"),
            Err(ImportError::BadDigit {
                index: 12,
                found: 'x'
            })
        );
        assert_eq!(
            import_puzzle("541304132241334102"),
            Err(ImportError::BadDigit {
                index: 0,
                found: '5'
            })
        );
    }

    #[test]
    fn test_rejects_bad_length() {
        assert_eq!(
            import_puzzle("0112342340112342"),
            Err(ImportError::BadLength { found: 16 })
        );
        assert_eq!(
            import_puzzle("01123423401123423401"),
            Err(ImportError::BadLength { found: 20 })
        );
        assert_eq!(import_puzzle(""), Err(ImportError::BadLength { found: 0 }));
    }

    #[test]
    fn test_rejects_tile_set_mismatch() {
        // Second half swaps a cross for a third triangle.
        assert_eq!(
            import_puzzle("241304132241304133"),
            Err(ImportError::TileSetMismatch { size: 3 })
        );
    }

    #[test]
    fn test_rejects_wall_mismatch() {
        // Both halves are canonical permutations, but the walls sit at
        // cells {2, 6} in the first and {2, 5} in the second.
        assert_eq!(
            import_puzzle("241304132241301432"),
            Err(ImportError::WallMismatch)
        );
        // Walls {1, 4} against {1, 5}.
        assert_eq!(
            import_puzzle("012314234012341234"),
            Err(ImportError::WallMismatch)
        );
    }

    #[test]
    fn test_rejects_unreachable_pair() {
        // The start board's empty cell is boxed in by tiles that cannot
        // slide toward it, so no goal other than itself is reachable.
        assert_eq!(
            import_puzzle("021231344021231434"),
            Err(ImportError::Unreachable)
        );
    }
}
