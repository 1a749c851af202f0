//! Board model: a flat row-major grid of tile kinds with exactly one
//! empty cell, plus the canonical tile multisets for the supported sizes
//! and the decimal-digit codec used by puzzle IDs.

use std::fmt::{self, Write};

use smallvec::SmallVec;

use crate::tile::{Direction, TileKind};

/// Errors raised by board construction and move application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Structural: a board without an empty cell cannot be played. This
    /// indicates a corrupted board, not a user mistake.
    #[error("board has no empty cell")]
    MissingEmpty,
    #[error("board has {0} empty cells, expected exactly one")]
    DuplicateEmpty(usize),
    #[error("unsupported board size {0}, expected 3 or 4")]
    UnsupportedSize(usize),
    #[error("expected {expected} tiles, found {found}")]
    BadLength { expected: usize, found: usize },
    #[error("character {found:?} at position {index} is not a tile digit")]
    BadDigit { index: usize, found: char },
    /// Recoverable: the requested slide is rejected and the board is left
    /// unchanged.
    #[error("{0} is not a legal move from this position")]
    IllegalMove(Direction),
}

/// The fixed tile multiset every board of the given size is a permutation
/// of: one empty cell, two (size 3) or three (size 4) walls, and an even
/// split of the three mover kinds.
pub fn canonical_tiles(size: usize) -> Result<Vec<TileKind>, BoardError> {
    let (walls, movers) = match size {
        3 => (2, 2),
        4 => (3, 4),
        n => return Err(BoardError::UnsupportedSize(n)),
    };
    let mut tiles = vec![TileKind::Empty];
    tiles.extend(std::iter::repeat(TileKind::Wall).take(walls));
    for _ in 0..movers {
        tiles.extend([TileKind::Cross, TileKind::Triangle, TileKind::Square]);
    }
    Ok(tiles)
}

/// Highest difficulty level a scramble of the given size may request.
pub fn max_level(size: usize) -> Result<usize, BoardError> {
    match size {
        3 => Ok(50),
        4 => Ok(70),
        n => Err(BoardError::UnsupportedSize(n)),
    }
}

fn decode_tiles(text: &str) -> Result<Vec<TileKind>, BoardError> {
    text.chars()
        .enumerate()
        .map(|(index, c)| TileKind::from_digit(c).ok_or(BoardError::BadDigit { index, found: c }))
        .collect()
}

/// An NxN playing grid. Cells are stored row-major; equality and hashing
/// are value-based so search can deduplicate states.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: SmallVec<[TileKind; 16]>,
}

impl Board {
    /// Build a board from a row-major tile slice, enforcing the supported
    /// sizes and the one-empty-cell invariant.
    pub fn from_tiles(size: usize, tiles: &[TileKind]) -> Result<Board, BoardError> {
        if size != 3 && size != 4 {
            return Err(BoardError::UnsupportedSize(size));
        }
        let expected = size * size;
        if tiles.len() != expected {
            return Err(BoardError::BadLength {
                expected,
                found: tiles.len(),
            });
        }
        match tiles.iter().filter(|kind| **kind == TileKind::Empty).count() {
            1 => Ok(Board {
                size,
                cells: SmallVec::from_slice(tiles),
            }),
            0 => Err(BoardError::MissingEmpty),
            n => Err(BoardError::DuplicateEmpty(n)),
        }
    }

    /// Parse a string of `size * size` tile digits (row-major, 0 to 4).
    pub fn decode(size: usize, text: &str) -> Result<Board, BoardError> {
        let tiles = decode_tiles(text)?;
        Board::from_tiles(size, &tiles)
    }

    /// Row-major digit encoding; the building block of puzzle IDs.
    pub fn encode(&self) -> String {
        self.cells.iter().map(|kind| kind.digit()).collect()
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat row-major view of the cells, for renderers.
    pub fn tiles(&self) -> &[TileKind] {
        &self.cells
    }

    /// Tile at a grid position (bounds-checked).
    pub fn tile_at(&self, row: usize, col: usize) -> Option<TileKind> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Flat indexes of the wall cells. Walls never move, so two boards of
    /// a solvable pair agree on this list.
    pub fn wall_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == TileKind::Wall)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Locate the empty cell as `(row, col)`.
    ///
    /// Construction enforces exactly one empty cell, so this only fails if
    /// a board has been corrupted; callers treat that as fatal.
    pub fn empty_cell(&self) -> Result<(usize, usize), BoardError> {
        self.cells
            .iter()
            .position(|kind| *kind == TileKind::Empty)
            .map(|idx| (idx / self.size, idx % self.size))
            .ok_or(BoardError::MissingEmpty)
    }

    /// Every direction some tile may currently slide along, in the fixed
    /// [`Direction::ALL`] order.
    ///
    /// A direction is legal when the cell at `empty - delta` is in bounds
    /// and its kind permits sliding that way.
    pub fn legal_moves(&self) -> Result<SmallVec<[Direction; 8]>, BoardError> {
        let (row, col) = self.empty_cell()?;
        let mut moves = SmallVec::new();
        for dir in Direction::ALL {
            if let Some(src) = self.source_cell(row, col, dir) {
                if self.cells[src].can_slide(dir) {
                    moves.push(dir);
                }
            }
        }
        Ok(moves)
    }

    /// Slide the tile at `empty - delta` into the empty cell.
    ///
    /// Validates internally: an illegal direction returns
    /// [`BoardError::IllegalMove`] and leaves the board untouched.
    pub fn apply(&mut self, dir: Direction) -> Result<(), BoardError> {
        if !self.legal_moves()?.contains(&dir) {
            return Err(BoardError::IllegalMove(dir));
        }
        self.swap_with_empty(dir, dir)
    }

    /// Take back a previously applied `dir` by swapping the tile straight
    /// back, without re-checking kind legality. The reverse of a legal
    /// slide is not itself always a legal slide (a triangle that slid
    /// north cannot slide south), but undo must still work.
    pub fn undo(&mut self, dir: Direction) -> Result<(), BoardError> {
        self.swap_with_empty(dir.inverse(), dir)
    }

    /// Source cell index for a slide, or `None` when it falls off the grid.
    fn source_cell(&self, empty_row: usize, empty_col: usize, dir: Direction) -> Option<usize> {
        let (dr, dc) = dir.delta();
        let side = self.size as isize;
        let src_row = empty_row as isize - dr as isize;
        let src_col = empty_col as isize - dc as isize;
        if src_row < 0 || src_row >= side || src_col < 0 || src_col >= side {
            return None;
        }
        Some(src_row as usize * self.size + src_col as usize)
    }

    /// Swap the cell at `empty - delta(slide)` with the empty cell.
    /// `reported` names the move in any error; undo swaps along the
    /// inverse of the move it takes back.
    fn swap_with_empty(&mut self, slide: Direction, reported: Direction) -> Result<(), BoardError> {
        let (row, col) = self.empty_cell()?;
        let src = self
            .source_cell(row, col, slide)
            .ok_or(BoardError::IllegalMove(reported))?;
        let empty = row * self.size + col;
        self.cells.swap(src, empty);
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for kind in row {
                f.write_char(kind.glyph())?;
            }
        }
        Ok(())
    }
}
