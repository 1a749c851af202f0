//! Tile catalog: the five tile kinds and the eight slide directions.
//!
//! Every tile kind carries a fixed, immutable set of directions along which
//! it may slide into the adjacent empty cell. The tables live in `match`
//! arms on the enums and never change at runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the eight compass offsets a tile can travel along.
///
/// A move names the direction the sliding tile moves: the tile at
/// `empty - delta` slides into the empty cell, and the empty cell takes
/// the tile's old position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All directions in the fixed enumeration order used by the solver.
    /// Targeted-search determinism depends on this order staying put.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// `(d_row, d_col)` offset of this direction.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// The opposite direction; undoing a slide applies the inverse.
    pub fn inverse(self) -> Direction {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::West => "W",
            Direction::East => "E",
            Direction::SouthWest => "SW",
            Direction::South => "S",
            Direction::SouthEast => "SE",
        };
        f.write_str(s)
    }
}

/// Kind of tile occupying a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Empty,
    Wall,
    Cross,
    Triangle,
    Square,
}

impl TileKind {
    pub const ALL: [TileKind; 5] = [
        TileKind::Empty,
        TileKind::Wall,
        TileKind::Cross,
        TileKind::Triangle,
        TileKind::Square,
    ];

    /// Directions this kind may slide along. Empty and Wall never slide.
    pub fn slide_directions(self) -> &'static [Direction] {
        match self {
            TileKind::Empty | TileKind::Wall => &[],
            TileKind::Cross => &[
                Direction::NorthWest,
                Direction::NorthEast,
                Direction::SouthWest,
                Direction::SouthEast,
            ],
            TileKind::Triangle => &[Direction::West, Direction::North, Direction::East],
            TileKind::Square => &[
                Direction::North,
                Direction::West,
                Direction::South,
                Direction::East,
            ],
        }
    }

    pub fn can_slide(self, dir: Direction) -> bool {
        self.slide_directions().contains(&dir)
    }

    /// True for the three kinds that can initiate a slide.
    pub fn is_mover(self) -> bool {
        !matches!(self, TileKind::Empty | TileKind::Wall)
    }

    /// Decimal identifier used by the puzzle-ID encoding.
    pub fn digit(self) -> char {
        match self {
            TileKind::Empty => '0',
            TileKind::Wall => '1',
            TileKind::Cross => '2',
            TileKind::Triangle => '3',
            TileKind::Square => '4',
        }
    }

    /// Inverse of [`TileKind::digit`]; anything outside `0` to `4` is not a tile.
    pub fn from_digit(c: char) -> Option<TileKind> {
        match c {
            '0' => Some(TileKind::Empty),
            '1' => Some(TileKind::Wall),
            '2' => Some(TileKind::Cross),
            '3' => Some(TileKind::Triangle),
            '4' => Some(TileKind::Square),
            _ => None,
        }
    }

    /// Single-character glyph for textual board dumps.
    pub fn glyph(self) -> char {
        match self {
            TileKind::Empty => '.',
            TileKind::Wall => '#',
            TileKind::Cross => 'X',
            TileKind::Triangle => '^',
            TileKind::Square => 'O',
        }
    }
}
