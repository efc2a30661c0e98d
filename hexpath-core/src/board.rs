//! Rhombic board geometry: cells, positions and player-oriented views

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HexError;

/// Largest supported board (columns are labelled `a..=z`)
pub const MAX_BOARD_SIZE: usize = 26;

/// Hex adjacency as (row, col) offsets on the rhombus.
/// Each cell touches its row neighbours, the two cells above it at
/// columns c and c+1, and the two below it at columns c-1 and c.
pub const NEIGHBORS: [(isize, isize); 6] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Content of a single board cell.
///
/// `Blue` is the colour to move while the turn flag is clear and connects
/// row 0 to row n-1. `Red` connects column 0 to column n-1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Blue,
    Red,
}

impl Cell {
    /// Swap the two colours; `Empty` stays `Empty`
    pub fn opposite(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::Blue => Cell::Red,
            Cell::Red => Cell::Blue,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character glyph used by the plain renderer
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blue => 'B',
            Cell::Red => 'R',
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "empty"),
            Cell::Blue => write!(f, "blue"),
            Cell::Red => write!(f, "red"),
        }
    }
}

/// Zero-based (row, column) board coordinate
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// On-board neighbours of this position on a `size`x`size` board
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Position> {
        NEIGHBORS.iter().filter_map(move |&(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < size && col < size).then_some(Position::new(row, col))
        })
    }
}

/// Written as column letter then row number, e.g. `c4` for row 4, column 2
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match column_letter(self.col) {
            Some(letter) => write!(f, "{}{}", letter, self.row),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// Accepts `c4`, `C4` and `4c`. Surrounding whitespace is ignored.
impl FromStr for Position {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = |reason| HexError::ParsePosition {
            input: s.to_string(),
            reason,
        };

        let mut chars = input.chars();
        let (letter, digits) = match (chars.next(), chars.next_back()) {
            (Some(first), _) if first.is_ascii_alphabetic() => (first, &input[1..]),
            (_, Some(last)) if last.is_ascii_alphabetic() => (last, &input[..input.len() - 1]),
            (None, _) => return Err(err("empty input")),
            _ => return Err(err("expected a column letter")),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err("expected a row number"));
        }
        let row = digits.parse().map_err(|_| err("row number too large"))?;
        let col = (letter.to_ascii_lowercase() as u8 - b'a') as usize;

        Ok(Position::new(row, col))
    }
}

/// Letter label for a column index (`0` -> `a`)
pub fn column_letter(col: usize) -> Option<char> {
    (col < MAX_BOARD_SIZE).then(|| (b'a' + col as u8) as char)
}

/// Read-only view of a square grid, optionally transposed.
///
/// Path and connectivity code is written once for "connect row 0 to row
/// n-1"; a view for `Red` swaps row and column on every access instead of
/// materialising a transposed copy.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    cells: &'a [Cell],
    size: usize,
    transposed: bool,
}

impl<'a> PlayerView<'a> {
    pub(crate) fn new(cells: &'a [Cell], size: usize, transposed: bool) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self {
            cells,
            size,
            transposed,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        let (r, c) = if self.transposed { (col, row) } else { (row, col) };
        self.cells[r * self.size + c]
    }

    pub fn at(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col)
    }
}
