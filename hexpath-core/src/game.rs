//! Game state, move generation and win detection

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{column_letter, Cell, PlayerView, Position, MAX_BOARD_SIZE};
use crate::error::{HexError, Result};

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable game position (every move produces a new state)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Row-major `size * size` grid
    cells: Vec<Cell>,
    size: usize,
    /// Clear when blue is to move, set when red is to move
    active_is_second_player: bool,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Empty board with `first` to move
    pub fn new(size: usize, first: Cell) -> Result<Self> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(HexError::InvalidBoardSize { size });
        }
        Ok(Self {
            cells: vec![Cell::Empty; size * size],
            size,
            active_is_second_player: first == Cell::Red,
        })
    }

    /// Build a state from explicit rows. Intended for setting up positions in
    /// tests and analysis; nothing checks that the position is reachable.
    pub fn from_rows(rows: &[Vec<Cell>], active_is_second_player: bool) -> Result<Self> {
        let size = rows.len();
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(HexError::InvalidBoardSize { size });
        }
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(HexError::NonSquareBoard {
                row,
                len: r.len(),
                size,
            });
        }
        Ok(Self {
            cells: rows.concat(),
            size,
            active_is_second_player,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn active_is_second_player(&self) -> bool {
        self.active_is_second_player
    }

    /// Colour of the player to move
    pub fn active_color(&self) -> Cell {
        if self.active_is_second_player {
            Cell::Red
        } else {
            Cell::Blue
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row * self.size + pos.col]
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Reject positions that fall outside the board
    pub fn check_position(&self, pos: Position) -> Result<Position> {
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(HexError::PositionOutOfBounds {
                row: pos.row,
                col: pos.col,
                size: self.size,
            })
        }
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    // ========================================================================
    // PERSPECTIVE
    // ========================================================================

    /// Board oriented so that `color` connects row 0 to row n-1
    pub fn view_for(&self, color: Cell) -> PlayerView<'_> {
        PlayerView::new(&self.cells, self.size, color == Cell::Red)
    }

    /// Board oriented for the player to move
    pub fn player_view(&self) -> PlayerView<'_> {
        self.view_for(self.active_color())
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Place the active colour at `position` and pass the turn.
    ///
    /// `None`, an occupied cell or an off-board position leave the state
    /// unchanged, turn included.
    pub fn place_peg(&self, position: Option<Position>) -> GameState {
        match position {
            Some(pos) if self.contains(pos) && self.get(pos).is_empty() => {
                let mut cells = self.cells.clone();
                cells[pos.row * self.size + pos.col] = self.active_color();
                GameState {
                    cells,
                    size: self.size,
                    active_is_second_player: !self.active_is_second_player,
                }
            }
            _ => self.clone(),
        }
    }

    /// Every empty position in row-major order
    pub fn legal_moves(&self) -> Vec<Position> {
        self.empty_positions().collect()
    }

    /// Lazily yield `(position, next_state)` for each empty cell
    pub fn successors(&self) -> impl Iterator<Item = (Position, GameState)> + '_ {
        self.empty_positions()
            .map(move |pos| (pos, self.place_peg(Some(pos))))
    }

    fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    // ========================================================================
    // WIN DETECTION
    // ========================================================================

    /// True when the player who just moved has completed a chain, i.e. the
    /// player to move has already lost.
    ///
    /// In the active player's view the opponent connects column 0 to column
    /// n-1, so a flood fill over opponent cells starts from column 0.
    pub fn is_losing(&self) -> bool {
        let view = self.player_view();
        let opponent = self.active_color().opposite();
        let size = view.size();
        let mut visited = vec![false; size * size];
        let mut stack = Vec::new();

        for row in 0..size {
            let start = Position::new(row, 0);
            if view.at(start) != opponent || visited[row * size] {
                continue;
            }
            visited[row * size] = true;
            stack.push(start);

            while let Some(pos) = stack.pop() {
                if pos.col == size - 1 {
                    return true;
                }
                for next in pos.neighbors(size) {
                    let idx = next.row * size + next.col;
                    if !visited[idx] && view.at(next) == opponent {
                        visited[idx] = true;
                        stack.push(next);
                    }
                }
            }
        }

        false
    }

    /// The colour that has won, if any
    pub fn winner(&self) -> Option<Cell> {
        self.is_losing().then(|| self.active_color().opposite())
    }
}

/// Plain-text board: header with the active glyph and column letters, rows
/// shifted right by their index to draw the rhombus.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}  ", self.active_color().glyph())?;
        for col in 0..self.size {
            write!(f, " {}", column_letter(col).unwrap_or('?'))?;
        }
        for row in 0..self.size {
            write!(f, "\n{:indent$}{:>2}", "", row, indent = row)?;
            for col in 0..self.size {
                write!(f, " {}", self.get(Position::new(row, col)).glyph())?;
            }
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
