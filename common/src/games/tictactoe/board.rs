use std::fmt;

use super::error::{InvalidMoveReason, TicTacToeError};
use super::types::{BOARD_CELLS, Mark, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Indices of free cells in ascending order.
    pub fn empty_cells(&self) -> Vec<usize> {
        let mut moves = Vec::with_capacity(BOARD_CELLS);
        for (index, &cell) in self.cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(index);
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Mark::Empty).count()
    }

    pub fn validate_move(&self, index: usize) -> Result<(), TicTacToeError> {
        match self.get(index) {
            None => Err(TicTacToeError::invalid_move(
                index,
                InvalidMoveReason::OutOfRange,
            )),
            Some(Mark::Empty) => Ok(()),
            Some(_) => Err(TicTacToeError::invalid_move(
                index,
                InvalidMoveReason::Occupied,
            )),
        }
    }

    pub fn apply(&mut self, index: usize, player: Player) -> Result<(), TicTacToeError> {
        self.validate_move(index)?;
        self.cells[index] = player.mark();
        Ok(())
    }

    /// Non-mutating variant of [`Board::apply`].
    pub fn with_move(&self, index: usize, player: Player) -> Result<Board, TicTacToeError> {
        let mut next = *self;
        next.apply(index, player)?;
        Ok(next)
    }

    // Search-only: the caller has already checked the cell is empty.
    pub(super) fn place_unchecked(&mut self, index: usize, player: Player) {
        self.cells[index] = player.mark();
    }

    pub(super) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for &cell in chunk {
                let symbol = if cell == Mark::Empty { '.' } else { cell.symbol() };
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}
