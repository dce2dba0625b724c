use std::fmt;

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidMoveReason {
    OutOfRange,
    Occupied,
    GameOver,
    NotYourTurn,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            InvalidMoveReason::OutOfRange => "position out of bounds",
            InvalidMoveReason::Occupied => "cell is already marked",
            InvalidMoveReason::GameOver => "game is already over",
            InvalidMoveReason::NotYourTurn => "not your turn",
        };
        f.write_str(text)
    }
}

/// Rejected moves leave the board untouched, so callers can simply ask for another input.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TicTacToeError {
    #[error("Invalid move at cell {index}: {reason}")]
    InvalidMove {
        index: usize,
        reason: InvalidMoveReason,
    },
    #[error("Computer cannot move: {reason}")]
    ComputerMoveRejected { reason: InvalidMoveReason },
}

impl TicTacToeError {
    pub fn invalid_move(index: usize, reason: InvalidMoveReason) -> Self {
        TicTacToeError::InvalidMove { index, reason }
    }

    pub fn reason(&self) -> InvalidMoveReason {
        match self {
            TicTacToeError::InvalidMove { reason, .. } => *reason,
            TicTacToeError::ComputerMoveRejected { reason } => *reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_names_cell_and_reason() {
        let error = TicTacToeError::invalid_move(4, InvalidMoveReason::Occupied);

        assert_eq!(
            error.to_string(),
            "Invalid move at cell 4: cell is already marked"
        );
        assert_eq!(error.reason(), InvalidMoveReason::Occupied);
    }
}
