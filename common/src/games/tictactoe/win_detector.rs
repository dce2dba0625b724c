use super::board::Board;
use super::types::{Outcome, Player, WinningLine};

/// Rows, the two diagonals, then columns. Reporting order depends on this layout.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 4, 8],
    [6, 4, 2],
    [2, 5, 8],
    [1, 4, 7],
    [0, 3, 6],
];

pub fn winning_line(index: usize) -> Option<WinningLine> {
    WINNING_LINES
        .get(index)
        .map(|&cells| WinningLine::new(index, cells))
}

/// First line, in [`WINNING_LINES`] order, fully owned by `player`.
pub fn winner(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .enumerate()
        .find(|(_, line)| line.iter().all(|&cell| board.get(cell) == Some(mark)))
        .map(|(index, &cells)| WinningLine::new(index, cells))
}

pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winner(board, Player::X).is_none() && winner(board, Player::O).is_none()
}

/// The mover's line is checked first, so a board won by `last_mover` is never reported as a tie.
pub fn outcome(board: &Board, last_mover: Player) -> Outcome {
    for player in [last_mover, last_mover.opponent()] {
        if let Some(line) = winner(board, player) {
            return Outcome::Win(player, line);
        }
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}
