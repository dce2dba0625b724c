mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, LOSS_SCORE, TIE_SCORE, WIN_SCORE, calculate_minimax_move, compute_computer_move,
    minimax,
};
pub use error::{InvalidMoveReason, TicTacToeError};
pub use game_state::{MoveResult, TicTacToeGameState, start_new_game, submit_human_move};
pub use types::{
    BOARD_CELLS, GameStatus, Mark, Outcome, Player, Players, Role, ScoredMove, WinningLine,
};
pub use win_detector::{WINNING_LINES, is_tie, outcome, winner, winning_line};
