use super::board::Board;
use super::types::{Player, Players, ScoredMove};
use super::win_detector::winner;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub players: Players,
}

impl BotInput {
    pub fn new(board: Board, computer: Player, human: Player) -> Self {
        Self {
            board,
            players: Players { human, computer },
        }
    }
}

/// Optimal cell for the computer, or `None` when the board has no free cell.
pub fn compute_computer_move(board: &Board, computer: Player, human: Player) -> Option<usize> {
    calculate_minimax_move(&BotInput::new(*board, computer, human))
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let mut board = input.board;
    minimax(&mut board, input.players.computer, input.players).index
}

/// Full-depth minimax without pruning. Scores are from the computer's point of view.
///
/// Every cell tried is cleared again before the next sibling is explored, so `board`
/// is identical on return.
pub fn minimax(board: &mut Board, mover: Player, players: Players) -> ScoredMove {
    if winner(board, players.human).is_some() {
        return ScoredMove::terminal(LOSS_SCORE);
    }
    if winner(board, players.computer).is_some() {
        return ScoredMove::terminal(WIN_SCORE);
    }

    let available_moves = board.empty_cells();
    if available_moves.is_empty() {
        return ScoredMove::terminal(TIE_SCORE);
    }

    let mut moves = Vec::with_capacity(available_moves.len());
    for index in available_moves {
        board.place_unchecked(index, mover);
        let result = minimax(board, mover.opponent(), players);
        board.clear(index);

        moves.push(ScoredMove::at(index, result.score));
    }

    select_best(&moves, mover == players.computer)
}

// First extreme wins: a later candidate replaces the best only when strictly better.
fn select_best(moves: &[ScoredMove], is_maximizing: bool) -> ScoredMove {
    let mut best = moves[0];
    for &candidate in &moves[1..] {
        let better = if is_maximizing {
            candidate.score > best.score
        } else {
            candidate.score < best.score
        };
        if better {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::outcome;
    use crate::games::tictactoe::{Mark, Outcome};

    const X: Mark = Mark::X;
    const O: Mark = Mark::O;
    const E: Mark = Mark::Empty;

    fn computer_x() -> Players {
        Players::with_human(Player::O)
    }

    #[test]
    fn test_empty_board_computer_first_picks_corner_zero() {
        let board = Board::new();

        let index = compute_computer_move(&board, Player::X, Player::O);

        assert_eq!(index, Some(0));
    }

    #[test]
    fn test_empty_board_scores_as_draw() {
        let mut board = Board::new();

        let result = minimax(&mut board, Player::X, computer_x());

        assert_eq!(result, ScoredMove::at(0, TIE_SCORE));
    }

    #[test]
    fn test_takes_immediate_win() {
        // Computer is O with two in the middle row.
        let board = Board::from_cells([X, X, E, O, O, E, X, E, E]);

        let index = compute_computer_move(&board, Player::O, Player::X);

        assert_eq!(index, Some(5));
    }

    #[test]
    fn test_blocks_human_win() {
        let board = Board::from_cells([X, X, E, E, O, E, E, E, E]);

        let index = compute_computer_move(&board, Player::O, Player::X);

        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_answers_corner_opening_with_center() {
        let board = Board::from_cells([X, E, E, E, E, E, E, E, E]);

        let index = compute_computer_move(&board, Player::O, Player::X);

        assert_eq!(index, Some(4));
    }

    #[test]
    fn test_terminal_scores() {
        let players = computer_x();
        let mut human_won = Board::from_cells([O, O, O, X, X, E, X, E, E]);
        let mut computer_won = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let mut full = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert_eq!(minimax(&mut human_won, Player::X, players).score, LOSS_SCORE);
        assert_eq!(minimax(&mut computer_won, Player::O, players).score, WIN_SCORE);
        assert_eq!(minimax(&mut full, Player::X, players), ScoredMove::terminal(TIE_SCORE));
    }

    #[test]
    fn test_human_win_checked_before_computer_win() {
        // Unreachable in play, but fixes the order of the terminal checks.
        let mut board = Board::from_cells([X, X, X, O, O, O, E, E, E]);

        let result = minimax(&mut board, Player::X, computer_x());

        assert_eq!(result.score, LOSS_SCORE);
    }

    #[test]
    fn test_minimizing_side_picks_first_least_score() {
        // Human (O) to move must block at 2; every other reply lets X complete the top row.
        let mut board = Board::from_cells([X, X, E, E, O, E, E, E, E]);

        let result = minimax(&mut board, Player::O, computer_x());

        assert_eq!(result.index, Some(2));
        assert_eq!(result.score, TIE_SCORE);
    }

    #[test]
    fn test_search_leaves_board_unchanged() {
        let original = Board::from_cells([X, E, E, E, O, E, E, E, E]);
        let mut board = original;

        minimax(&mut board, Player::X, computer_x());

        assert_eq!(board, original);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);

        assert_eq!(compute_computer_move(&board, Player::X, Player::O), None);
    }

    #[test]
    fn test_select_best_keeps_first_extreme() {
        let moves = [
            ScoredMove::at(1, 0),
            ScoredMove::at(3, 10),
            ScoredMove::at(5, 10),
            ScoredMove::at(7, -10),
        ];

        assert_eq!(select_best(&moves, true), ScoredMove::at(3, 10));
        assert_eq!(select_best(&moves, false), ScoredMove::at(7, -10));
    }

    // Walks every human reply sequence; the computer answers with the engine each turn.
    fn assert_computer_never_loses(board: Board, players: Players, to_move: Player) {
        if outcome(&board, to_move.opponent()).is_over() {
            assert!(
                !matches!(outcome(&board, to_move.opponent()), Outcome::Win(p, _) if p == players.human),
                "computer lost on board\n{}",
                board
            );
            return;
        }

        if to_move == players.computer {
            let index = compute_computer_move(&board, players.computer, players.human)
                .expect("non-terminal board has a free cell");
            assert!(board.is_empty_at(index), "engine picked occupied cell {}", index);
            let next = board.with_move(index, players.computer).unwrap();
            assert_computer_never_loses(next, players, players.human);
        } else {
            for index in board.empty_cells() {
                let next = board.with_move(index, players.human).unwrap();
                assert_computer_never_loses(next, players, players.computer);
            }
        }
    }

    #[test]
    fn test_never_loses_when_moving_first() {
        let players = Players::with_human(Player::O);

        assert_computer_never_loses(Board::new(), players, players.computer);
    }

    #[test]
    fn test_never_loses_when_moving_second() {
        let players = Players::with_human(Player::X);

        assert_computer_never_loses(Board::new(), players, players.human);
    }
}
