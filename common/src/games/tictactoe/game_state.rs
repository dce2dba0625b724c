use crate::log;
use super::board::Board;
use super::bot_controller::compute_computer_move;
use super::error::{InvalidMoveReason, TicTacToeError};
use super::types::{GameStatus, Outcome, Player, Players, Role};
use super::win_detector::outcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub board: Board,
    pub outcome: Outcome,
}

/// Empty board plus the symbol the computer plays with.
pub fn start_new_game(human: Player) -> (Board, Player) {
    (Board::new(), human.opponent())
}

/// Applies the human's mark to a copy of `board`; the input is never modified.
pub fn submit_human_move(
    board: &Board,
    index: usize,
    human: Player,
) -> Result<MoveResult, TicTacToeError> {
    let next = board.with_move(index, human)?;
    Ok(MoveResult {
        board: next,
        outcome: outcome(&next, human),
    })
}

#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    players: Players,
    status: GameStatus,
    last_move: Option<usize>,
}

impl TicTacToeGameState {
    pub fn new(human: Player) -> Self {
        let (board, computer) = start_new_game(human);
        let players = Players { human, computer };

        log!("New game: human plays {}, computer plays {}", human, computer);

        Self {
            board,
            players,
            status: Self::initial_status(players),
            last_move: None,
        }
    }

    fn initial_status(players: Players) -> GameStatus {
        if players.human == Player::X {
            GameStatus::AwaitingHumanMove
        } else {
            GameStatus::ComputerToMove
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> Players {
        self.players
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn move_count(&self) -> usize {
        self.board.marked_count()
    }

    pub fn outcome(&self) -> Outcome {
        match self.status {
            GameStatus::Won(player, line) => Outcome::Win(player, line),
            GameStatus::Tied => Outcome::Tie,
            GameStatus::AwaitingHumanMove | GameStatus::ComputerToMove => Outcome::InProgress,
        }
    }

    pub fn winner_role(&self) -> Option<Role> {
        match self.status {
            GameStatus::Won(player, _) => Some(self.players.role_of(player)),
            _ => None,
        }
    }

    pub fn submit_human_move(&mut self, index: usize) -> Result<MoveResult, TicTacToeError> {
        self.ensure_turn(GameStatus::AwaitingHumanMove)
            .map_err(|reason| TicTacToeError::invalid_move(index, reason))?;

        let result = submit_human_move(&self.board, index, self.players.human)?;
        self.commit(index, self.players.human, result);

        Ok(result)
    }

    pub fn play_computer_move(&mut self) -> Result<MoveResult, TicTacToeError> {
        self.ensure_turn(GameStatus::ComputerToMove)
            .map_err(|reason| TicTacToeError::ComputerMoveRejected { reason })?;

        let index = compute_computer_move(&self.board, self.players.computer, self.players.human)
            .ok_or(TicTacToeError::ComputerMoveRejected {
                reason: InvalidMoveReason::GameOver,
            })?;
        let next = self.board.with_move(index, self.players.computer)?;
        let result = MoveResult {
            board: next,
            outcome: outcome(&next, self.players.computer),
        };
        self.commit(index, self.players.computer, result);

        Ok(result)
    }

    pub fn restart(&mut self) {
        self.board = Board::new();
        self.status = Self::initial_status(self.players);
        self.last_move = None;

        log!("Game restarted");
    }

    fn ensure_turn(&self, expected: GameStatus) -> Result<(), InvalidMoveReason> {
        if self.status.is_over() {
            return Err(InvalidMoveReason::GameOver);
        }
        if self.status != expected {
            return Err(InvalidMoveReason::NotYourTurn);
        }
        Ok(())
    }

    fn commit(&mut self, index: usize, mover: Player, result: MoveResult) {
        self.board = result.board;
        self.last_move = Some(index);

        self.status = match result.outcome {
            Outcome::Win(player, line) => GameStatus::Won(player, line),
            Outcome::Tie => GameStatus::Tied,
            Outcome::InProgress if mover == self.players.human => GameStatus::ComputerToMove,
            Outcome::InProgress => GameStatus::AwaitingHumanMove,
        };

        log!("{:?} placed {} at {}", self.players.role_of(mover), mover, index);
        if self.status.is_over() {
            log!("Game over: {:?}", self.status);
        }
    }
}
