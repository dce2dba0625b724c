use std::io::{self, BufRead, Write};

use common::games::tictactoe::{
    Board, GameStatus, InvalidMoveReason, Mark, Outcome, Player, Role, TicTacToeGameState,
};
use common::log;
use rand::Rng;

use crate::config::SymbolChoice;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl SessionSummary {
    fn record(&mut self, game: &TicTacToeGameState) {
        match game.winner_role() {
            Some(Role::Human) => self.wins += 1,
            Some(Role::Computer) => self.losses += 1,
            None => self.ties += 1,
        }
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses + self.ties
    }
}

enum HumanInput {
    Cell(usize),
    Quit,
}

/// Terminal view: draws the board, reads cell numbers 1-9 and reports the result.
pub struct ConsoleUi<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleUi<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run<G: Rng + ?Sized>(
        &mut self,
        choice: SymbolChoice,
        offer_rematch: bool,
        rng: &mut G,
    ) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut current: Option<TicTacToeGameState> = None;

        loop {
            let human = match choice.resolve(rng) {
                Some(player) => player,
                None => match self.prompt_symbol()? {
                    Some(player) => player,
                    None => break,
                },
            };

            if let Some(game) = current.as_mut().filter(|game| game.players().human == human) {
                game.restart();
            } else {
                current = Some(TicTacToeGameState::new(human));
            }
            let Some(game) = current.as_mut() else {
                break;
            };
            writeln!(self.output, "You play {}, the computer plays {}.", human, human.opponent())?;

            if !self.play_game(game)? {
                break;
            }
            summary.record(game);

            if !offer_rematch || !self.confirm("Play again? [y/n]: ")? {
                break;
            }
        }

        writeln!(
            self.output,
            "Wins: {}, losses: {}, ties: {}",
            summary.wins, summary.losses, summary.ties
        )?;
        log!("Session finished after {} game(s)", summary.games_played());

        Ok(summary)
    }

    /// Returns `false` when the player quit before the game ended.
    fn play_game(&mut self, game: &mut TicTacToeGameState) -> io::Result<bool> {
        loop {
            match game.status() {
                GameStatus::ComputerToMove => {
                    game.play_computer_move().map_err(io::Error::other)?;
                    if let Some(index) = game.last_move() {
                        writeln!(self.output, "Computer plays {}.", index + 1)?;
                    }
                }
                GameStatus::AwaitingHumanMove => {
                    self.render(game.board(), None)?;
                    let index = match self.read_move()? {
                        HumanInput::Cell(index) => index,
                        HumanInput::Quit => return Ok(false),
                    };
                    if let Err(err) = game.submit_human_move(index) {
                        let message = match err.reason() {
                            InvalidMoveReason::Occupied => "That cell is already taken.".to_string(),
                            InvalidMoveReason::OutOfRange => {
                                "Please enter a number from 1 to 9.".to_string()
                            }
                            _ => err.to_string(),
                        };
                        writeln!(self.output, "{}", message)?;
                    }
                }
                GameStatus::Won(..) | GameStatus::Tied => {
                    self.announce(game)?;
                    return Ok(true);
                }
            }
        }
    }

    fn announce(&mut self, game: &TicTacToeGameState) -> io::Result<()> {
        let outcome = game.outcome();
        let highlight = match outcome {
            Outcome::Win(_, line) => Some(line.cells),
            _ => None,
        };
        self.render(game.board(), highlight)?;

        let message = match game.winner_role() {
            Some(Role::Human) => "You win!",
            Some(Role::Computer) => "You lose.",
            None => "Tie Game!",
        };
        writeln!(self.output, "{}", message)
    }

    fn render(&mut self, board: &Board, highlight: Option<[usize; 3]>) -> io::Result<()> {
        writeln!(self.output)?;
        for row in 0..3 {
            if row > 0 {
                writeln!(self.output, "---+---+---")?;
            }
            let cells: Vec<String> = (0..3)
                .map(|column| {
                    let index = row * 3 + column;
                    let symbol = match board.get(index) {
                        Some(Mark::Empty) | None => char::from(b'1' + index as u8),
                        Some(mark) => mark.symbol(),
                    };
                    if highlight.is_some_and(|cells| cells.contains(&index)) {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            writeln!(self.output, "{}", cells.join("|"))?;
        }
        writeln!(self.output)
    }

    fn read_move(&mut self) -> io::Result<HumanInput> {
        loop {
            write!(self.output, "Your move (1-9, q to quit): ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(HumanInput::Quit);
            };
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                return Ok(HumanInput::Quit);
            }

            match line.parse::<usize>() {
                Ok(number) if number >= 1 => return Ok(HumanInput::Cell(number - 1)),
                _ => writeln!(self.output, "Please enter a number from 1 to 9.")?,
            }
        }
    }

    fn prompt_symbol(&mut self) -> io::Result<Option<Player>> {
        loop {
            write!(self.output, "Play as X or O? [x/o]: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.to_ascii_lowercase().as_str() {
                "x" => return Ok(Some(Player::X)),
                "o" => return Ok(Some(Player::O)),
                "q" | "quit" => return Ok(None),
                _ => writeln!(self.output, "Please choose X or O.")?,
            }
        }
    }

    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
