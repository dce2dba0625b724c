use std::fmt;

use serde::{Deserialize, Serialize};

pub const BOARD_CELLS: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
            Mark::Empty => ' ',
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Mark {
        Mark::from(*self)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark().symbol())
    }
}

/// Which symbol each side of a single game owns. Fixed for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Players {
    pub human: Player,
    pub computer: Player,
}

impl Players {
    pub fn with_human(human: Player) -> Self {
        Self {
            human,
            computer: human.opponent(),
        }
    }

    pub fn role_of(&self, player: Player) -> Role {
        if player == self.human {
            Role::Human
        } else {
            Role::Computer
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Human,
    Computer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    /// Position of the line in the static ordering of all eight lines.
    pub index: usize,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(index: usize, cells: [usize; 3]) -> Self {
        Self { index, cells }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player, WinningLine),
    Tie,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingHumanMove,
    ComputerToMove,
    Won(Player, WinningLine),
    Tied,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Won(..) | GameStatus::Tied)
    }
}

/// A candidate produced by the search. Terminal positions carry no index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoredMove {
    pub index: Option<usize>,
    pub score: i32,
}

impl ScoredMove {
    pub fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }

    pub fn at(index: usize, score: i32) -> Self {
        Self {
            index: Some(index),
            score,
        }
    }
}
