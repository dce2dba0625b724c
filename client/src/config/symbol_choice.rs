use clap::ValueEnum;
use common::games::tictactoe::Player;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the human's symbol is picked before each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolChoice {
    X,
    O,
    Random,
    Ask,
}

impl SymbolChoice {
    /// `None` for [`SymbolChoice::Ask`]; the caller has to prompt.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Player> {
        match self {
            SymbolChoice::X => Some(Player::X),
            SymbolChoice::O => Some(Player::O),
            SymbolChoice::Random => Some(if rng.random_bool(0.5) { Player::X } else { Player::O }),
            SymbolChoice::Ask => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_choices_resolve_directly() {
        let mut rng = rand::rng();

        assert_eq!(SymbolChoice::X.resolve(&mut rng), Some(Player::X));
        assert_eq!(SymbolChoice::O.resolve(&mut rng), Some(Player::O));
        assert_eq!(SymbolChoice::Ask.resolve(&mut rng), None);
    }

    #[test]
    fn test_random_choice_always_resolves() {
        let mut rng = rand::rng();

        for _ in 0..20 {
            assert!(SymbolChoice::Random.resolve(&mut rng).is_some());
        }
    }
}
