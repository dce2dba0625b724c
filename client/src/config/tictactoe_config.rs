use common::config::Validate;
use serde::{Deserialize, Serialize};

use super::SymbolChoice;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub human_symbol: SymbolChoice,
    #[serde(default = "default_offer_rematch")]
    pub offer_rematch: bool,
}

fn default_offer_rematch() -> bool {
    true
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            human_symbol: SymbolChoice::Ask,
            offer_rematch: default_offer_rematch(),
        }
    }
}
