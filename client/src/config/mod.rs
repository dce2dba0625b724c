mod config;
mod logging_config;
mod symbol_choice;
mod tictactoe_config;

pub use config::{Config, get_config_manager};
pub use logging_config::LoggingConfig;
pub use symbol_choice::SymbolChoice;
pub use tictactoe_config::TicTacToeConfig;
