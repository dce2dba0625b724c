mod config;
mod console_ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use common::{log, logger};
use common::logger::LogTarget;

use config::{SymbolChoice, get_config_manager};
use console_ui::ConsoleUi;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a minimax opponent")]
struct Args {
    /// Symbol for the human player; overrides the config file.
    #[arg(long, value_enum)]
    symbol: Option<SymbolChoice>,

    #[arg(long)]
    config: Option<PathBuf>,

    /// Write diagnostic log lines to stderr.
    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,

    /// Store the effective settings back to the config file.
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager(args.config);
    let mut config = config_manager.get_config()?;

    if let Some(symbol) = args.symbol {
        config.tictactoe.human_symbol = symbol;
    }
    if args.verbose {
        config.logging.enabled = true;
    }
    if args.use_log_prefix && config.logging.prefix.is_none() {
        config.logging.prefix = Some("Client".to_string());
    }

    if config.logging.enabled {
        logger::init_logger(config.logging.prefix.clone(), LogTarget::Stderr);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    let stdin = io::stdin();
    let mut ui = ConsoleUi::new(stdin.lock(), io::stdout());
    let summary = ui.run(
        config.tictactoe.human_symbol,
        config.tictactoe.offer_rematch,
        &mut rand::rng(),
    )?;

    log!(
        "Exiting: {} win(s), {} loss(es), {} tie(s)",
        summary.wins,
        summary.losses,
        summary.ties
    );

    Ok(())
}
