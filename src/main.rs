use anyhow::Context;
use assembly_endgame::cli::{CliInterface, parse_cli};
use assembly_endgame::logging::{default_log_path, init_logging};
use assembly_endgame::tui::TuiInterface;
use assembly_endgame::{Game, GameConfig, game_loop};
use std::io;

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = init_logging(&log_path) {
        eprintln!("Logging disabled: could not open {}: {e}", log_path.display());
    }

    let config = match GameConfig::load(cli.wordbank_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Refusing to start: {e}");
            return Err(e).context("failed to load game configuration");
        }
    };

    let mut game = match cli.seed {
        Some(seed) => {
            log::info!("Using seed {seed}");
            Game::seeded(config, seed)
        }
        None => Game::from_entropy(config),
    };

    if cli.plain {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut game, &mut interface);
    } else {
        let mut interface = TuiInterface::new().context("failed to initialise terminal")?;
        game_loop(&mut game, &mut interface);
        interface.cleanup().context("failed to restore terminal")?;
    }

    log::info!("Exiting");
    Ok(())
}
