mod commands;
mod config;
mod game_loop;
mod render;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tictactoe_engine::config::Validate;
use tictactoe_engine::tally::FileTallyStore;
use tictactoe_engine::tictactoe::FirstPlayerMode;
use tictactoe_engine::{SessionRng, log, logger};

use config::{PlayMode, get_config_manager};
use game_loop::GameLoop;

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Pvp,
    Ai,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstArg {
    Human,
    Search,
    Random,
}

#[derive(Parser)]
#[command(name = "tictactoe_terminal", version = tictactoe_engine::version::VERSION)]
struct Args {
    /// Config file; defaults to tictactoe_terminal_config.yaml next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum)]
    mode: Option<ModeArg>,

    /// Who moves first against the search opponent
    #[arg(long, value_enum)]
    first: Option<FirstArg>,

    #[arg(long)]
    tally_file: Option<String>,

    #[arg(long)]
    search_delay_ms: Option<u64>,

    #[arg(long)]
    reset_tallies: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.verbose {
        let prefix = args.use_log_prefix.then(|| "Terminal".to_string());
        logger::init_logger(prefix);
    }

    let mut config = get_config_manager(args.config.as_deref()).get_config()?;
    log!("Loaded config {:?}", config);

    if let Some(mode) = args.mode {
        config.play_mode = match mode {
            ModeArg::Pvp => PlayMode::HumanVsHuman,
            ModeArg::Ai => PlayMode::HumanVsSearch,
        };
    }
    if let Some(first) = args.first {
        config.first_player = match first {
            FirstArg::Human => FirstPlayerMode::Human,
            FirstArg::Search => FirstPlayerMode::Search,
            FirstArg::Random => FirstPlayerMode::Random,
        };
    }
    if let Some(tally_file) = args.tally_file {
        config.tally_file = tally_file;
    }
    if let Some(delay) = args.search_delay_ms {
        config.search_delay_ms = delay;
    }
    config.validate()?;

    let store = FileTallyStore::new(&config.tally_file);
    let rng = SessionRng::from_random();
    log!("Session seed {}", rng.seed());

    let mut game = GameLoop::new(
        rng,
        config.session_settings(),
        store,
        Duration::from_millis(config.search_delay_ms),
    );
    game.load_tallies(args.reset_tallies)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    game.run(stdin.lock(), stdout.lock())?;

    log!("Bye");
    Ok(())
}
