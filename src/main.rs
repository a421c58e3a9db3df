mod command;
use crate::command::{Action, Command, RunArgs, SpectateArgs, USAGE};
use anyhow::Context;
use gridsnake::config::Config;
use gridsnake::leaderboard::{Leaderboard, NullSink};
use gridsnake::options::Options;
use gridsnake::session::{Pilot, Session, Spectator};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cmd = match Command::from_parser(lexopt::Parser::from_env()) {
        Ok(cmd) => cmd,
        Err(e) => {
            eprintln!("gridsnake: {e}");
            eprintln!("Run `gridsnake --help` for usage.");
            return ExitCode::from(2);
        }
    };
    match cmd {
        Command::Help => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("gridsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Play { config, action } => play_exit(play(config, action)),
    }
}

fn play_exit(r: anyhow::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridsnake: {e:?}");
            ExitCode::from(2)
        }
    }
}

fn play(config_path: Option<PathBuf>, action: Action) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    match action {
        Action::Run(args) => run(&config, args),
        Action::Spectate(args) => spectate(&config, args),
    }
}

/// Load the configuration file given on the command line or, if there was
/// none, the one at the default location if it exists
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let (path, allow_missing) = match path {
        Some(p) => (p, false),
        None => match Config::default_path() {
            Ok(p) => (p, true),
            Err(e) => {
                log::warn!("{e}; using default configuration");
                return Ok(Config::default());
            }
        },
    };
    Config::load(&path, allow_missing)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Return the seed given on the command line or, failing that, a random one
fn resolve_seed(seed: Option<u64>) -> u64 {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::info!("Using RNG seed {seed}");
    seed
}

fn run(config: &Config, args: RunArgs) -> anyhow::Result<()> {
    let options = args.options(config);
    let seed = resolve_seed(args.seed);
    let rng = StdRng::seed_from_u64(seed);
    let mut session = Session::new("autopilot", options, Pilot::Autopilot, rng);
    let ticks = session.run(args.max_ticks, &mut NullSink);
    let state = session.state();
    if args.json {
        let out = serde_json::to_string_pretty(state).context("failed to serialize game state")?;
        println!("{out}");
    } else {
        println!("Options: {options}");
        println!("Seed:    {seed}");
        println!("Ticks:   {ticks}");
        println!("Score:   {}", state.score);
        println!("Length:  {}", state.snake.len());
        if state.game_over {
            println!("Result:  game over at {}", state.snake.head());
        } else {
            println!("Result:  still alive after {ticks} ticks");
        }
    }
    Ok(())
}

fn spectate(config: &Config, args: SpectateArgs) -> anyhow::Result<()> {
    let settings = &config.spectate;
    anyhow::ensure!(
        !settings.players.is_empty(),
        "no players configured to spectate"
    );
    let seed = resolve_seed(args.seed);
    let mut spectator = Spectator::new();
    for (i, player) in (0u64..).zip(&settings.players) {
        spectator.add(
            player.name.as_str(),
            Options::new(player.mode, settings.grid_size),
            StdRng::seed_from_u64(seed.wrapping_add(i)),
        );
    }
    let ticks = args.ticks(settings);
    let mut board = Leaderboard::new();
    for _ in 0..ticks {
        spectator.tick(&mut board);
    }
    if args.json {
        let out = serde_json::to_string_pretty(&board)
            .context("failed to serialize leaderboard")?;
        println!("{out}");
        return Ok(());
    }
    println!("Live games after {ticks} ticks (seed {seed}):");
    for s in spectator.sessions() {
        let status = if s.state().game_over {
            "  (game over)"
        } else {
            ""
        };
        println!(
            "  {:<16} {:<5}  score {:>6}{status}",
            s.player(),
            s.options().mode,
            s.state().score
        );
    }
    println!();
    println!("Finished games: {}", board.len());
    for entry in board.entries(None) {
        println!(
            "  #{:<4} {:<16} {:<5}  score {:>6}",
            entry.id, entry.player, entry.mode, entry.score
        );
    }
    for (mode, best) in board.best_scores() {
        if let Some(best) = best {
            println!("Best in {mode} mode: {best}");
        }
    }
    Ok(())
}
