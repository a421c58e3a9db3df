use gridsnake::config::{Config, SpectateConfig};
use gridsnake::consts;
use gridsnake::engine::{BoundaryMode, GridSize};
use gridsnake::options::Options;
use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) static USAGE: &str = "\
Usage: gridsnake [-c|--config FILE] <command> [options]

Commands:
  run        Play one autopilot game until it ends or hits the tick limit
  spectate   Advance every configured autopilot session, restarting games
             as they end, and show the resulting scores

Options for run:
  -m, --mode <walls|wrap>    Boundary mode
  -g, --grid-size <N>        Width & height of the grid
  -s, --seed <N>             Seed for food placement
  -t, --max-ticks <N>        Stop after this many ticks
  -J, --json                 Print the final game state as JSON

Options for spectate:
  -t, --ticks <N>            Number of ticks to advance the sessions by
  -s, --seed <N>             Seed for food placement
  -J, --json                 Print the leaderboard as JSON

  -h, --help                 Show this message and exit
  -V, --version              Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Help,
    Version,
    Play {
        config: Option<PathBuf>,
        action: Action,
    },
}

impl Command {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Value(name) => {
                    let action = match name.string()?.as_str() {
                        "run" => RunArgs::from_parser(&mut parser)?.map(Action::Run),
                        "spectate" => SpectateArgs::from_parser(&mut parser)?.map(Action::Spectate),
                        other => return Err(format!("unknown command {other:?}").into()),
                    };
                    let Some(action) = action else {
                        return Ok(Command::Help);
                    };
                    return Ok(Command::Play { config, action });
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Err("no command given".into())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Run(RunArgs),
    Spectate(SpectateArgs),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct RunArgs {
    pub(crate) mode: Option<BoundaryMode>,
    pub(crate) grid_size: Option<GridSize>,
    pub(crate) seed: Option<u64>,
    pub(crate) max_ticks: u64,
    pub(crate) json: bool,
}

impl RunArgs {
    /// Parse the options following `run`.  Returns `None` if help was
    /// requested.
    fn from_parser(parser: &mut Parser) -> Result<Option<RunArgs>, lexopt::Error> {
        let mut args = RunArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(None),
                Arg::Short('m') | Arg::Long("mode") => {
                    args.mode = Some(parser.value()?.parse()?);
                }
                Arg::Short('g') | Arg::Long("grid-size") => {
                    args.grid_size = Some(parser.value()?.parse()?);
                }
                Arg::Short('s') | Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('t') | Arg::Long("max-ticks") => {
                    args.max_ticks = parser.value()?.parse()?;
                }
                Arg::Short('J') | Arg::Long("json") => args.json = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }

    /// Return the game options to play with: those given on the command line,
    /// falling back to the configuration file's `[options]` for the rest
    pub(crate) fn options(&self, config: &Config) -> Options {
        Options::new(
            self.mode.unwrap_or(config.options.mode),
            self.grid_size.unwrap_or(config.options.grid_size),
        )
    }
}

impl Default for RunArgs {
    fn default() -> RunArgs {
        RunArgs {
            mode: None,
            grid_size: None,
            seed: None,
            max_ticks: consts::DEFAULT_TICK_LIMIT,
            json: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct SpectateArgs {
    pub(crate) ticks: Option<u64>,
    pub(crate) seed: Option<u64>,
    pub(crate) json: bool,
}

impl SpectateArgs {
    /// Parse the options following `spectate`.  Returns `None` if help was
    /// requested.
    fn from_parser(parser: &mut Parser) -> Result<Option<SpectateArgs>, lexopt::Error> {
        let mut args = SpectateArgs::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(None),
                Arg::Short('t') | Arg::Long("ticks") => args.ticks = Some(parser.value()?.parse()?),
                Arg::Short('s') | Arg::Long("seed") => args.seed = Some(parser.value()?.parse()?),
                Arg::Short('J') | Arg::Long("json") => args.json = true,
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(args))
    }

    /// Return the number of ticks to spectate for
    pub(crate) fn ticks(&self, settings: &SpectateConfig) -> u64 {
        self.ticks.unwrap_or(settings.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_iter(
            std::iter::once("gridsnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn run_defaults() {
        assert_eq!(
            parse(&["run"]).unwrap(),
            Command::Play {
                config: None,
                action: Action::Run(RunArgs::default()),
            }
        );
    }

    #[test]
    fn run_all_options() {
        let cmd = parse(&[
            "--config",
            "snake.toml",
            "run",
            "--mode",
            "passthrough",
            "-g",
            "12",
            "--seed=42",
            "-t",
            "500",
            "--json",
        ])
        .unwrap();
        assert_eq!(
            cmd,
            Command::Play {
                config: Some(PathBuf::from("snake.toml")),
                action: Action::Run(RunArgs {
                    mode: Some(BoundaryMode::Wrap),
                    grid_size: GridSize::new(12),
                    seed: Some(42),
                    max_ticks: 500,
                    json: true,
                }),
            }
        );
    }

    #[test]
    fn spectate_options() {
        let cmd = parse(&["spectate", "-t", "30", "-J"]).unwrap();
        assert_eq!(
            cmd,
            Command::Play {
                config: None,
                action: Action::Spectate(SpectateArgs {
                    ticks: Some(30),
                    seed: None,
                    json: true,
                }),
            }
        );
    }

    #[rstest]
    #[case(&["--help"])]
    #[case(&["-h", "run"])]
    #[case(&["run", "-h"])]
    #[case(&["spectate", "--help"])]
    fn help(#[case] args: &[&str]) {
        assert_eq!(parse(args).unwrap(), Command::Help);
    }

    #[test]
    fn version() {
        assert_eq!(parse(&["-V"]).unwrap(), Command::Version);
    }

    #[rstest]
    #[case(None, None, BoundaryMode::Wrap, 30)]
    #[case(Some(BoundaryMode::Walls), None, BoundaryMode::Walls, 30)]
    #[case(None, GridSize::new(8), BoundaryMode::Wrap, 8)]
    #[case(Some(BoundaryMode::Walls), GridSize::new(8), BoundaryMode::Walls, 8)]
    fn run_options_override_config(
        #[case] mode: Option<BoundaryMode>,
        #[case] grid_size: Option<GridSize>,
        #[case] expected_mode: BoundaryMode,
        #[case] expected_size: u16,
    ) {
        let config = Config {
            options: Options::new(BoundaryMode::Wrap, GridSize::new(30).unwrap()),
            ..Config::default()
        };
        let args = RunArgs {
            mode,
            grid_size,
            ..RunArgs::default()
        };
        let options = args.options(&config);
        assert_eq!(options.mode, expected_mode);
        assert_eq!(options.grid_size.get(), expected_size);
    }

    #[test]
    fn run_options_default_config() {
        let options = RunArgs::default().options(&Config::default());
        assert_eq!(options, Options::default());
    }

    #[rstest]
    #[case(None, Some(75), 75)]
    #[case(Some(12), Some(75), 12)]
    #[case(None, None, consts::DEFAULT_SPECTATE_TICKS)]
    #[case(Some(12), None, 12)]
    fn spectate_ticks_override_config(
        #[case] flag: Option<u64>,
        #[case] configured: Option<u64>,
        #[case] expected: u64,
    ) {
        let mut settings = SpectateConfig::default();
        if let Some(t) = configured {
            settings.ticks = t;
        }
        let args = SpectateArgs {
            ticks: flag,
            ..SpectateArgs::default()
        };
        assert_eq!(args.ticks(&settings), expected);
    }

    #[rstest]
    #[case(&[])]
    #[case(&["fly"])]
    #[case(&["run", "--mode", "bounce"])]
    #[case(&["run", "--grid-size", "3"])]
    #[case(&["run", "--ticks", "3"])]
    #[case(&["spectate", "--mode", "walls"])]
    #[case(&["--json", "run"])]
    fn invalid(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
