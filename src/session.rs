//! Drivers that own a game's current state and feed it ticks
use crate::engine::{ai_direction, Direction, GameState};
use crate::leaderboard::ScoreSink;
use crate::options::Options;
use rand::Rng;

/// Who decides where the snake goes
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Pilot {
    /// Directions are supplied by the caller via [`Session::steer()`]
    #[default]
    Manual,

    /// Directions are chosen by [`ai_direction()`]
    Autopilot,
}

/// What happened during a call to [`Session::tick()`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TickOutcome {
    /// The snake moved and is still alive
    Running,

    /// The snake died on this tick
    GameOver { score: u32 },

    /// The game had already ended; nothing happened
    Finished,
}

/// A single game in progress along with everything needed to advance it.
///
/// The session owns its random number generator, so a session built from a
/// seeded generator always plays out the same way.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session<R> {
    /// Name that final scores are submitted under
    player: String,

    options: Options,
    pilot: Pilot,

    /// Source of food placements
    rng: R,

    /// The current game; replaced wholesale on every tick
    state: GameState,

    /// Latest direction requested via `steer()` and not yet used
    pending: Option<Direction>,

    /// Ticks since the current game started
    ticks: u64,
}

impl<R: Rng> Session<R> {
    pub fn new<S: Into<String>>(
        player: S,
        options: Options,
        pilot: Pilot,
        mut rng: R,
    ) -> Session<R> {
        let state = options.new_game(&mut rng);
        Session {
            player: player.into(),
            options,
            pilot,
            rng,
            state,
            pending: None,
            ticks: 0,
        }
    }

    /// Request that the snake turn in `direction` on the next tick.  Only the
    /// most recent request is kept.  Ignored when on autopilot.
    pub fn steer(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Advance the game by one tick.  If this ends the game, the final score
    /// is submitted to `sink`.
    pub fn tick<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) -> TickOutcome {
        if self.state.game_over {
            return TickOutcome::Finished;
        }
        let requested = match self.pilot {
            Pilot::Manual => self.pending.take(),
            Pilot::Autopilot => Some(ai_direction(&self.state)),
        };
        self.state = self.state.advance(requested, &mut self.rng);
        self.ticks += 1;
        log::trace!(
            "{}: tick {} head at {} heading {}",
            self.player,
            self.ticks,
            self.state.snake.head(),
            self.state.direction
        );
        if self.state.game_over {
            log::info!(
                "{}: game over after {} ticks with score {}",
                self.player,
                self.ticks,
                self.state.score
            );
            sink.submit_score(&self.player, self.state.score, self.options.mode);
            TickOutcome::GameOver {
                score: self.state.score,
            }
        } else {
            TickOutcome::Running
        }
    }

    /// Tick until the game ends or `max_ticks` ticks have elapsed.  Returns
    /// the number of ticks run.
    pub fn run<S: ScoreSink + ?Sized>(&mut self, max_ticks: u64, sink: &mut S) -> u64 {
        let mut ran = 0;
        while ran < max_ticks {
            match self.tick(sink) {
                TickOutcome::Running => ran += 1,
                TickOutcome::GameOver { .. } => {
                    ran += 1;
                    break;
                }
                TickOutcome::Finished => break,
            }
        }
        ran
    }

    /// Discard the current game and start a new one with the same options
    pub fn restart(&mut self) {
        log::debug!("{}: starting new game ({})", self.player, self.options);
        self.state = self.options.new_game(&mut self.rng);
        self.pending = None;
        self.ticks = 0;
    }
}

impl<R> Session<R> {
    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn pilot(&self) -> Pilot {
        self.pilot
    }

    /// Return the current game state.  The returned value is never modified
    /// by later ticks; they replace it.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of ticks since the current game started
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

/// A collection of autopilot games that are all advanced together, each one
/// starting over once it ends
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Spectator<R> {
    sessions: Vec<Session<R>>,
}

impl<R: Rng> Spectator<R> {
    pub fn new() -> Spectator<R> {
        Spectator {
            sessions: Vec::new(),
        }
    }

    pub fn add<S: Into<String>>(&mut self, player: S, options: Options, rng: R) {
        self.sessions.push(Session::new(player, options, Pilot::Autopilot, rng));
    }

    /// Advance every session by one tick.  A session whose game ended on an
    /// earlier tick is restarted instead of being advanced.
    pub fn tick<S: ScoreSink + ?Sized>(&mut self, sink: &mut S) {
        for session in &mut self.sessions {
            if session.state().game_over {
                session.restart();
            } else {
                let _ = session.tick(sink);
            }
        }
    }

    pub fn sessions(&self) -> &[Session<R>] {
        &self.sessions
    }
}
