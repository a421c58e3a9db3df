//! A grid-based Snake simulation.
//!
//! The heart of the crate is [`engine`]: a set of pure functions that compute
//! the next [`GameState`][engine::GameState] from the current one, handle
//! collisions, food & scoring in either of two boundary modes, and pick moves
//! for a greedy autopilot.  Everything else (the [`session`] drivers, the
//! in-memory [`leaderboard`], and [`config`] loading) exists to feed the engine
//! ticks and collect its results.
pub mod config;
pub mod consts;
pub mod engine;
pub mod leaderboard;
pub mod options;
pub mod session;
