//! Where finished games report their scores
use crate::engine::BoundaryMode;
use enum_map::EnumMap;
use serde::{ser::Serializer, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Receiver of final scores.  A driver calls this once per game, after it
/// sees the game end.
pub trait ScoreSink {
    fn submit_score(&mut self, player: &str, score: u32, mode: BoundaryMode);
}

/// A `ScoreSink` that throws every score away
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NullSink;

impl ScoreSink for NullSink {
    fn submit_score(&mut self, _player: &str, _score: u32, _mode: BoundaryMode) {}
}

/// In-memory table of submitted scores
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    next_id: u64,
}

impl Leaderboard {
    pub fn new() -> Leaderboard {
        Leaderboard::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entries for `mode` (or for all modes if `None`), highest
    /// score first.  Equal scores are listed in the order they were
    /// submitted.
    pub fn entries(&self, mode: Option<BoundaryMode>) -> Vec<&LeaderboardEntry> {
        let mut entries = self
            .entries
            .iter()
            .filter(|e| mode.is_none_or(|m| e.mode == m))
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Return the highest score recorded for each mode
    pub fn best_scores(&self) -> EnumMap<BoundaryMode, Option<u32>> {
        let mut best = EnumMap::<BoundaryMode, Option<u32>>::default();
        for e in &self.entries {
            let slot = &mut best[e.mode];
            *slot = Some(slot.map_or(e.score, |s| s.max(e.score)));
        }
        best
    }
}

impl ScoreSink for Leaderboard {
    fn submit_score(&mut self, player: &str, score: u32, mode: BoundaryMode) {
        self.next_id += 1;
        log::debug!("Recording score {score} for {player:?} in {mode} mode");
        self.entries.push(LeaderboardEntry {
            id: self.next_id,
            player: player.to_owned(),
            score,
            mode,
            submitted: SystemTime::now(),
        });
    }
}

impl Serialize for Leaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries(None).serialize(serializer)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// Position of the entry in submission order, starting from 1
    pub id: u64,
    pub player: String,
    pub score: u32,
    pub mode: BoundaryMode,

    /// When the score was submitted.  Serialized as `timestamp`, in whole
    /// seconds since the Unix epoch.
    #[serde(rename = "timestamp", serialize_with = "serialize_unix_seconds")]
    pub submitted: SystemTime,
}

fn serialize_unix_seconds<S: Serializer>(t: &SystemTime, serializer: S) -> Result<S::Ok, S::Error> {
    // Pre-epoch times serialize as 0
    let secs = t.duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs());
    serializer.serialize_u64(secs)
}
