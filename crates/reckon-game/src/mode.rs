use std::{
    str::FromStr,
    time::{Duration, Instant},
};

/// Time allowed in timed modes.
pub const TIME_LIMIT: Duration = Duration::from_secs(60);

/// How a game is played.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant,
)]
pub enum GameMode {
    /// Untimed play, one puzzle at a time.
    #[default]
    #[display("classic")]
    Classic,
    /// One puzzle against a countdown.
    #[display("timer")]
    Timer,
    /// As many puzzles as possible before the countdown runs out, counting
    /// solved and skipped puzzles.
    #[display("challenge")]
    Challenge,
}

impl GameMode {
    /// All modes.
    pub const ALL: [Self; 3] = [Self::Classic, Self::Timer, Self::Challenge];

    /// Returns `true` if the mode runs a countdown.
    #[must_use]
    pub fn is_timed(self) -> bool {
        !self.is_classic()
    }
}

/// Error returned when parsing an unknown [`GameMode`] name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown game mode: {input:?} (expected classic, timer, or challenge)")]
pub struct ParseGameModeError {
    input: String,
}

impl FromStr for GameMode {
    type Err = ParseGameModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGameModeError {
                input: s.to_owned(),
            })
    }
}

/// A countdown measured from a caller-supplied start instant.
///
/// The countdown never reads the clock itself; the caller passes the current
/// instant to [`update`](Self::update).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    started_at: Instant,
    limit: Duration,
    remaining: Duration,
}

impl Countdown {
    /// Starts a countdown of `limit` at `now`.
    #[must_use]
    pub fn start(now: Instant, limit: Duration) -> Self {
        Self {
            started_at: now,
            limit,
            remaining: limit,
        }
    }

    /// Returns when the countdown started.
    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Returns the total time allowed.
    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns the time remaining as of the last update.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns `true` if no time remained at the last update.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Recomputes the remaining time as of `now` and returns it.
    pub fn update(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.remaining = self.limit.saturating_sub(elapsed);
        self.remaining
    }
}

/// Counters kept across puzzles in challenge mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeStats {
    /// Puzzles solved before moving on.
    pub puzzles_solved: u32,
    /// Puzzles skipped unsolved.
    pub puzzles_skipped: u32,
}
