use thiserror::Error;

use crate::fetcher::FetchError;
use crate::model::{ClubRecord, RecordError};

/// Why a single club produced no record.
#[derive(Debug, Error)]
pub enum DropReason {
    #[error("no ground")]
    NoGround,

    #[error("no coordinates for ground: {ground}")]
    NoCoordinates { ground: String },

    #[error("transport failure: {0}")]
    Transport(#[from] FetchError),

    #[error("invalid record: {0}")]
    InvalidRecord(#[from] RecordError),
}

impl DropReason {
    /// Expected markup was missing, as opposed to a network problem.
    pub fn is_structural(&self) -> bool {
        !matches!(self, DropReason::Transport(_))
    }
}

/// Why a whole league produced no clubs.
#[derive(Debug, Error)]
pub enum LeagueFailure {
    #[error("no standings table found (page structure changed?)")]
    NoStandingsTable,

    #[error("transport failure: {0}")]
    Transport(#[from] FetchError),
}

#[derive(Debug)]
pub struct DroppedClub {
    pub league_code: String,
    pub name: String,
    pub reason: DropReason,
}

#[derive(Debug)]
pub struct FailedLeague {
    pub league_code: String,
    pub name: String,
    pub reason: LeagueFailure,
}

/// Outcome of a full scraping run.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Sorted by (country, tier, name).
    pub clubs: Vec<ClubRecord>,
    pub dropped: Vec<DroppedClub>,
    pub failed_leagues: Vec<FailedLeague>,
    /// Records replaced by a later record with the same id.
    pub collisions: usize,
}

impl ScrapeReport {
    pub fn summary(&self) -> String {
        format!(
            "{} clubs, {} dropped, {} leagues failed, {} id collisions",
            self.clubs.len(),
            self.dropped.len(),
            self.failed_leagues.len(),
            self.collisions
        )
    }
}
