use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::text::{aliases, slugify};

/// Decimal places kept for emitted coordinates.
const COORD_PRECISION: f64 = 1_000_000.0;

/// One league page to scrape. Supplied by configuration, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueDescriptor {
    pub name: String,
    pub country: String,
    pub code: String,
    pub tier: u32,
    pub url: String,
}

impl LeagueDescriptor {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        code: impl Into<String>,
        tier: u32,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            code: code.into(),
            tier,
            url: url.into(),
        }
    }
}

/// Canonical club entry as written to `clubs.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubRecord {
    pub id: String,
    pub name: String,
    pub country: String,
    #[serde(rename = "league")]
    pub league_code: String,
    pub tier: u32,
    pub lat: f64,
    pub lon: f64,
    pub ground: String,
    pub aliases: BTreeSet<String>,
    #[serde(rename = "wikipedia")]
    pub source_ref: String,
    #[serde(rename = "ground_wikipedia")]
    pub location_ref: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Fully resolved facts about a club, ready to become a [`ClubRecord`].
#[derive(Debug, Clone)]
pub struct ResolvedClub<'a> {
    pub league: &'a LeagueDescriptor,
    pub name: &'a str,
    pub ground: &'a str,
    pub lat: f64,
    pub lon: f64,
    pub source_ref: &'a str,
    pub location_ref: &'a str,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("missing value for '{0}'")]
    EmptyField(&'static str),

    #[error("latitude {0} outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("longitude {0} outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("tier must be a positive integer")]
    ZeroTier,

    #[error("alias set is empty")]
    NoAliases,
}

impl ClubRecord {
    /// Build a record once name, ground and coordinates are all known.
    pub fn build(club: ResolvedClub<'_>) -> Result<Self, RecordError> {
        let record = Self {
            id: slugify(club.name),
            name: club.name.trim().to_string(),
            country: club.league.country.clone(),
            league_code: club.league.code.clone(),
            tier: club.league.tier,
            lat: round_coord(club.lat),
            lon: round_coord(club.lon),
            ground: club.ground.trim().to_string(),
            aliases: aliases(club.name),
            source_ref: club.source_ref.to_string(),
            location_ref: club.location_ref.to_string(),
            logo: None,
        };
        record.validate()?;
        Ok(record)
    }

    /// Check the invariants every persisted record must hold.
    pub fn validate(&self) -> Result<(), RecordError> {
        let required = [
            ("id", &self.id),
            ("name", &self.name),
            ("country", &self.country),
            ("league", &self.league_code),
            ("ground", &self.ground),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(RecordError::EmptyField(field));
            }
        }
        if self.tier == 0 {
            return Err(RecordError::ZeroTier);
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(RecordError::LatitudeOutOfRange(self.lat));
        }
        if !(-180.0..=180.0).contains(&self.lon) {
            return Err(RecordError::LongitudeOutOfRange(self.lon));
        }
        if self.aliases.is_empty() {
            return Err(RecordError::NoAliases);
        }
        Ok(())
    }
}

fn round_coord(value: f64) -> f64 {
    (value * COORD_PRECISION).round() / COORD_PRECISION
}

/// Which matcher tier produced an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    Exact,
    Containment,
    BaseNameContainment,
    TokenOverlap,
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MatchTier::Exact => "exact",
            MatchTier::Containment => "containment",
            MatchTier::BaseNameContainment => "base-name containment",
            MatchTier::TokenOverlap => "token overlap",
        };
        f.write_str(label)
    }
}

/// A club paired with the asset chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub club_id: String,
    pub asset_path: String,
    pub tier: MatchTier,
}
