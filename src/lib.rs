//! Build a canonical football club dataset from wiki pages and attach badge
//! images to it by fuzzy name matching.

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod matcher;
pub mod model;
pub mod pipeline;
pub mod store;
pub mod text;

pub use config::Config;
pub use error::{AppError, Result};
pub use model::{ClubRecord, LeagueDescriptor, MatchResult, MatchTier};
