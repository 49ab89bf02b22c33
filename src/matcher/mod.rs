//! Resolve club names to scanned asset files.
//!
//! Tiers run in [`STRATEGIES`] order and the first one with a pick wins.
//! A club without any pick is reported as missing, never as an error.

pub mod strategy;

pub use strategy::{MatchStrategy, STRATEGIES, Target};

use tracing::{info, warn};

use crate::assets::AssetDescriptor;
use crate::model::{ClubRecord, MatchResult, MatchTier};
use crate::text::StopWords;

/// The asset a target resolved to and the tier that found it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMatch<'a> {
    pub asset: &'a AssetDescriptor,
    pub tier: MatchTier,
}

#[derive(Debug, Clone, Default)]
pub struct Matcher {
    stop_words: StopWords,
}

impl Matcher {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Best asset for `target_name` among `candidates` of `target_group`.
    pub fn resolve<'a>(
        &self,
        target_name: &str,
        target_group: &str,
        candidates: &'a [AssetDescriptor],
    ) -> Option<AssetMatch<'a>> {
        let target = Target::new(target_name, &self.stop_words);
        let same_group: Vec<&AssetDescriptor> = candidates
            .iter()
            .filter(|c| c.group == target_group)
            .collect();

        STRATEGIES.iter().find_map(|strategy| {
            (strategy.find)(&target, &same_group).map(|index| AssetMatch {
                asset: same_group[index],
                tier: strategy.tier,
            })
        })
    }
}

#[derive(Debug, Default)]
pub struct AssignmentReport {
    pub matches: Vec<MatchResult>,
    /// Ids of clubs left without an asset.
    pub unmatched: Vec<String>,
}

/// Attach a `logo` to every club whose league group has a matching asset.
///
/// Only `logo` is written; identity fields are left untouched.
pub fn assign_assets(
    clubs: &mut [ClubRecord],
    assets: &[AssetDescriptor],
    matcher: &Matcher,
) -> AssignmentReport {
    let mut report = AssignmentReport::default();

    for club in clubs.iter_mut() {
        match matcher.resolve(&club.name, &club.league_code, assets) {
            Some(found) => {
                info!("[OK] {} -> {} ({})", club.name, found.asset.path, found.tier);
                club.logo = Some(found.asset.path.clone());
                report.matches.push(MatchResult {
                    club_id: club.id.clone(),
                    asset_path: found.asset.path.clone(),
                    tier: found.tier,
                });
            }
            None => {
                warn!("[MISS] {}", club.name);
                report.unmatched.push(club.id.clone());
            }
        }
    }

    report
}
