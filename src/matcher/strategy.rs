//! Individual matching tiers. Each is a pure function over the same-group
//! candidate slice and returns the index of its pick.

use std::collections::HashSet;

use crate::assets::AssetDescriptor;
use crate::model::MatchTier;
use crate::text::{StopWords, base_tokens, normalize};

/// A name being matched, pre-folded once for every tier.
#[derive(Debug, Clone)]
pub struct Target {
    pub name: String,
    pub normalized: String,
    /// Stop-word-free tokens joined with `_`, in name order.
    pub base: String,
    pub tokens: HashSet<String>,
}

impl Target {
    pub fn new(name: &str, stop_words: &StopWords) -> Self {
        let base = base_tokens(name, stop_words);
        Self {
            name: name.to_string(),
            normalized: normalize(name),
            tokens: base.iter().cloned().collect(),
            base: base.join("_"),
        }
    }
}

pub type StrategyFn = fn(&Target, &[&AssetDescriptor]) -> Option<usize>;

#[derive(Clone, Copy)]
pub struct MatchStrategy {
    pub tier: MatchTier,
    pub find: StrategyFn,
}

/// Tiers in the order they are tried.
pub const STRATEGIES: [MatchStrategy; 4] = [
    MatchStrategy {
        tier: MatchTier::Exact,
        find: exact,
    },
    MatchStrategy {
        tier: MatchTier::Containment,
        find: containment,
    },
    MatchStrategy {
        tier: MatchTier::BaseNameContainment,
        find: base_name_containment,
    },
    MatchStrategy {
        tier: MatchTier::TokenOverlap,
        find: token_overlap,
    },
];

pub fn exact(target: &Target, candidates: &[&AssetDescriptor]) -> Option<usize> {
    if target.normalized.is_empty() {
        return None;
    }
    candidates.iter().position(|c| c.stem == target.normalized)
}

pub fn containment(target: &Target, candidates: &[&AssetDescriptor]) -> Option<usize> {
    if target.normalized.is_empty() {
        return None;
    }
    candidates
        .iter()
        .position(|c| c.stem.contains(target.normalized.as_str()))
}

pub fn base_name_containment(target: &Target, candidates: &[&AssetDescriptor]) -> Option<usize> {
    if target.base.is_empty() {
        return None;
    }
    candidates
        .iter()
        .position(|c| c.stem.contains(target.base.as_str()))
}

/// Largest shared token count wins, at least one token required.
///
/// Ties go to the earliest candidate in pool order. That is a plain,
/// deterministic rule rather than a judgement of which tie is better; it is
/// only reproducible because the scanner sorts the pool.
pub fn token_overlap(target: &Target, candidates: &[&AssetDescriptor]) -> Option<usize> {
    let mut best = None;
    let mut best_score = 0;

    for (index, candidate) in candidates.iter().enumerate() {
        let score = target.tokens.intersection(&candidate.tokens).count();
        if score > best_score {
            best_score = score;
            best = Some(index);
        }
    }

    best
}
