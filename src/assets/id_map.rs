use std::collections::HashMap;
use std::path::Path;

use crate::error::{AppError, Result};
use crate::text::normalize;

/// Numeric asset id → normalized club name, read from `id|name` lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdMap(HashMap<String, String>);

impl IdMap {
    /// Lines without a `|` are ignored; a repeated id keeps the last name.
    pub fn parse(text: &str) -> Self {
        let map = text
            .lines()
            .filter_map(|line| line.split_once('|'))
            .map(|(id, name)| (id.trim().to_string(), normalize(name.trim())))
            .filter(|(id, name)| !id.is_empty() && !name.is_empty())
            .collect();
        Self(map)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AppError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace a known leading numeric id in `stem` with its club name.
    pub fn resolve_stem(&self, stem: &str) -> Option<String> {
        let digits = stem.len() - stem.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        let (id, rest) = stem.split_at(digits);
        let name = self.get(id)?;
        Some(normalize(&format!("{name} {rest}")))
    }
}
