pub mod id_map;

pub use id_map::IdMap;

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{AppError, Result};
use crate::text::{StopWords, normalize, tokenize};

/// One image file found under `root/<group>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub group: String,
    /// `<root>/<group>/<file>`, always with forward slashes.
    pub path: String,
    pub stem: String,
    pub tokens: HashSet<String>,
}

impl AssetDescriptor {
    pub fn new(group: &str, path: &str, raw_stem: &str, stop_words: &StopWords) -> Self {
        Self {
            group: group.to_string(),
            path: path.to_string(),
            stem: normalize(raw_stem),
            tokens: tokenize(raw_stem, stop_words),
        }
    }
}

pub struct ScanOptions<'a> {
    pub extensions: &'a [String],
    pub stop_words: &'a StopWords,
    pub id_map: Option<&'a IdMap>,
}

/// Scan `root/<group>/<file>` image files into descriptors.
///
/// The pool comes back sorted by (group, path) so that every later
/// first-come tie-break is reproducible across filesystems.
pub fn scan_assets(root: &Path, options: &ScanOptions<'_>) -> Result<Vec<AssetDescriptor>> {
    if !root.is_dir() {
        return Err(AppError::FolderNotFound(root.display().to_string()));
    }

    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut assets = Vec::new();

    for entry in WalkDir::new(root)
        .min_depth(2)
        .max_depth(2)
        .into_iter()
        .filter_map(readable)
    {
        let path = entry.path();
        if !entry.file_type().is_file() || !has_extension(path, options.extensions) {
            continue;
        }

        let (Some(group), Some(file_name), Some(stem)) = (
            path.parent().and_then(Path::file_name),
            path.file_name(),
            path.file_stem(),
        ) else {
            continue;
        };
        let group = group.to_string_lossy();
        let file_name = file_name.to_string_lossy();
        let stem = stem.to_string_lossy();

        let relative = if root_name.is_empty() {
            format!("{group}/{file_name}")
        } else {
            format!("{root_name}/{group}/{file_name}")
        };

        let mut asset = AssetDescriptor::new(&group, &relative, &stem, options.stop_words);
        if let Some(resolved) = options.id_map.and_then(|map| map.resolve_stem(&stem)) {
            asset.tokens = tokenize(&resolved, options.stop_words);
            asset.stem = resolved;
        }
        assets.push(asset);
    }

    assets.sort_by(|a, b| (&a.group, &a.path).cmp(&(&b.group, &b.path)));
    debug!(root = %root.display(), count = assets.len(), "scanned assets");
    Ok(assets)
}

/// Pass a walk entry through, logging the ones that could not be read.
fn readable(entry: walkdir::Result<DirEntry>) -> Option<DirEntry> {
    match entry {
        Ok(entry) => Some(entry),
        Err(e) => {
            warn!("[SKIP] unreadable asset entry: {}", e);
            None
        }
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_normalizes_stem() {
        let stop = StopWords::default();
        let asset = AssetDescriptor::new("PL", "logos/PL/Arsenal FC.png", "Arsenal FC", &stop);
        assert_eq!(asset.stem, "arsenal_fc");
        assert_eq!(asset.tokens, HashSet::from(["arsenal".to_string()]));
    }

    #[test]
    fn test_extension_check_is_case_insensitive() {
        let exts = vec!["png".to_string(), "svg".to_string()];
        assert!(has_extension(Path::new("a/b/c.PNG"), &exts));
        assert!(has_extension(Path::new("a/b/c.svg"), &exts));
        assert!(!has_extension(Path::new("a/b/c.txt"), &exts));
        assert!(!has_extension(Path::new("a/b/png"), &exts));
    }

    #[test]
    fn test_walk_errors_are_skipped() {
        let entry = WalkDir::new("/nonexistent/logos").into_iter().next().unwrap();
        assert!(entry.is_err());
        assert!(readable(entry).is_none());
    }

    #[test]
    fn test_scan_missing_root() {
        let stop = StopWords::default();
        let exts = vec!["png".to_string()];
        let options = ScanOptions {
            extensions: &exts,
            stop_words: &stop,
            id_map: None,
        };
        let result = scan_assets(Path::new("/nonexistent/logos"), &options);
        assert!(matches!(result, Err(AppError::FolderNotFound(_))));
    }
}
