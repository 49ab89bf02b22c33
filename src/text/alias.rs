use std::collections::BTreeSet;

use crate::text::normalize::{SEPARATOR, normalize};

/// Legal/organizational suffixes, as normalized word runs.
const SUFFIX_PHRASES: &[&[&str]] = &[&["football", "club"], &["f", "c"], &["fc"]];

/// Alternate spellings a club might be filed under.
///
/// The result always holds `normalize(name)`. Other variants are the name
/// without its suffix phrases, an initialism for multi-word names and an
/// `&` to `and` rewrite; empty variants are dropped.
pub fn aliases(name: &str) -> BTreeSet<String> {
    let full = normalize(name);
    let words: Vec<&str> = full.split(SEPARATOR).filter(|w| !w.is_empty()).collect();

    let mut variants = vec![strip_suffix_phrases(&words).join("_")];

    if words.len() >= 2 {
        variants.push(words.iter().filter_map(|w| w.chars().next()).collect());
    }

    variants.push(normalize(&name.replace('&', " and ")));

    let mut out: BTreeSet<String> = variants
        .into_iter()
        .map(|v| normalize(&v))
        .filter(|v| !v.is_empty())
        .collect();
    out.insert(full);
    out
}

fn strip_suffix_phrases<'a>(words: &[&'a str]) -> Vec<&'a str> {
    let mut kept = Vec::with_capacity(words.len());
    let mut i = 0;

    'words: while i < words.len() {
        for phrase in SUFFIX_PHRASES {
            if words[i..].starts_with(phrase) {
                i += phrase.len();
                continue 'words;
            }
        }
        kept.push(words[i]);
        i += 1;
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn suffixes_initialism_and_ampersand() {
        assert_eq!(
            aliases("Brighton & Hove Albion F.C."),
            set(&[
                "brighton_hove_albion_fc",
                "brighton_hove_albion",
                "bhaf",
                "brighton_and_hove_albion_fc",
            ])
        );
    }

    #[test]
    fn spelled_out_suffix_is_trimmed() {
        let got = aliases("Dundee Football Club");
        assert!(got.contains("dundee_football_club"));
        assert!(got.contains("dundee"));
        assert!(got.contains("dfc"));
    }

    #[test]
    fn single_word_has_no_initialism() {
        assert_eq!(aliases("Arsenal"), set(&["arsenal"]));
    }

    #[test]
    fn always_contains_normalized_name() {
        for name in ["", "F.C.", "Hibernian", "Śląsk Wrocław", "&"] {
            let got = aliases(name);
            assert!(!got.is_empty());
            assert!(got.contains(&normalize(name)));
        }
    }
}
