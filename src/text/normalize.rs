use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// The only separator that survives normalization.
pub const SEPARATOR: char = '_';

/// Generic football naming boilerplate that carries no identity.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "fc", "afc", "united", "utd", "town", "city", "club", "football", "the", "f", "c",
];

static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*").unwrap());
static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s-]").unwrap());
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Tokens dropped before token comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            words
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS)
    }
}

fn is_separator(ch: char) -> bool {
    ch.is_ascii_whitespace() || matches!(ch, '_' | '-' | '/')
}

/// Fold text into a lowercase ASCII key joined by `_`.
///
/// Diacritics are removed through compatibility decomposition and any
/// remaining non-ASCII codepoint is dropped. Whitespace, `_`, `-` and `/`
/// act as word separators; other punctuation is deleted outright, so
/// `"F.C."` folds to `"fc"`. Idempotent, and never fails: input without any
/// alphanumerics yields the empty string.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.nfkd() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_separator = false;
            out.push(ch.to_ascii_lowercase());
        } else if is_separator(ch) {
            pending_separator = true;
        }
    }

    out
}

/// Normalized words of `text` with stop words removed, in name order.
pub fn base_tokens(text: &str, stop_words: &StopWords) -> Vec<String> {
    normalize(text)
        .split(SEPARATOR)
        .filter(|t| !t.is_empty() && !stop_words.contains(t))
        .map(str::to_string)
        .collect()
}

/// Deduplicated set of informative tokens in `text`.
pub fn tokenize(text: &str, stop_words: &StopWords) -> HashSet<String> {
    base_tokens(text, stop_words).into_iter().collect()
}

/// Stable record id for a display name.
///
/// Lowercases, drops bracketed qualifiers such as `"(football club)"`,
/// strips non-word characters and joins the remaining words with `_`.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let unbracketed = BRACKETED.replace_all(&lowered, " ");
    let apostrophes = unbracketed.replace('\u{2019}', "'");
    let cleaned = NON_WORD.replace_all(&apostrophes, "");
    WHITESPACE
        .replace_all(cleaned.trim(), "_")
        .trim_matches('_')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_diacritics_and_punctuation() {
        assert_eq!(normalize("Atlético  Madrid"), "atletico_madrid");
        assert_eq!(normalize("Arsenal F.C."), "arsenal_fc");
        assert_eq!(normalize("  Stoke-on-Trent  "), "stoke_on_trent");
        assert_eq!(normalize("Brighton & Hove Albion"), "brighton_hove_albion");
        assert_eq!(normalize("arsenal_retro1"), "arsenal_retro1");
    }

    #[test]
    fn degenerate_input_is_empty_key() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" .,;!? "), "");
        assert_eq!(normalize("___"), "");
        assert_eq!(normalize("東京"), "");
    }

    #[test]
    fn normalize_is_idempotent_on_samples() {
        for sample in ["Queen's Park", "  A.F.C.  Wimbledon ", "Bohemian F.C. (Dublin)", "-x-"] {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn tokenize_drops_stop_words() {
        let stop = StopWords::default();
        let tokens = tokenize("Manchester United F.C.", &stop);
        assert_eq!(tokens, HashSet::from(["manchester".to_string()]));

        let tokens = tokenize("the_f_c_town", &stop);
        assert!(tokens.is_empty());
    }

    #[test]
    fn base_tokens_keep_order_and_duplicates() {
        let stop = StopWords::default();
        assert_eq!(
            base_tokens("Hamilton Academical Hamilton FC", &stop),
            vec!["hamilton", "academical", "hamilton"]
        );
    }

    #[test]
    fn custom_stop_words_are_normalized() {
        let stop = StopWords::new(["Rovers", "  "]);
        assert!(stop.contains("rovers"));
        assert!(!stop.contains(""));
        assert!(tokenize("Bristol Rovers", &stop).contains("bristol"));
    }

    #[test]
    fn slugify_matches_record_ids() {
        assert_eq!(slugify("Arsenal F.C."), "arsenal_fc");
        assert_eq!(slugify("Bohemian F.C. (Dublin)"), "bohemian_fc");
        assert_eq!(slugify("Queen\u{2019}s Park"), "queens_park");
        assert_eq!(slugify("Brighton & Hove Albion"), "brighton_hove_albion");
        assert_eq!(slugify("Stoke-on-Trent"), "stoke-on-trent");
    }
}
