pub mod coords;
pub mod infobox;
pub mod policy;
pub mod table;

#[cfg(test)]
mod tests;

pub use coords::{Coordinates, extract_coordinates};
pub use infobox::{FieldValue, extract_field};
pub use policy::{ExtractionPolicy, LinkRule};
pub use table::{EntityLink, extract_entity_links};

use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};
use url::Url;

/// A fetched page and the URL its relative links resolve against.
#[derive(Debug, Clone)]
pub struct Document {
    pub url: Url,
    pub html: String,
}

impl Document {
    pub fn new(url: Url, html: impl Into<String>) -> Self {
        Self {
            url,
            html: html.into(),
        }
    }
}

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a[href]").unwrap());

/// Trimmed text fragments of `element` joined by single spaces.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_class_containing(element: ElementRef<'_>, marker: &str) -> bool {
    element.value().classes().any(|c| c.contains(marker))
}

/// First anchor under `element` that the policy accepts, as (text, absolute url).
fn first_article_link(
    element: ElementRef<'_>,
    base: &Url,
    policy: &ExtractionPolicy,
) -> Option<(String, Url)> {
    element.select(&ANCHOR).find_map(|a| {
        let href = a.value().attr("href")?;
        if !policy.is_article_link(href) {
            return None;
        }
        let url = base.join(href).ok()?;
        Some((element_text(a), url))
    })
}
