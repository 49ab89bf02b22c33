use scraper::{ElementRef, Html};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

use crate::extractor::{
    CELL, Document, ROW, TABLE, element_text, first_article_link, has_class_containing,
    policy::ExtractionPolicy,
};

/// A participant named in a standings table and its article URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityLink {
    pub name: String,
    pub url: Url,
}

/// Collect (name, article link) pairs from every standings-like table.
///
/// Pairs are deduplicated by URL with the first occurrence kept. Rows whose
/// name cell has no article link are skipped. A page without a qualifying
/// table yields an empty list; deciding whether that is a failure is left
/// to the caller.
pub fn extract_entity_links(doc: &Document, policy: &ExtractionPolicy) -> Vec<EntityLink> {
    let html = Html::parse_document(&doc.html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    let tables = html
        .select(&TABLE)
        .filter(|t| has_class_containing(*t, &policy.data_table_class));

    for table in tables {
        let Some(column) = standings_column(table, policy) else {
            continue;
        };

        for row in table.select(&ROW).skip(1) {
            let Some(cell) = row.select(&CELL).nth(column) else {
                continue;
            };
            let Some((name, url)) = first_article_link(cell, &doc.url, policy) else {
                continue;
            };
            if name.is_empty() || !seen.insert(url.clone()) {
                continue;
            }
            links.push(EntityLink { name, url });
        }
    }

    debug!(url = %doc.url, count = links.len(), "extracted entity links");
    links
}

/// Name column of `table` if it qualifies as a standings table.
fn standings_column(table: ElementRef<'_>, policy: &ExtractionPolicy) -> Option<usize> {
    let header_text = table
        .select(&CELL)
        .filter(|c| c.value().name() == "th")
        .map(|th| element_text(th).to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    if !policy.is_standings_header(&header_text) {
        return None;
    }

    let header_row = table.select(&ROW).next()?;
    let names: Vec<String> = header_row
        .select(&CELL)
        .map(|c| element_text(c).to_lowercase())
        .collect();

    policy.team_column(&names)
}
