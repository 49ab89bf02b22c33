use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::extractor::{
    Document, ROW, TABLE, element_text, first_article_link, has_class_containing,
    policy::ExtractionPolicy,
};

static LABEL: Lazy<Selector> = Lazy::new(|| Selector::parse("th").unwrap());
static VALUE: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());

/// Value of an infobox row, with the article it links to when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValue {
    pub text: String,
    pub link: Option<Url>,
}

/// Look up the first infobox row labelled with any of `labels`.
///
/// Labels compare case-insensitively against the whole label cell. Only the
/// first matching row is considered: a linked value returns the link text
/// and its absolute URL, otherwise the cell's plain text with no link.
pub fn extract_field(
    doc: &Document,
    labels: &[String],
    policy: &ExtractionPolicy,
) -> Option<FieldValue> {
    let html = Html::parse_document(&doc.html);
    let infobox = html
        .select(&TABLE)
        .find(|t| has_class_containing(*t, &policy.infobox_class))?;

    let wanted: Vec<String> = labels.iter().map(|l| l.trim().to_lowercase()).collect();

    let value = infobox.select(&ROW).find_map(|row| {
        let label = row.select(&LABEL).next()?;
        let value = row.select(&VALUE).next()?;
        wanted
            .contains(&element_text(label).to_lowercase())
            .then_some(value)
    })?;

    if let Some((text, url)) = first_article_link(value, &doc.url, policy) {
        return Some(FieldValue {
            text,
            link: Some(url),
        });
    }

    let text = element_text(value);
    (!text.is_empty()).then_some(FieldValue { text, link: None })
}
