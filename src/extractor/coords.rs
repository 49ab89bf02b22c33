use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::extractor::{Document, element_text, policy::ExtractionPolicy};

static SPAN: Lazy<Selector> = Lazy::new(|| Selector::parse("span").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Parse `"lat; lon"` decimal text. Anything else, including values
    /// outside the valid ranges, is rejected.
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split(';').map(str::trim);
        let lat = parts.next()?.parse::<f64>().ok()?;
        let lon = parts.next()?.parse::<f64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        let coords = Self { lat, lon };
        coords.in_range().then_some(coords)
    }

    fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Read the decimal coordinate marker of a location page.
///
/// Only the first marker is looked at; degrees-minutes-seconds markup is
/// not understood and yields `None`.
pub fn extract_coordinates(doc: &Document, policy: &ExtractionPolicy) -> Option<Coordinates> {
    let html = Html::parse_document(&doc.html);
    let marker = html
        .select(&SPAN)
        .find(|span| span.value().classes().any(|c| c == policy.geo_class))?;

    Coordinates::parse(&element_text(marker))
}
