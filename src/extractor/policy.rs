//! Markup heuristics, kept as data so they can be tuned from config and
//! tested against fixture pages in isolation.

use serde::{Deserialize, Serialize};

/// One check an anchor `href` must pass to count as an article link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum LinkRule {
    RequirePrefix(String),
    RejectPrefix(String),
    RejectContaining(String),
}

impl LinkRule {
    pub fn accepts(&self, href: &str) -> bool {
        match self {
            LinkRule::RequirePrefix(prefix) => href.starts_with(prefix.as_str()),
            LinkRule::RejectPrefix(prefix) => !href.starts_with(prefix.as_str()),
            LinkRule::RejectContaining(marker) => !href.contains(marker.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionPolicy {
    /// Class marking data tables (substring of a class token).
    pub data_table_class: String,
    /// A standings header must mention one of these...
    pub position_markers: Vec<String>,
    /// ...and one of these, which also locate the name column.
    pub team_markers: Vec<String>,
    pub infobox_class: String,
    /// Infobox labels that hold a club's home ground.
    pub ground_labels: Vec<String>,
    /// Exact class token of the decimal coordinate span.
    pub geo_class: String,
    pub article_prefix: String,
    /// Namespaces under the article prefix that are never articles.
    pub excluded_namespaces: Vec<String>,
    pub redlink_marker: String,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            data_table_class: "wikitable".into(),
            position_markers: vec!["pos".into()],
            team_markers: vec!["team".into(), "club".into()],
            infobox_class: "infobox".into(),
            ground_labels: vec!["ground".into(), "home ground".into(), "stadium".into()],
            geo_class: "geo".into(),
            article_prefix: "/wiki/".into(),
            excluded_namespaces: vec!["File:".into(), "Help:".into(), "Special:".into()],
            redlink_marker: "redlink=1".into(),
        }
    }
}

impl ExtractionPolicy {
    /// Ordered checks applied to every candidate `href`.
    pub fn link_rules(&self) -> Vec<LinkRule> {
        let mut rules = vec![
            LinkRule::RequirePrefix(self.article_prefix.clone()),
            LinkRule::RejectContaining(self.redlink_marker.clone()),
        ];
        rules.extend(
            self.excluded_namespaces
                .iter()
                .map(|ns| LinkRule::RejectPrefix(format!("{}{}", self.article_prefix, ns))),
        );
        rules
    }

    pub fn is_article_link(&self, href: &str) -> bool {
        !href.is_empty() && self.link_rules().iter().all(|rule| rule.accepts(href))
    }

    /// Whether concatenated, lowercased header text looks like a standings table.
    pub fn is_standings_header(&self, header_text: &str) -> bool {
        self.position_markers.iter().any(|m| header_text.contains(m.as_str()))
            && self.team_markers.iter().any(|m| header_text.contains(m.as_str()))
    }

    /// Index of the first column whose header names the team/club.
    pub fn team_column(&self, headers: &[String]) -> Option<usize> {
        headers.iter().position(|name| {
            self.team_markers
                .iter()
                .any(|m| name == m || name.contains(m.as_str()))
        })
    }
}
