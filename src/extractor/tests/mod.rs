use url::Url;

use crate::extractor::{
    Coordinates, Document, ExtractionPolicy, FieldValue, extract_coordinates, extract_entity_links,
    extract_field,
};

fn doc(url: &str, html: &str) -> Document {
    Document::new(Url::parse(url).unwrap(), html)
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const LEAGUE_PAGE: &str = r#"
<html><body>
<table class="wikitable sortable">
  <tr><th>Team</th><th>Location</th><th>Stadium</th></tr>
  <tr><td><a href="/wiki/Arsenal_F.C.">Arsenal</a></td><td>London</td><td>Emirates</td></tr>
</table>
<table class="wikitable" style="text-align:center">
  <tr><th>Pos</th><th>Team <sup>v</sup></th><th>Pld</th><th>Pts</th></tr>
  <tr><td>1</td>
      <th scope="row"><span class="flagicon"><a href="/wiki/File:Flag.svg">flag</a></span>
          <a href="/wiki/Liverpool_F.C.">Liverpool</a></th><td>38</td><td>84</td></tr>
  <tr><td>2</td><td><a href="/wiki/Arsenal_F.C.">Arsenal F.C.</a></td><td>38</td><td>74</td></tr>
  <tr><td>3</td><td>Unlinked Rovers</td><td>38</td><td>70</td></tr>
  <tr><td>4</td><td><a href="/w/index.php?title=Ghost_FC&amp;redlink=1">Ghost FC</a></td><td>38</td><td>60</td></tr>
  <tr><td>5</td></tr>
</table>
<table class="wikitable">
  <tr><th>Pos</th><th>Club</th></tr>
  <tr><td>1</td><td><a href="/wiki/Arsenal_F.C.">Arsenal (again)</a></td></tr>
  <tr><td>2</td><td><a href="/wiki/Chelsea_F.C.">Chelsea</a></td></tr>
</table>
<table class="navbox">
  <tr><th>Pos</th><th>Team</th></tr>
  <tr><td>1</td><td><a href="/wiki/Everton_F.C.">Everton</a></td></tr>
</table>
</body></html>
"#;

#[test]
fn test_standings_links_in_first_seen_order() {
    let page = doc("https://en.wikipedia.org/wiki/2024-25_Premier_League", LEAGUE_PAGE);
    let links = extract_entity_links(&page, &ExtractionPolicy::default());

    let got: Vec<(&str, &str)> = links
        .iter()
        .map(|l| (l.name.as_str(), l.url.as_str()))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Liverpool", "https://en.wikipedia.org/wiki/Liverpool_F.C."),
            ("Arsenal F.C.", "https://en.wikipedia.org/wiki/Arsenal_F.C."),
            ("Chelsea", "https://en.wikipedia.org/wiki/Chelsea_F.C."),
        ]
    );
}

#[test]
fn test_duplicate_link_across_tables_kept_once() {
    let html = r#"
        <table class="wikitable"><tr><th>Pos</th><th>Team</th></tr>
          <tr><td>1</td><td><a href="/wiki/Arsenal_F.C.">Arsenal F.C.</a></td></tr></table>
        <table class="wikitable"><tr><th>Pos</th><th>Team</th></tr>
          <tr><td>1</td><td><a href="/wiki/Arsenal_F.C.">Arsenal</a></td></tr></table>"#;
    let page = doc("https://en.wikipedia.org/wiki/League", html);
    let links = extract_entity_links(&page, &ExtractionPolicy::default());

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].name, "Arsenal F.C.");
    assert_eq!(links[0].url.as_str(), "https://en.wikipedia.org/wiki/Arsenal_F.C.");
}

#[test]
fn test_page_without_standings_table_is_empty() {
    let html = r#"<table class="wikitable"><tr><th>Season</th><th>Champions</th></tr>
        <tr><td>2024</td><td><a href="/wiki/Celtic_F.C.">Celtic</a></td></tr></table>"#;
    let page = doc("https://en.wikipedia.org/wiki/League", html);
    assert!(extract_entity_links(&page, &ExtractionPolicy::default()).is_empty());
    assert!(extract_entity_links(&doc("https://x.org/", ""), &ExtractionPolicy::default()).is_empty());
}

const CLUB_PAGE: &str = r#"
<html><body>
<table class="infobox vcard">
  <tr><th colspan="2">Arsenal</th></tr>
  <tr><th>Full name</th><td>The Arsenal Football Club</td></tr>
  <tr><th>Capacity</th><td>60,704</td></tr>
  <tr><th> Ground </th><td><a href="/wiki/Emirates_Stadium">Emirates Stadium</a></td></tr>
  <tr><th>Ground</th><td><a href="/wiki/Highbury">Highbury</a></td></tr>
</table>
</body></html>
"#;

#[test]
fn test_infobox_label_is_exact_and_case_insensitive() {
    let page = doc("https://en.wikipedia.org/wiki/Arsenal_F.C.", CLUB_PAGE);
    let policy = ExtractionPolicy::default();

    let ground = extract_field(&page, &labels(&["ground"]), &policy).unwrap();
    assert_eq!(
        ground,
        FieldValue {
            text: "Emirates Stadium".into(),
            link: Some(Url::parse("https://en.wikipedia.org/wiki/Emirates_Stadium").unwrap()),
        }
    );

    assert_eq!(
        extract_field(&page, &labels(&["CAPACITY"]), &policy).unwrap().text,
        "60,704"
    );
    assert!(extract_field(&page, &labels(&["capacity (seated)"]), &policy).is_none());
    assert!(extract_field(&page, &labels(&["name"]), &policy).is_none());
}

#[test]
fn test_infobox_plain_text_value() {
    let html = r#"<table class="infobox"><tr><th>Stadium</th>
        <td>Recreation Ground<br/>(groundshare)</td></tr></table>"#;
    let page = doc("https://en.wikipedia.org/wiki/Town_F.C.", html);
    let got = extract_field(&page, &labels(&["ground", "stadium"]), &ExtractionPolicy::default());

    assert_eq!(
        got,
        Some(FieldValue {
            text: "Recreation Ground (groundshare)".into(),
            link: None,
        })
    );
}

#[test]
fn test_infobox_ignores_non_article_value_links() {
    let html = r#"<table class="infobox"><tr><th>Ground</th>
        <td><a href="/wiki/File:Pitch.jpg">img</a> Broadwood Stadium</td></tr></table>"#;
    let page = doc("https://en.wikipedia.org/wiki/Clyde_F.C.", html);
    let got = extract_field(&page, &labels(&["ground"]), &ExtractionPolicy::default()).unwrap();

    assert_eq!(got.text, "img Broadwood Stadium");
    assert!(got.link.is_none());
}

#[test]
fn test_missing_infobox() {
    let page = doc("https://en.wikipedia.org/wiki/X", "<p>Ground: somewhere</p>");
    assert!(extract_field(&page, &labels(&["ground"]), &ExtractionPolicy::default()).is_none());
}

#[test]
fn test_coordinates_from_geo_marker() {
    let html = r#"<span class="geo-inline"><span class="geo-dms">51°30′N</span>
        <span class="geo">51.508; -0.262</span></span>"#;
    let page = doc("https://en.wikipedia.org/wiki/Stadium", html);

    assert_eq!(
        extract_coordinates(&page, &ExtractionPolicy::default()),
        Some(Coordinates {
            lat: 51.508,
            lon: -0.262
        })
    );
}

#[test]
fn test_malformed_or_missing_coordinates() {
    let policy = ExtractionPolicy::default();
    for html in [
        r#"<span class="geo">N/A</span>"#,
        r#"<span class="geo">51.508, -0.262</span>"#,
        r#"<span class="geo">51.508; -0.262; 12</span>"#,
        r#"<span class="geo">95.0; 10.0</span>"#,
        r#"<span class="geo-dec">51.507°N 0.127°W</span>"#,
        "<p>no marker</p>",
    ] {
        let page = doc("https://en.wikipedia.org/wiki/Stadium", html);
        assert_eq!(extract_coordinates(&page, &policy), None, "{html}");
    }
}
