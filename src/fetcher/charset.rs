use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;

use crate::fetcher::{errors::FetchError, types::Charset};

/// Bytes of the body searched for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 4096;

static HEADER_CHARSET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>;]+)"#).unwrap()
});

/// Decode a response body, trusting the Content-Type header first, then a
/// `<meta>` declaration, then statistical detection.
pub fn decode_body(content_type: &str, body: &[u8]) -> Result<(String, Charset), FetchError> {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);

    if had_errors {
        return Err(FetchError::Charset(format!(
            "invalid {} byte sequence",
            encoding.name()
        )));
    }

    Ok((decoded.into_owned(), Charset::from_encoding(encoding)))
}

fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = declared(&HEADER_CHARSET, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_LEN)];
    if let Some(encoding) = declared(&META_CHARSET, &String::from_utf8_lossy(head)) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, head.len() == body.len());
    detector.guess(None, true)
}

fn declared(pattern: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = pattern.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_from_content_type() {
        let (text, charset) =
            decode_body("text/html; charset=utf-8", "Atlético".as_bytes()).unwrap();
        assert_eq!(text, "Atlético");
        assert_eq!(charset, Charset::Utf8);
    }

    #[test]
    fn test_charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"></head><body>Malm\xf6 FF</body></html>";
        let (text, charset) = decode_body("text/html", body).unwrap();
        assert!(text.contains("Malmö FF"));
        // ISO-8859-1 is treated as its windows-1252 superset
        assert_eq!(charset, Charset::Windows1252);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let result = decode_body("text/html; charset=utf-8", b"caf\xe9");
        assert!(matches!(result, Err(FetchError::Charset(_))));
    }
}
