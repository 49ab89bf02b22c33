use reqwest::StatusCode;
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    Windows1252,
    ShiftJis,
    Gbk,
    Big5,
    Other(String),
}

impl Charset {
    pub fn from_encoding(encoding: &'static encoding_rs::Encoding) -> Self {
        if encoding == encoding_rs::UTF_8 {
            Self::Utf8
        } else if encoding == encoding_rs::WINDOWS_1252 {
            Self::Windows1252
        } else if encoding == encoding_rs::SHIFT_JIS {
            Self::ShiftJis
        } else if encoding == encoding_rs::GBK || encoding == encoding_rs::GB18030 {
            Self::Gbk
        } else if encoding == encoding_rs::BIG5 {
            Self::Big5
        } else {
            Self::Other(encoding.name().to_string())
        }
    }
}

/// A successfully fetched HTML page, decoded to UTF-8.
#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_utf8: String,
}
