// Text transform registry shared by the encrypt and encode tabs.
// - Maps a method tag to a pure string -> string function.
// - Provides the inverse of every transform for the decode action.
// - The "md5" method is a placeholder (reversed base64), not a digest.
use std::string::FromUtf8Error;

use base64::{Engine, engine::general_purpose::STANDARD};
use thiserror::Error;

pub const UNSUPPORTED_METHOD: &str = "Unsupported method";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    SimulatedMd5,
    Base64,
    Reverse,
    Unicode,
    Url,
}

impl Method {
    pub const ALL: [Self; 5] = [
        Self::SimulatedMd5,
        Self::Base64,
        Self::Reverse,
        Self::Unicode,
        Self::Url,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::SimulatedMd5 => "md5",
            Self::Base64 => "base64",
            Self::Reverse => "reverse",
            Self::Unicode => "unicode",
            Self::Url => "url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::SimulatedMd5 => "MD5 (simulated)",
            Self::Base64 => "Base64",
            Self::Reverse => "Reverse string",
            Self::Unicode => "Unicode escape",
            Self::Url => "URL encode",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        Self::ALL
            .into_iter()
            .find(|method| method.id().eq_ignore_ascii_case(id))
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8(#[from] FromUtf8Error),

    #[error("malformed \\u escape at byte {offset}")]
    MalformedEscape { offset: usize },

    #[error("escaped code units are not valid UTF-16")]
    InvalidUtf16,
}

pub fn apply(method: Method, text: &str) -> String {
    match method {
        Method::SimulatedMd5 => reverse(&base64_encode(text)),
        Method::Base64 => base64_encode(text),
        Method::Reverse => reverse(text),
        Method::Unicode => unicode_escape(text),
        Method::Url => url_encode(text),
    }
}

/// Looks a method up by its tag and applies it. Unknown tags produce
/// [`UNSUPPORTED_METHOD`] instead of an error so the output pane always has
/// something to show.
pub fn apply_by_id(id: &str, text: &str) -> String {
    match Method::from_id(id) {
        Some(method) => apply(method, text),
        None => UNSUPPORTED_METHOD.to_string(),
    }
}

pub fn invert(method: Method, text: &str) -> Result<String, DecodeError> {
    match method {
        Method::SimulatedMd5 => base64_decode(&reverse(text)),
        Method::Base64 => base64_decode(text),
        Method::Reverse => Ok(reverse(text)),
        Method::Unicode => unicode_unescape(text),
        Method::Url => url_decode(text),
    }
}

pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn base64_encode(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

pub fn base64_decode(text: &str) -> Result<String, DecodeError> {
    let bytes = STANDARD.decode(text.trim())?;
    Ok(String::from_utf8(bytes)?)
}

pub fn url_encode(text: &str) -> String {
    urlencoding::encode(text).into_owned()
}

pub fn url_decode(text: &str) -> Result<String, DecodeError> {
    Ok(urlencoding::decode(text)?.into_owned())
}

// One escape per UTF-16 code unit, so astral characters become a surrogate pair.
pub fn unicode_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() * 6);
    for unit in text.encode_utf16() {
        escaped.push_str(&format!("\\u{unit:04x}"));
    }
    escaped
}

pub fn unicode_unescape(text: &str) -> Result<String, DecodeError> {
    let mut units = Vec::with_capacity(text.len() / 6 + 1);
    let mut chars = text.char_indices();

    while let Some((offset, ch)) = chars.next() {
        if ch != '\\' {
            let mut buf = [0_u16; 2];
            units.extend_from_slice(ch.encode_utf16(&mut buf));
            continue;
        }

        let hex = text[offset + 1..]
            .strip_prefix('u')
            .and_then(|rest| rest.get(..4))
            .filter(|hex| hex.bytes().all(|byte| byte.is_ascii_hexdigit()))
            .ok_or(DecodeError::MalformedEscape { offset })?;
        let unit =
            u16::from_str_radix(hex, 16).map_err(|_| DecodeError::MalformedEscape { offset })?;
        units.push(unit);

        // 'u' plus four hex digits, all ASCII.
        for _ in 0..5 {
            chars.next();
        }
    }

    String::from_utf16(&units).map_err(|_| DecodeError::InvalidUtf16)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn simulated_md5_is_reversed_base64() {
        assert_eq!(apply(Method::Base64, "hello"), "aGVsbG8=");
        assert_eq!(apply(Method::SimulatedMd5, "hello"), "=8GbsVGa");
    }

    #[test]
    fn reverse_handles_multibyte_text() {
        assert_eq!(apply(Method::Reverse, "abc"), "cba");
        assert_eq!(apply(Method::Reverse, "站长工具"), "具工长站");
        assert_eq!(apply(Method::Reverse, ""), "");
    }

    #[test]
    fn unicode_escape_pads_each_code_unit() {
        assert_eq!(apply(Method::Unicode, "A"), "\\u0041");
        assert_eq!(apply(Method::Unicode, "é中"), "\\u00e9\\u4e2d");
        assert_eq!(apply(Method::Unicode, "😀"), "\\ud83d\\ude00");
    }

    #[test]
    fn url_encode_escapes_reserved_characters() {
        assert_eq!(
            apply(Method::Url, "a b&c=d/é"),
            "a%20b%26c%3Dd%2F%C3%A9"
        );
        assert_eq!(apply(Method::Url, "safe-._~"), "safe-._~");
    }

    #[test]
    fn unknown_method_id_yields_marker() {
        assert_eq!(apply_by_id("sha1", "text"), UNSUPPORTED_METHOD);
        assert_eq!(apply_by_id("", "text"), UNSUPPORTED_METHOD);
    }

    #[test]
    fn method_ids_are_case_insensitive() {
        assert_eq!(Method::from_id(" MD5 "), Some(Method::SimulatedMd5));
        assert_eq!(Method::from_id("Url"), Some(Method::Url));
        assert_eq!(apply_by_id("BASE64", "hi"), "aGk=");
    }

    #[test]
    fn every_method_id_resolves_to_itself() {
        for method in Method::ALL {
            assert_eq!(Method::from_id(method.id()), Some(method));
        }
    }

    #[test]
    fn base64_decode_rejects_garbage() {
        assert!(matches!(
            invert(Method::Base64, "not base64!"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn base64_decode_rejects_non_utf8_payload() {
        // 0xff 0xfe
        assert!(matches!(
            invert(Method::Base64, "//4="),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn unicode_unescape_reports_offset_of_bad_escape() {
        match invert(Method::Unicode, "\\u0041\\x41") {
            Err(DecodeError::MalformedEscape { offset }) => assert_eq!(offset, 6),
            other => panic!("expected malformed escape, got {other:?}"),
        }
        assert!(matches!(
            invert(Method::Unicode, "\\u00"),
            Err(DecodeError::MalformedEscape { offset: 0 })
        ));
    }

    #[test]
    fn unicode_unescape_keeps_literal_text() {
        assert_eq!(invert(Method::Unicode, "x\\u0041y").unwrap(), "xAy");
    }

    #[test]
    fn unicode_unescape_rejects_lone_surrogate() {
        assert!(matches!(
            invert(Method::Unicode, "\\ud83d"),
            Err(DecodeError::InvalidUtf16)
        ));
    }

    #[test]
    fn url_decode_keeps_stray_percent() {
        assert_eq!(invert(Method::Url, "100%").unwrap(), "100%");
        assert_eq!(invert(Method::Url, "a%20b").unwrap(), "a b");
    }

    proptest! {
        #[test]
        fn reverse_is_an_involution(text in any::<String>()) {
            prop_assert_eq!(reverse(&reverse(&text)), text);
        }

        #[test]
        fn base64_round_trips(text in any::<String>()) {
            prop_assert_eq!(base64_decode(&base64_encode(&text)).unwrap(), text);
        }

        #[test]
        fn percent_encoding_round_trips(text in any::<String>()) {
            prop_assert_eq!(url_decode(&url_encode(&text)).unwrap(), text);
        }

        #[test]
        fn unicode_escape_round_trips(text in any::<String>()) {
            prop_assert_eq!(unicode_unescape(&unicode_escape(&text)).unwrap(), text);
        }

        #[test]
        fn every_method_inverts(text in any::<String>()) {
            for method in Method::ALL {
                let encoded = apply(method, &text);
                prop_assert_eq!(invert(method, &encoded).unwrap(), text.clone());
            }
        }
    }
}
