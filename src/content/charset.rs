//! Charset detection and resolution
//!
//! Every function here is total: malformed headers, lying meta tags and unknown
//! labels all degrade to "no charset" or UTF-8 rather than an error.

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `<meta charset=...>` or `<meta ... content="...; charset=...">`; group 2 is the label
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta(?:[^>]*?content\s*=[\s"']*)?([^>]*?)[\s"';]*charset\s*=[\s"']*([^\s"'/>]*)"#,
    )
    .expect("meta charset pattern is valid")
});

/// Tags opening with a `name=` or `value=` attribute never declare the document charset
static META_NAME_OR_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:name|value)\s*=").expect("meta name pattern is valid")
});

/// Legacy labels rewritten before resolution
const CHARSET_ALIASES: &[(&str, &str)] = &[("cp1251", "windows-1251")];

/// Extracts the `charset` parameter from a Content-Type header value
///
/// Parameter names match case-insensitively and quoted values are unquoted.
/// An empty value counts as absent.
///
/// ```
/// use crawl_gate::content::charset_from_content_type;
///
/// assert_eq!(
///     charset_from_content_type("text/html; Charset=\"ISO-8859-1\""),
///     Some("ISO-8859-1".to_string())
/// );
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
pub fn charset_from_content_type(content_type: &str) -> Option<String> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim().trim_matches(&['"', '\''][..]).trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Sniffs the charset declared by the first `<meta>` tag in a body
///
/// The body is read as ASCII (every non-ASCII byte becomes `?`), which is enough
/// to find a declaration in any ASCII-compatible encoding. Only the first
/// declaring tag counts; if its value is blank the charset stays undetermined.
pub fn charset_from_body(bytes: &[u8]) -> Option<String> {
    let body: String = bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect();

    let captures = META_CHARSET.captures_iter(&body).find(|caps| {
        let after_tag = caps.get(0).map_or(0, |m| m.start() + "<meta".len());
        !META_NAME_OR_VALUE.is_match(&body[after_tag..])
    })?;

    captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|label| !label.trim().is_empty())
        .map(str::to_string)
}

/// Rewrites known legacy charset aliases to their canonical names
pub fn clean_charset(charset: Option<String>) -> Option<String> {
    charset.map(|label| {
        CHARSET_ALIASES
            .iter()
            .find(|(alias, _)| label.trim().eq_ignore_ascii_case(alias))
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(label)
    })
}

/// Resolves a charset label to an encoding, falling back to UTF-8
///
/// Labels that are absent, unknown, or that map to the WHATWG "replacement"
/// encoding (which would discard the whole body) all resolve to UTF-8.
pub fn resolve_encoding(charset: Option<&str>) -> &'static Encoding {
    let Some(label) = charset else {
        return UTF_8;
    };

    match Encoding::for_label(label.trim().as_bytes()) {
        Some(encoding) if encoding != REPLACEMENT => encoding,
        _ => {
            tracing::debug!("Unrecognized charset '{}', falling back to UTF-8", label);
            UTF_8
        }
    }
}
