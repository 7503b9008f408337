//! URL-encoded form body decoding.

use url::form_urlencoded;

use postboard_core::PostFields;

/// Decode an `application/x-www-form-urlencoded` body into a flat mapping.
///
/// The body is read as UTF-8 (invalid sequences are replaced) with line
/// terminators dropped. A pair without `=` maps to an empty value and the
/// last occurrence of a duplicate key wins.
pub fn decode_form(body: &[u8]) -> PostFields {
    let text = String::from_utf8_lossy(body);
    let joined: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();

    form_urlencoded::parse(joined.as_bytes())
        .into_owned()
        .collect()
}
