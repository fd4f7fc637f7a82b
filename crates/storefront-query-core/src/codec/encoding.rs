//! Form-style component encoding: percent-encoding with space as `+`.

use std::borrow::Cow;

/// Percent-encode one key or value component; spaces become `+`.
pub(crate) fn encode_component(value: &str) -> String {
    match urlencoding::encode(value) {
        Cow::Borrowed(unchanged) => unchanged.to_string(),
        Cow::Owned(encoded) => encoded.replace("%20", "+"),
    }
}

/// Decode one key or value component, treating `+` as space.
///
/// Input that does not decode to valid UTF-8 is returned verbatim rather
/// than rejected.
pub(crate) fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");

    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}
