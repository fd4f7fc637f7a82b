use crate::codec::{ArrayFormat, NormalizedQuery, ParseOptions, QueryValue, encoding::decode_component};
use indexmap::IndexMap;

///
/// Slot
/// Per-key accumulator used while scanning segments.
///

enum Slot {
    Null,
    Values(Vec<String>),
}

///
/// Parse a raw query string into a normalized query.
///
/// Rules:
/// - a leading `?` is ignored; empty segments and empty keys are skipped
/// - `key` with no `=` records a null marker (later segments may replace it)
/// - in comma mode the raw value is split on `,` before decoding, so an
///   encoded `%2C` stays inside its value; each decoded fragment is trimmed
/// - repeated keys accumulate in order of appearance
/// - zero surviving values yield an empty scalar, one a scalar, more a list
///
#[must_use]
pub fn parse_query_string(input: &str, options: &ParseOptions) -> NormalizedQuery {
    let source = input.strip_prefix('?').unwrap_or(input);
    let mut slots: IndexMap<String, Slot> = IndexMap::new();

    for segment in source.split('&').filter(|segment| !segment.is_empty()) {
        let (raw_key, raw_value) = match segment.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (segment, None),
        };

        let key = decode_component(raw_key);
        if key.is_empty() {
            continue;
        }

        let Some(raw_value) = raw_value else {
            slots.insert(key, Slot::Null);
            continue;
        };

        let slot = slots.entry(key).or_insert_with(|| Slot::Values(Vec::new()));
        if matches!(slot, Slot::Null) {
            *slot = Slot::Values(Vec::new());
        }
        if let Slot::Values(values) = slot {
            values.extend(split_value(raw_value, options.array_format));
        }
    }

    slots
        .into_iter()
        .map(|(key, slot)| {
            let value = match slot {
                Slot::Null => QueryValue::Null,
                Slot::Values(values) => QueryValue::collapse(values),
            };
            (key, value)
        })
        .collect()
}

// Split one raw value into its decoded, non-empty fragments.
fn split_value(raw: &str, format: ArrayFormat) -> Vec<String> {
    match format {
        ArrayFormat::Comma => raw
            .split(',')
            .map(|fragment| decode_component(fragment).trim().to_string())
            .filter(|fragment| !fragment.is_empty())
            .collect(),
        ArrayFormat::Repeated => {
            let decoded = decode_component(raw);
            if decoded.is_empty() {
                Vec::new()
            } else {
                vec![decoded]
            }
        }
    }
}
