use crate::codec::{ArrayFormat, QueryValue, StringifyOptions, encoding::encode_component};

///
/// Serialize `(key, value)` entries into a query string (no leading `?`).
///
/// `None` entries are absent and always omitted. Null markers render as the
/// bare key unless `skip_null` is set. Blank values render as `key=` unless
/// `skip_empty_string` is set.
///
pub(crate) fn write_query<'a, I>(entries: I, options: &StringifyOptions) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a QueryValue>)>,
{
    let mut entries: Vec<_> = entries.into_iter().collect();
    if options.sort {
        entries.sort_by(|a, b| a.0.cmp(b.0));
    }

    let mut segments = Vec::with_capacity(entries.len());

    for (key, value) in entries {
        let Some(value) = value else {
            continue;
        };
        let key = encode_component(key);

        if value.is_null() {
            if !options.skip_null {
                segments.push(key);
            }
            continue;
        }

        let values: Vec<&str> = value
            .as_slice()
            .iter()
            .map(String::as_str)
            .filter(|item| !(options.skip_empty_string && item.is_empty()))
            .collect();

        if values.is_empty() {
            if !options.skip_empty_string {
                segments.push(format!("{key}="));
            }
            continue;
        }

        match options.array_format {
            ArrayFormat::Comma => {
                let joined = values
                    .iter()
                    .map(|item| encode_component(item))
                    .collect::<Vec<_>>()
                    .join(",");
                segments.push(format!("{key}={joined}"));
            }
            ArrayFormat::Repeated => {
                for item in values {
                    segments.push(format!("{key}={}", encode_component(item)));
                }
            }
        }
    }

    segments.join("&")
}

///
/// Append a query string to a path, keeping any `#fragment` as the suffix.
///
/// An existing `?` is extended with `&` unless it already ends in `?`/`&`.
/// An empty query string leaves the path untouched (apart from dropping an
/// empty fragment marker).
///
pub(crate) fn append_query(url: &str, query_string: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((base, fragment)) => (base, Some(fragment).filter(|f| !f.is_empty())),
        None => (url, None),
    };

    let mut out = String::with_capacity(url.len() + query_string.len() + 2);
    out.push_str(base);

    if !query_string.is_empty() {
        if base.contains('?') {
            if !(base.ends_with('?') || base.ends_with('&')) {
                out.push('&');
            }
        } else {
            out.push('?');
        }
        out.push_str(query_string);
    }

    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }

    out
}
