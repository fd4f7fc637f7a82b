//! Round-trippable encoding of multi-valued filter state to and from URL
//! query strings.

mod encoding;
mod params;
mod parse;
mod stringify;
mod value;


pub use params::{ParamValue, SearchParams};
pub use parse::parse_query_string;
pub use value::{NormalizedQuery, QueryValue};

use crate::error::QueryError;
use serde::{Deserialize, Serialize};

///
/// ArrayFormat
///
/// How a key with several values is written to the query string.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayFormat {
    /// `color=red,blue`
    #[default]
    Comma,

    /// `color=red&color=blue`
    #[serde(alias = "none")]
    Repeated,
}

///
/// ParseOptions
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    pub array_format: ArrayFormat,
}

///
/// StringifyOptions
///
/// `Default` is the permissive encoder (null markers and blank values are
/// written out). [`StringifyOptions::canonical`] is what navigation links use.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StringifyOptions {
    pub array_format: ArrayFormat,
    pub skip_null: bool,
    pub skip_empty_string: bool,
    pub sort: bool,
}

impl StringifyOptions {
    /// Comma format, dropping null markers and blank values.
    #[must_use]
    pub const fn canonical() -> Self {
        Self {
            array_format: ArrayFormat::Comma,
            skip_null: true,
            skip_empty_string: true,
            sort: false,
        }
    }
}

///
/// QueryInput
///
/// Anything the codec accepts as a query source.
///

#[derive(Clone, Copy, Debug)]
pub enum QueryInput<'a> {
    Text(&'a str),
    Params(&'a SearchParams),
}

impl<'a> From<&'a str> for QueryInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for QueryInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a SearchParams> for QueryInput<'a> {
    fn from(value: &'a SearchParams) -> Self {
        Self::Params(value)
    }
}

///
/// QueryCodec
///
/// Parse/serialize pair bound to one multi-value encoding and one set of
/// stringify options. Stateless; cheap to copy.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct QueryCodec {
    stringify: StringifyOptions,
}

impl Default for QueryCodec {
    fn default() -> Self {
        Self::new(StringifyOptions::canonical())
    }
}

impl QueryCodec {
    #[must_use]
    pub const fn new(stringify: StringifyOptions) -> Self {
        Self { stringify }
    }

    #[must_use]
    pub const fn array_format(&self) -> ArrayFormat {
        self.stringify.array_format
    }

    #[must_use]
    pub const fn stringify_options(&self) -> &StringifyOptions {
        &self.stringify
    }

    const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            array_format: self.stringify.array_format,
        }
    }

    /// Parse a query string or a framework record into a normalized query.
    ///
    /// Records are re-serialized with this codec's multi-value encoding
    /// (skipping null and blank entries) and parsed again, so both input
    /// shapes converge on the same normalized result. In comma mode the
    /// record's comma-joined strings are split first, matching what the
    /// string path does with `color=red,blue`.
    #[must_use]
    pub fn parse<'a>(&self, input: impl Into<QueryInput<'a>>) -> NormalizedQuery {
        match input.into() {
            QueryInput::Text(text) => parse_query_string(text, &self.parse_options()),
            QueryInput::Params(params) => {
                let options = StringifyOptions {
                    array_format: self.stringify.array_format,
                    skip_null: true,
                    skip_empty_string: true,
                    sort: false,
                };
                let entries: Vec<_> = match self.stringify.array_format {
                    ArrayFormat::Comma => params.comma_split_entries().collect(),
                    ArrayFormat::Repeated => params.entries().collect(),
                };
                let query_string = stringify::write_query(
                    entries.iter().map(|(key, value)| (*key, value.as_ref())),
                    &options,
                );
                parse_query_string(&query_string, &self.parse_options())
            }
        }
    }

    /// Parse an untyped JSON input: a query string, an object of
    /// `string | string[] | null` members, or `null` (empty query).
    pub fn parse_json(&self, input: &serde_json::Value) -> Result<NormalizedQuery, QueryError> {
        match input {
            serde_json::Value::Null => Ok(NormalizedQuery::new()),
            serde_json::Value::String(text) => Ok(self.parse(text)),
            serde_json::Value::Object(_) => {
                let params = SearchParams::from_json(input)?;
                Ok(self.parse(&params))
            }
            other => Err(QueryError::unsupported_input(other)),
        }
    }

    #[must_use]
    pub fn stringify(&self, query: &NormalizedQuery) -> String {
        stringify(query, &self.stringify)
    }

    /// Build `path?query#fragment` for navigation links.
    #[must_use]
    pub fn build_url(&self, path: &str, query: &NormalizedQuery) -> String {
        stringify_url(path, query, &self.stringify)
    }
}

/// Serialize a normalized query with explicit options.
#[must_use]
pub fn stringify(query: &NormalizedQuery, options: &StringifyOptions) -> String {
    stringify::write_query(
        query.iter().map(|(key, value)| (key.as_str(), Some(value))),
        options,
    )
}

/// Serialize a framework record; undefined entries are omitted.
#[must_use]
pub fn stringify_params(params: &SearchParams, options: &StringifyOptions) -> String {
    let entries: Vec<_> = params.entries().collect();

    stringify::write_query(
        entries.iter().map(|(key, value)| (*key, value.as_ref())),
        options,
    )
}

/// Append the serialized query to `url`, before any `#fragment`.
#[must_use]
pub fn stringify_url(url: &str, query: &NormalizedQuery, options: &StringifyOptions) -> String {
    stringify::append_query(url, &stringify(query, options))
}

///
/// Canonical entry points (comma format, skip null, skip blank)
///

#[must_use]
pub fn parse_search_params<'a>(input: impl Into<QueryInput<'a>>) -> NormalizedQuery {
    QueryCodec::default().parse(input)
}

pub fn parse_json(input: &serde_json::Value) -> Result<NormalizedQuery, QueryError> {
    QueryCodec::default().parse_json(input)
}

#[must_use]
pub fn stringify_query(query: &NormalizedQuery) -> String {
    QueryCodec::default().stringify(query)
}

#[must_use]
pub fn build_url(path: &str, query: &NormalizedQuery) -> String {
    QueryCodec::default().build_url(path, query)
}
