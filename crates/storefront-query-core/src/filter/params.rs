use crate::codec::{NormalizedQuery, SearchParams, parse_search_params};
use indexmap::{IndexMap, IndexSet};

///
/// ParamMap
///
/// Resolver-side view of the input: every raw string flattened and split on
/// `,`, trimmed, blanks dropped. Built independently of the codec because a
/// framework may hand over values pre-split or still comma-joined.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParamMap(IndexMap<String, Vec<String>>);

impl ParamMap {
    fn push_raw(&mut self, key: &str, raw: &str) {
        let parts = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string);

        let mut parts = parts.peekable();
        if parts.peek().is_none() {
            return;
        }

        self.0.entry(key.to_string()).or_default().extend(parts);
    }

    /// First value under `key`.
    #[must_use]
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// First value under the first of `keys` that carries one.
    #[must_use]
    pub fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.first(key))
    }

    /// Union of values under all `keys`, duplicate-free, in order of first
    /// appearance.
    #[must_use]
    pub fn collect(&self, keys: &[&str]) -> Vec<String> {
        let set: IndexSet<&str> = keys
            .iter()
            .filter_map(|key| self.0.get(*key))
            .flatten()
            .map(String::as_str)
            .collect();

        set.into_iter().map(str::to_string).collect()
    }
}

///
/// FilterSource
///
/// Anything the resolver can read filter state from.
///

pub trait FilterSource {
    fn param_map(&self) -> ParamMap;
}

impl FilterSource for ParamMap {
    fn param_map(&self) -> ParamMap {
        self.clone()
    }
}

impl FilterSource for NormalizedQuery {
    fn param_map(&self) -> ParamMap {
        let mut map = ParamMap::default();
        for (key, value) in self {
            for raw in value.as_slice() {
                map.push_raw(key, raw);
            }
        }
        map
    }
}

impl FilterSource for SearchParams {
    fn param_map(&self) -> ParamMap {
        let mut map = ParamMap::default();
        for (key, value) in self.iter() {
            let Some(value) = value else {
                continue;
            };
            for raw in value.as_slice() {
                map.push_raw(key, raw);
            }
        }
        map
    }
}

impl FilterSource for str {
    fn param_map(&self) -> ParamMap {
        parse_search_params(self).param_map()
    }
}

impl FilterSource for String {
    fn param_map(&self) -> ParamMap {
        self.as_str().param_map()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_params_are_flattened_and_comma_split() {
        let params = SearchParams::new()
            .with_many("color", [" red , blue", "", "green"])
            .with_one("gender", "  ")
            .with_undefined("brand");

        let map = params.param_map();
        assert_eq!(map.collect(&["color"]), ["red", "blue", "green"]);
        assert_eq!(map.first("gender"), None);
        assert_eq!(map.first("brand"), None);
    }

    #[test]
    fn collect_merges_synonyms_without_duplicates() {
        let map = "category=shoes&categoryIds=boots,shoes,sneakers&categoryId=boots".param_map();
        assert_eq!(
            map.collect(&["category", "categoryId", "categoryIds"]),
            ["shoes", "boots", "sneakers"]
        );
    }

    #[test]
    fn first_of_prefers_earlier_keys() {
        let map = "sortBy=latest&sort=price_asc".param_map();
        assert_eq!(map.first_of(&["sort", "sortBy"]), Some("price_asc"));
        assert_eq!(map.first_of(&["missing", "sortBy"]), Some("latest"));
    }
}
