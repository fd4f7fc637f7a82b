//! Active-filter chips and the "clear filters" transform for listing pages.

use crate::{
    codec::NormalizedQuery,
    config::CatalogConfig,
    filter::{
        BRAND_KEYS, CATEGORY_KEYS, COLOR_KEYS, GENDER_KEY, PAGE_KEY, PRICE_KEYS, PRICE_MAX_KEY,
        PRICE_MIN_KEY, SEARCH_KEY,
    },
    mutate::{get_values, remove_keys},
};
use serde::{Deserialize, Serialize};

/// Every key [`clear_filters`] removes. Sort survives.
pub const FILTER_KEYS: [&str; 17] = [
    SEARCH_KEY,
    GENDER_KEY,
    CATEGORY_KEYS[0],
    CATEGORY_KEYS[1],
    CATEGORY_KEYS[2],
    BRAND_KEYS[0],
    BRAND_KEYS[1],
    BRAND_KEYS[2],
    COLOR_KEYS[0],
    COLOR_KEYS[1],
    COLOR_KEYS[2],
    PRICE_KEYS[0],
    PRICE_KEYS[1],
    PRICE_KEYS[2],
    PRICE_MIN_KEY,
    PRICE_MAX_KEY,
    PAGE_KEY,
];

///
/// ActiveFilter
///
/// One removable chip: the query key it belongs to, the raw value, and the
/// text shown to the shopper.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub key: String,
    pub value: String,
    pub label: String,
}

impl ActiveFilter {
    fn new(key: &str, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Chips for the filters currently applied in `query`.
///
/// Order: search, gender, category, brand, color, price bands, explicit
/// minimum, explicit maximum. Category, brand and color chips read the bare
/// key and its plural `…Ids` synonym and are keyed by the bare name. Unknown
/// price band ids produce no chip.
#[must_use]
pub fn active_filters(query: &NormalizedQuery, config: &CatalogConfig) -> Vec<ActiveFilter> {
    let mut active = Vec::new();

    let search = get_values(query, SEARCH_KEY);
    if let Some(search) = search
        .first()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
    {
        active.push(ActiveFilter::new(SEARCH_KEY, search, format!("Search: {search}")));
    }

    for value in get_values(query, GENDER_KEY) {
        let label = format!("Gender: {value}");
        active.push(ActiveFilter::new(GENDER_KEY, value, label));
    }

    for (keys, title) in [
        (&CATEGORY_KEYS, "Category"),
        (&BRAND_KEYS, "Brand"),
        (&COLOR_KEYS, "Color"),
    ] {
        let (bare, plural) = (keys[0], keys[2]);
        for value in get_values(query, bare)
            .into_iter()
            .chain(get_values(query, plural))
        {
            let label = format!("{title}: {value}");
            active.push(ActiveFilter::new(bare, value, label));
        }
    }

    for value in PRICE_KEYS.iter().flat_map(|key| get_values(query, key)) {
        if let Some(band) = config.price_bands.iter().find(|band| band.id == value) {
            active.push(ActiveFilter::new(PRICE_KEYS[0], value, band.label.clone()));
        }
    }

    if let Some(min) = get_values(query, PRICE_MIN_KEY).into_iter().next() {
        let label = format!("Min price: ${min}");
        active.push(ActiveFilter::new(PRICE_MIN_KEY, min, label));
    }

    if let Some(max) = get_values(query, PRICE_MAX_KEY).into_iter().next() {
        let label = format!("Max price: ${max}");
        active.push(ActiveFilter::new(PRICE_MAX_KEY, max, label));
    }

    active
}

/// `query` without any filter or page key.
#[must_use]
pub fn clear_filters(query: &NormalizedQuery) -> NormalizedQuery {
    remove_keys(query, FILTER_KEYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{build_url, parse_search_params};

    fn chips(input: &str) -> Vec<(String, String, String)> {
        active_filters(&parse_search_params(input), &CatalogConfig::default())
            .into_iter()
            .map(|chip| (chip.key, chip.value, chip.label))
            .collect()
    }

    fn chip(key: &str, value: &str, label: &str) -> (String, String, String) {
        (key.into(), value.into(), label.into())
    }

    #[test]
    fn empty_query_has_no_chips() {
        assert!(chips("").is_empty());
        assert!(chips("sort=price_asc&page=3").is_empty());
    }

    #[test]
    fn chips_follow_display_order() {
        let got = chips(
            "priceMax=150&color=red&brandIds=nike&price=under-100&category=shoes\
             &categoryIds=boots&gender=men,women&search=+runner+",
        );

        assert_eq!(
            got,
            vec![
                chip("search", "runner", "Search: runner"),
                chip("gender", "men", "Gender: men"),
                chip("gender", "women", "Gender: women"),
                chip("category", "shoes", "Category: shoes"),
                chip("category", "boots", "Category: boots"),
                chip("brand", "nike", "Brand: nike"),
                chip("color", "red", "Color: red"),
                chip("price", "under-100", "Under $100"),
                chip("priceMax", "150", "Max price: $150"),
            ]
        );
    }

    #[test]
    fn unknown_bands_and_blank_search_are_skipped() {
        assert_eq!(
            chips("price=cheap,200-plus&search=+++&priceMin=20"),
            vec![
                chip("price", "200-plus", "$200 & Above"),
                chip("priceMin", "20", "Min price: $20"),
            ]
        );
    }

    #[test]
    fn clear_filters_keeps_sort_and_unrelated_keys() {
        let query = parse_search_params(
            "search=air&gender=men&categoryId=shoes&brand=nike&colorIds=red\
             &priceIds=under-100&priceMin=10&priceMax=90&page=4&sort=price_asc&ref=nav",
        );

        let cleared = clear_filters(&query);
        assert_eq!(build_url("/products", &cleared), "/products?sort=price_asc&ref=nav");
    }
}
