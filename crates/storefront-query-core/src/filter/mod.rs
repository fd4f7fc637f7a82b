//! Typed filter resolution: raw query state → [`FilterSpec`].

mod gender;
mod params;
mod price;
mod sort;

#[cfg(test)]
mod tests;

pub use gender::{Gender, UnknownGender};
pub use params::{FilterSource, ParamMap};
pub use price::{PriceBand, default_price_bands};
pub use sort::{SortKey, UnknownSortKey};

use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, config::CatalogConfig};
use price::PriceRange;
use serde::{Deserialize, Serialize};

///
/// Recognized query keys
///

pub const SEARCH_KEY: &str = "search";
pub const GENDER_KEY: &str = "gender";
pub const SORT_KEYS: [&str; 2] = ["sort", "sortBy"];
pub const CATEGORY_KEYS: [&str; 3] = ["category", "categoryId", "categoryIds"];
pub const BRAND_KEYS: [&str; 3] = ["brand", "brandId", "brandIds"];
pub const COLOR_KEYS: [&str; 3] = ["color", "colorId", "colorIds"];
pub const PRICE_KEYS: [&str; 3] = ["price", "priceId", "priceIds"];
pub const PRICE_MIN_KEY: &str = "priceMin";
pub const PRICE_MAX_KEY: &str = "priceMax";
pub const PAGE_KEY: &str = "page";
pub const LIMIT_KEY: &str = "limit";

///
/// FilterSpec
///
/// Validated listing criteria. Undetermined fields are `None`/empty and mean
/// "no constraint"; `page` and `limit` always carry a valid value.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub brand_ids: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_ids: Vec<String>,

    /// Inclusive lower price bound, never negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_min: Option<f64>,

    /// Inclusive upper price bound; `None` is unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_max: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,

    /// 1-based page number.
    pub page: u32,

    /// Page size, within `[1, max_limit]`.
    pub limit: u32,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: None,
            gender: None,
            category_ids: Vec::new(),
            brand_ids: Vec::new(),
            color_ids: Vec::new(),
            price_min: None,
            price_max: None,
            sort_by: None,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilterSpec {
    /// True when no field narrows the result set.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_none()
            && self.gender.is_none()
            && self.category_ids.is_empty()
            && self.brand_ids.is_empty()
            && self.color_ids.is_empty()
            && self.price_min.is_none()
            && self.price_max.is_none()
    }
}

///
/// FilterResolver
///
/// Resolves raw query state into a [`FilterSpec`] using a page-size policy
/// and a price-band catalogue. Each field is derived independently; a
/// malformed value degrades to "absent" or the default, never to an error.
///

#[derive(Clone, Debug, PartialEq)]
pub struct FilterResolver {
    default_limit: u32,
    max_limit: u32,
    price_bands: Vec<PriceBand>,
}

impl Default for FilterResolver {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: MAX_PAGE_SIZE,
            price_bands: default_price_bands(),
        }
    }
}

impl FilterResolver {
    #[must_use]
    pub fn from_config(config: &CatalogConfig) -> Self {
        let max_limit = config.max_limit.max(1);

        Self {
            default_limit: config.default_limit.clamp(1, max_limit),
            max_limit,
            price_bands: config.price_bands.clone(),
        }
    }

    #[must_use]
    pub fn price_bands(&self) -> &[PriceBand] {
        &self.price_bands
    }

    #[must_use]
    pub fn price_band(&self, id: &str) -> Option<&PriceBand> {
        self.price_bands.iter().find(|band| band.id == id)
    }

    #[must_use]
    pub fn resolve<S: FilterSource + ?Sized>(&self, source: &S) -> FilterSpec {
        let map = source.param_map();

        let search = trimmed(map.first(SEARCH_KEY));
        let gender = trimmed(map.first(GENDER_KEY)).and_then(|raw| raw.parse().ok());
        let sort_by = map.first_of(&SORT_KEYS).and_then(SortKey::normalize);

        let category_ids = map.collect(&CATEGORY_KEYS);
        let brand_ids = map.collect(&BRAND_KEYS);
        let color_ids = map.collect(&COLOR_KEYS);

        let explicit = PriceRange::new(
            parse_number(map.first(PRICE_MIN_KEY)),
            parse_number(map.first(PRICE_MAX_KEY)),
        );
        let selected = map.collect(&PRICE_KEYS);
        let range = explicit.union_bands(selected.iter().filter_map(|id| self.price_band(id)));

        let page = parse_number(map.first(PAGE_KEY))
            .map_or(1, |page| clamp_to_u32(page, 1, u32::MAX));
        let limit = parse_number(map.first(LIMIT_KEY))
            .map_or(self.default_limit, |limit| clamp_to_u32(limit, 1, self.max_limit));

        let spec = FilterSpec {
            search,
            gender,
            category_ids,
            brand_ids,
            color_ids,
            price_min: range.min.map(|min| min.max(0.0)),
            price_max: range.max,
            sort_by,
            page,
            limit,
        };

        tracing::debug!(
            search = spec.search.as_deref(),
            gender = spec.gender.map(Gender::as_str),
            categories = spec.category_ids.len(),
            brands = spec.brand_ids.len(),
            colors = spec.color_ids.len(),
            price_min = spec.price_min,
            price_max = spec.price_max,
            sort = spec.sort_by.map(SortKey::as_str),
            page = spec.page,
            limit = spec.limit,
            "resolved filter spec"
        );

        spec
    }
}

/// Resolve with the built-in page-size policy and price bands.
#[must_use]
pub fn resolve_filters<S: FilterSource + ?Sized>(source: &S) -> FilterSpec {
    FilterResolver::default().resolve(source)
}

// Trim; blank is absent.
fn trimmed(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

// Lenient numeric parse: surrounding whitespace allowed, non-finite rejected.
fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

// Floor into `[lo, hi]`.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_to_u32(value: f64, lo: u32, hi: u32) -> u32 {
    value.floor().clamp(f64::from(lo), f64::from(hi)) as u32
}
