use serde::{Deserialize, Serialize};

///
/// PriceBand
///
/// A named price bucket offered as a discrete filter. `min` is inclusive;
/// `max` is inclusive when present and `None` means no upper bound.
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub id: String,
    pub label: String,
    pub min: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl PriceBand {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, min: f64, max: Option<f64>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            min,
            max,
        }
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

/// The storefront's built-in price buckets.
#[must_use]
pub fn default_price_bands() -> Vec<PriceBand> {
    vec![
        PriceBand::new("under-100", "Under $100", 0.0, Some(100.0)),
        PriceBand::new("100-150", "$100 - $150", 100.0, Some(150.0)),
        PriceBand::new("150-200", "$150 - $200", 150.0, Some(200.0)),
        PriceBand::new("200-plus", "$200 & Above", 200.0, None),
    ]
}

///
/// PriceRange
///
/// Running min/max accumulator for explicit bounds merged with selected
/// bands. `max_unbounded` wins over any finite maximum.
///

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PriceRange {
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
}

impl PriceRange {
    pub(crate) const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    ///
    /// Union the selected bands into the explicit bounds.
    ///
    /// - min becomes the least of the explicit min and every band min
    /// - if any selected band is unbounded, max is dropped entirely
    /// - otherwise max becomes the greatest of the explicit max and band maxima
    ///
    /// Bands are only considered when at least one was selected; an empty
    /// selection leaves the explicit bounds untouched.
    ///
    pub(crate) fn union_bands<'a>(self, bands: impl IntoIterator<Item = &'a PriceBand>) -> Self {
        let mut band_min: Option<f64> = None;
        let mut band_max: Option<f64> = None;
        let mut unbounded = false;

        for band in bands {
            band_min = Some(band_min.map_or(band.min, |current| current.min(band.min)));

            match band.max {
                None => unbounded = true,
                Some(max) => band_max = Some(band_max.map_or(max, |current| current.max(max))),
            }
        }

        let min = match (self.min, band_min) {
            (Some(explicit), Some(band)) => Some(explicit.min(band)),
            (explicit, band) => explicit.or(band),
        };

        let max = if unbounded {
            None
        } else {
            match (self.max, band_max) {
                (Some(explicit), Some(band)) => Some(explicit.max(band)),
                (explicit, band) => explicit.or(band),
            }
        };

        Self { min, max }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(id: &str) -> PriceBand {
        default_price_bands()
            .into_iter()
            .find(|band| band.id == id)
            .unwrap()
    }

    #[test]
    fn disjoint_bands_union_to_outer_bounds() {
        let range = PriceRange::default().union_bands(&[band("under-100"), band("150-200")]);
        assert_eq!(range, PriceRange::new(Some(0.0), Some(200.0)));
    }

    #[test]
    fn unbounded_band_drops_max() {
        let range = PriceRange::default().union_bands(&[band("under-100"), band("200-plus")]);
        assert_eq!(range, PriceRange::new(Some(0.0), None));
    }

    #[test]
    fn unbounded_band_overrides_explicit_max() {
        let range = PriceRange::new(None, Some(120.0)).union_bands(&[band("200-plus")]);
        assert_eq!(range, PriceRange::new(Some(200.0), None));
    }

    #[test]
    fn explicit_bounds_widen_band_range() {
        let range = PriceRange::new(Some(50.0), Some(400.0)).union_bands(&[band("100-150")]);
        assert_eq!(range, PriceRange::new(Some(50.0), Some(400.0)));

        let range = PriceRange::new(Some(120.0), Some(130.0)).union_bands(&[band("100-150")]);
        assert_eq!(range, PriceRange::new(Some(100.0), Some(150.0)));
    }

    #[test]
    fn no_bands_keep_explicit_bounds() {
        let range = PriceRange::new(Some(10.0), None).union_bands(std::iter::empty());
        assert_eq!(range, PriceRange::new(Some(10.0), None));
    }
}
