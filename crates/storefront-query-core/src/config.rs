//! Catalog listing policy loaded from TOML.
//!
//! Every field has a default, so an empty document is a valid config.

use crate::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    codec::{ArrayFormat, QueryCodec, StringifyOptions},
    filter::{FilterResolver, PriceBand, default_price_bands},
};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

///
/// CatalogConfig
///

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub default_limit: u32,
    pub max_limit: u32,
    pub price_bands: Vec<PriceBand>,
    pub array_format: ArrayFormat,
    pub skip_null: bool,
    pub skip_empty_string: bool,
    pub sort_keys: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_PAGE_SIZE,
            max_limit: MAX_PAGE_SIZE,
            price_bands: default_price_bands(),
            array_format: ArrayFormat::Comma,
            skip_null: true,
            skip_empty_string: true,
            sort_keys: false,
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        tracing::debug!(
            default_limit = config.default_limit,
            max_limit = config.max_limit,
            price_bands = config.price_bands.len(),
            "loaded catalog config"
        );

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_limit == 0 {
            return Err(ConfigError::Invalid("max_limit must be at least 1".into()));
        }
        if !(1..=self.max_limit).contains(&self.default_limit) {
            return Err(ConfigError::Invalid(format!(
                "default_limit {} must lie within 1..={}",
                self.default_limit, self.max_limit
            )));
        }

        let mut seen = IndexSet::new();
        for band in &self.price_bands {
            if !seen.insert(band.id.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate price band id '{}'",
                    band.id
                )));
            }
            if let Some(max) = band.max
                && max <= band.min
            {
                return Err(ConfigError::Invalid(format!(
                    "price band '{}' has max {max} not above min {}",
                    band.id, band.min
                )));
            }
        }

        Ok(())
    }

    #[must_use]
    pub const fn stringify_options(&self) -> StringifyOptions {
        StringifyOptions {
            array_format: self.array_format,
            skip_null: self.skip_null,
            skip_empty_string: self.skip_empty_string,
            sort: self.sort_keys,
        }
    }

    #[must_use]
    pub const fn codec(&self) -> QueryCodec {
        QueryCodec::new(self.stringify_options())
    }

    #[must_use]
    pub fn resolver(&self) -> FilterResolver {
        FilterResolver::from_config(self)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = CatalogConfig::from_toml_str("").unwrap();
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.stringify_options(), StringifyOptions::canonical());
    }

    #[test]
    fn custom_policy_is_loaded() {
        let config = CatalogConfig::from_toml_str(
            r#"
            default_limit = 24
            max_limit = 96
            array_format = "none"
            sort_keys = true

            [[price_bands]]
            id = "budget"
            label = "Budget"
            min = 0.0
            max = 50.0

            [[price_bands]]
            id = "premium"
            label = "Premium"
            min = 50.0
            "#,
        )
        .unwrap();

        assert_eq!(config.default_limit, 24);
        assert_eq!(config.array_format, ArrayFormat::Repeated);
        assert!(config.sort_keys);
        assert_eq!(config.price_bands.len(), 2);
        assert!(config.price_bands[1].is_unbounded());

        let spec = config.resolver().resolve("price=premium&limit=500");
        assert_eq!(spec.price_min, Some(50.0));
        assert_eq!(spec.price_max, None);
        assert_eq!(spec.limit, 96);
    }

    #[test]
    fn codec_follows_configured_format() {
        let config = CatalogConfig {
            array_format: ArrayFormat::Repeated,
            sort_keys: true,
            ..CatalogConfig::default()
        };
        let codec = config.codec();

        let query = codec.parse("size=9&color=red&color=blue");
        assert_eq!(codec.stringify(&query), "color=red&color=blue&size=9");
    }

    #[test]
    fn default_limit_out_of_range_is_rejected() {
        let err = CatalogConfig::from_toml_str("default_limit = 80").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = CatalogConfig::from_toml_str("default_limit = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_max_limit_is_rejected() {
        let err = CatalogConfig::from_toml_str("max_limit = 0").unwrap_err();
        assert!(err.to_string().contains("max_limit"));
    }

    #[test]
    fn malformed_bands_are_rejected() {
        let duplicate = r#"
            [[price_bands]]
            id = "a"
            label = "A"
            min = 0.0

            [[price_bands]]
            id = "a"
            label = "Again"
            min = 10.0
        "#;
        let err = CatalogConfig::from_toml_str(duplicate).unwrap_err();
        assert!(err.to_string().contains("duplicate price band id 'a'"));

        let inverted = r#"
            [[price_bands]]
            id = "b"
            label = "B"
            min = 100.0
            max = 50.0
        "#;
        assert!(CatalogConfig::from_toml_str(inverted).is_err());
    }

    #[test]
    fn syntax_and_unknown_fields_surface_as_toml_errors() {
        assert!(matches!(
            CatalogConfig::from_toml_str("default_limit = "),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            CatalogConfig::from_toml_str("page_size = 10"),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
