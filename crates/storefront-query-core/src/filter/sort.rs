use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// SortKey
///
/// Canonical listing orders. The default (no key) is most-recent-first.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[display("price_asc")]
    PriceAsc,
    #[display("price_desc")]
    PriceDesc,
    #[display("latest")]
    Latest,
}

impl SortKey {
    /// Interpret a raw `sort`/`sortBy` value.
    ///
    /// `featured` means "no override"; `newest` is an alias of `latest`;
    /// anything unrecognized is ignored.
    #[must_use]
    pub fn normalize(raw: &str) -> Option<Self> {
        match raw {
            "featured" => None,
            "newest" => Some(Self::Latest),
            other => other.parse().ok(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::Latest => "latest",
        }
    }
}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "latest" => Ok(Self::Latest),
            _ => Err(UnknownSortKey),
        }
    }
}

///
/// UnknownSortKey
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("unknown sort key")]
pub struct UnknownSortKey;
