use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error as ThisError;

///
/// Gender
///
/// Audience a product is catalogued under.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    #[display("men")]
    Men,
    #[display("women")]
    Women,
    #[display("unisex")]
    Unisex,
    #[display("kids")]
    Kids,
}

impl Gender {
    pub const ALL: [Self; 4] = [Self::Men, Self::Women, Self::Unisex, Self::Kids];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Men => "men",
            Self::Women => "women",
            Self::Unisex => "unisex",
            Self::Kids => "kids",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
            Self::Kids => "Kids",
        }
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or(UnknownGender)
    }
}

///
/// UnknownGender
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[error("unknown gender")]
pub struct UnknownGender;
