use crate::error::ParseOperatorError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// Operator
///
/// Closed set of leaf comparison operators. Marked non-exhaustive so that
/// backends living outside this crate keep an explicit rejection arm.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[non_exhaustive]
pub enum Operator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "range")]
    Range,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "like_i")]
    LikeI,
    #[serde(rename = "prefix_like")]
    PrefixLike,
    #[serde(rename = "exists")]
    Exists,
}

impl Operator {
    pub const ALL: [Self; 8] = [
        Self::Eq,
        Self::Ne,
        Self::In,
        Self::Range,
        Self::Like,
        Self::LikeI,
        Self::PrefixLike,
        Self::Exists,
    ];

    /// Stable textual tag, shared by `Display`, `FromStr`, and serde.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::In => "in",
            Self::Range => "range",
            Self::Like => "like",
            Self::LikeI => "like_i",
            Self::PrefixLike => "prefix_like",
            Self::Exists => "exists",
        }
    }

    /// Substring and prefix operators, which take a text pattern.
    #[must_use]
    pub const fn is_pattern(self) -> bool {
        matches!(self, Self::Like | Self::LikeI | Self::PrefixLike)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operator {
    type Err = ParseOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.tag() == s)
            .ok_or_else(|| ParseOperatorError::Unknown { tag: s.to_string() })
    }
}

///
/// TESTS
///
