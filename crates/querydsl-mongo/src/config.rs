use serde::{Deserialize, Serialize};

///
/// MongoCompilerConfig
///
/// Translation policy knobs. Missing keys take their defaults when
/// deserialized, so an empty document is a valid configuration.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MongoCompilerConfig {
    /// Escape regex metacharacters in `like`, `like_i` and `prefix_like`
    /// operands so they match literally. When false the operand is embedded
    /// into the regex verbatim.
    pub escape_patterns: bool,

    /// Fail on a range with no bound at all instead of compiling it to the
    /// empty filter.
    pub reject_unbounded_ranges: bool,
}

impl MongoCompilerConfig {
    /// Configuration that embeds patterns verbatim.
    #[must_use]
    pub fn raw_patterns() -> Self {
        Self {
            escape_patterns: false,
            ..Self::default()
        }
    }
}

impl Default for MongoCompilerConfig {
    fn default() -> Self {
        Self {
            escape_patterns: true,
            reject_unbounded_ranges: false,
        }
    }
}
