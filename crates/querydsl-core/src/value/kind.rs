use serde::{Deserialize, Serialize};
use std::fmt;

///
/// ValueKind
///
/// Fieldless variant tag for `Value`, used in diagnostics so errors can say
/// what shape they received without carrying the payload.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    Null,
    Bool,
    Int,
    Uint,
    Float,
    Text,
    List,
    Range,
}

impl ValueKind {
    /// Stable human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Uint => "uint",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Range => "range",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
