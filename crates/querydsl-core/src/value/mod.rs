mod kind;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

// re-exports
pub use kind::ValueKind;

///
/// Value
///
/// Operand of a condition. The shape an operator expects is not enforced
/// here; validation of operand shapes happens in the backend compilers.
///
/// Null   → absent value; inside a `Range` it marks an unbounded side.
/// Range  → inclusive bound pair `(lower, upper)`.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    List(Vec<Self>),
    Range { lower: Box<Self>, upper: Box<Self> },
}

impl Value {
    ///
    /// CONSTRUCTORS
    ///

    /// Build a bound pair. Pass `Value::Null` (or `None`) for an open side.
    #[must_use]
    pub fn between(lower: impl Into<Self>, upper: impl Into<Self>) -> Self {
        Self::Range {
            lower: Box::new(lower.into()),
            upper: Box::new(upper.into()),
        }
    }

    #[must_use]
    pub fn at_least(lower: impl Into<Self>) -> Self {
        Self::between(lower, Self::Null)
    }

    #[must_use]
    pub fn at_most(upper: impl Into<Self>) -> Self {
        Self::between(Self::Null, upper)
    }

    #[must_use]
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Uint(_) => ValueKind::Uint,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Range { .. } => ValueKind::Range,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true for values that carry no nested values.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Range { .. })
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Returns the `(lower, upper)` bounds of a `Range`.
    #[must_use]
    pub fn as_range(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Range { lower, upper } => Some((lower.as_ref(), upper.as_ref())),
            _ => None,
        }
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
    f32    => Float,
    f64    => Float,
    &str   => Text,
    String => Text,
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::list(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}
