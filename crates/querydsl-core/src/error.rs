use crate::{
    ir::{LogicOp, NodePath, Operator},
    value::ValueKind,
};
use thiserror::Error as ThisError;

///
/// StructuralError
///
/// Raised by the validator when a tree is not well formed.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum StructuralError {
    #[error("{op} node at {path} must have at least one child")]
    EmptyLogic { op: LogicOp, path: NodePath },

    #[error("condition at {path} has an empty field name")]
    EmptyField { path: NodePath },
}

impl StructuralError {
    /// Path of the offending node.
    #[must_use]
    pub const fn path(&self) -> &NodePath {
        match self {
            Self::EmptyLogic { path, .. } | Self::EmptyField { path } => path,
        }
    }
}

///
/// TranslationError
///
/// Raised by backend compilers when a condition cannot be expressed in the
/// backend's native form. Shared here so every backend reports the same kinds.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TranslationError {
    #[error("unsupported operator '{op}' on field '{field}'")]
    UnsupportedOperator { field: String, op: Operator },

    #[error("operator '{op}' on field '{field}' expects {expected}, found {found}")]
    InvalidValue {
        field: String,
        op: Operator,
        expected: &'static str,
        found: ValueKind,
    },

    #[error("range on field '{field}' expects a (lower, upper) bound pair, found {found}")]
    MalformedRange { field: String, found: ValueKind },

    #[error("range on field '{field}' has neither a lower nor an upper bound")]
    UnboundedRange { field: String },

    #[error("field '{field}' carries a non-finite number")]
    NonFiniteNumber { field: String },
}

impl TranslationError {
    /// Field of the condition that failed to translate.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::UnsupportedOperator { field, .. }
            | Self::InvalidValue { field, .. }
            | Self::MalformedRange { field, .. }
            | Self::UnboundedRange { field }
            | Self::NonFiniteNumber { field } => field,
        }
    }
}

///
/// ParseOperatorError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseOperatorError {
    #[error("unknown operator '{tag}'")]
    Unknown { tag: String },
}

///
/// QueryError
///
/// Error of the full normalize → validate → compile pipeline.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum QueryError {
    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error(transparent)]
    Translation(#[from] TranslationError),
}
