use crate::{ir::Operator, value::Value};
use serde::{Deserialize, Serialize};

///
/// Condition
///
/// A single `field <op> value` predicate. Nothing is checked at
/// construction; the validator and backends reject malformed conditions.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Condition {
    pub field: String,
    pub op: Operator,
    pub value: Value,
}

impl Condition {
    #[must_use]
    pub fn new(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// True when the field name is empty or only whitespace.
    #[must_use]
    pub fn has_blank_field(&self) -> bool {
        self.field.trim().is_empty()
    }
}
