//!
//! Filter IR
//!
//! Pure, backend-agnostic representation of boolean filter queries.
//! This layer performs no validation and knows nothing about any store.
//! All interpretation occurs in later passes:
//!
//! - normalization
//! - validation (structural)
//! - compilation (backend-specific)
//!

mod condition;
mod node;
mod operator;
mod path;

pub use condition::Condition;
pub use node::{LogicOp, Node};
pub use operator::Operator;
pub use path::NodePath;

use crate::value::Value;

/// Build a condition leaf.
#[must_use]
pub fn cond(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Node {
    Node::cond(field, op, value)
}

/// Build an AND node over zero or more children.
#[must_use]
pub fn and(children: impl IntoIterator<Item = Node>) -> Node {
    Node::and(children)
}

/// Build an OR node over zero or more children.
#[must_use]
pub fn or(children: impl IntoIterator<Item = Node>) -> Node {
    Node::or(children)
}
