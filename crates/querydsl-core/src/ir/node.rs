use crate::{
    ir::{Condition, Operator},
    value::Value,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

///
/// LogicOp
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LogicOp {
    #[display("and")]
    And,
    #[display("or")]
    Or,
}

///
/// Node
///
/// One node of the filter IR. Only `Cond` carries a condition; logic nodes
/// carry zero or more children and nothing else. Each node owns its
/// children exclusively.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    And(Vec<Self>),
    Or(Vec<Self>),
    Cond(Condition),
}

impl Node {
    ///
    /// CONSTRUCTORS
    ///

    #[must_use]
    pub fn cond(field: impl Into<String>, op: Operator, value: impl Into<Value>) -> Self {
        Self::Cond(Condition::new(field, op, value))
    }

    #[must_use]
    pub fn and(children: impl IntoIterator<Item = Self>) -> Self {
        Self::And(children.into_iter().collect())
    }

    #[must_use]
    pub fn or(children: impl IntoIterator<Item = Self>) -> Self {
        Self::Or(children.into_iter().collect())
    }

    #[must_use]
    pub fn logic(op: LogicOp, children: impl IntoIterator<Item = Self>) -> Self {
        match op {
            LogicOp::And => Self::and(children),
            LogicOp::Or => Self::or(children),
        }
    }

    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cond(field, Operator::Eq, value)
    }

    #[must_use]
    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::cond(field, Operator::Ne, value)
    }

    #[must_use]
    pub fn in_<I, T>(field: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::cond(field, Operator::In, Value::list(values))
    }

    /// Inclusive range; pass `Value::Null` (or `None`) for an open side.
    #[must_use]
    pub fn range(
        field: impl Into<String>,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Self {
        Self::cond(field, Operator::Range, Value::between(lower, upper))
    }

    #[must_use]
    pub fn like(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::cond(field, Operator::Like, Value::Text(pattern.into()))
    }

    #[must_use]
    pub fn like_i(field: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::cond(field, Operator::LikeI, Value::Text(pattern.into()))
    }

    #[must_use]
    pub fn prefix_like(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::cond(field, Operator::PrefixLike, Value::Text(prefix.into()))
    }

    #[must_use]
    pub fn exists(field: impl Into<String>, present: bool) -> Self {
        Self::cond(field, Operator::Exists, present)
    }

    ///
    /// INSPECTION
    ///

    /// Logic operator of an `And`/`Or` node, `None` for a condition.
    #[must_use]
    pub const fn logic_op(&self) -> Option<LogicOp> {
        match self {
            Self::And(_) => Some(LogicOp::And),
            Self::Or(_) => Some(LogicOp::Or),
            Self::Cond(_) => None,
        }
    }

    #[must_use]
    pub const fn is_logic(&self) -> bool {
        self.logic_op().is_some()
    }

    /// Children of a logic node; empty for a condition.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::And(children) | Self::Or(children) => children,
            Self::Cond(_) => &[],
        }
    }

    #[must_use]
    pub const fn condition(&self) -> Option<&Condition> {
        match self {
            Self::Cond(condition) => Some(condition),
            Self::And(_) | Self::Or(_) => None,
        }
    }

    /// Number of condition leaves in the tree.
    #[must_use]
    pub fn condition_count(&self) -> usize {
        match self {
            Self::Cond(_) => 1,
            Self::And(children) | Self::Or(children) => {
                children.iter().map(Self::condition_count).sum()
            }
        }
    }

    /// Height of the tree; a lone condition or empty logic node has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or_default()
    }
}

impl From<Condition> for Node {
    fn from(condition: Condition) -> Self {
        Self::Cond(condition)
    }
}

impl BitAnd for Node {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl BitAnd for &Node {
    type Output = Node;

    fn bitand(self, rhs: Self) -> Self::Output {
        Node::And(vec![self.clone(), rhs.clone()])
    }
}

impl BitOr for Node {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl BitOr for &Node {
    type Output = Node;

    fn bitor(self, rhs: Self) -> Self::Output {
        Node::Or(vec![self.clone(), rhs.clone()])
    }
}

///
/// TESTS
///
