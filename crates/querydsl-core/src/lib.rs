//! Core of QueryDSL: the filter IR (values, operators, conditions, logic
//! nodes), its structural passes, and the contract backend compilers implement.
#![warn(unreachable_pub)]

pub mod compile;
pub mod error;
pub mod ir;
pub mod normalize;
pub mod validate;
pub mod value;


pub use compile::{Combined, Compiler, combine_clauses, compile};
pub use error::{ParseOperatorError, QueryError, StructuralError, TranslationError};
pub use ir::{Condition, LogicOp, Node, NodePath, Operator, and, cond, or};
pub use normalize::normalize;
pub use validate::validate;
pub use value::{Value, ValueKind};

///
/// Prelude
///
/// Prelude contains only IR vocabulary and the compiler trait.
/// No errors or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        compile::Compiler,
        ir::{Condition, LogicOp, Node, Operator, and, cond, or},
        value::Value,
    };
}
