use crate::{
    error::StructuralError,
    ir::{LogicOp, Node, NodePath},
};
use tracing::debug;

///
/// Validate the structure of a tree.
///
/// `None` is valid and means "no filter". A logic node must have at least one
/// child and every child must be valid; a condition must name a field.
/// Children are checked depth-first in order and the first failure is
/// returned. Operand shapes are not checked here; that is the backend's job.
///
pub fn validate(node: Option<&Node>) -> Result<(), StructuralError> {
    let Some(node) = node else {
        return Ok(());
    };

    validate_at(node, &NodePath::root()).inspect_err(|err| {
        debug!(error = %err, "filter tree failed validation");
    })
}

impl Node {
    /// Method form of [`validate`].
    pub fn validate(&self) -> Result<(), StructuralError> {
        validate(Some(self))
    }
}

fn validate_at(node: &Node, path: &NodePath) -> Result<(), StructuralError> {
    match node {
        Node::And(children) => validate_logic(LogicOp::And, children, path),
        Node::Or(children) => validate_logic(LogicOp::Or, children, path),
        Node::Cond(condition) => {
            if condition.has_blank_field() {
                return Err(StructuralError::EmptyField { path: path.clone() });
            }

            Ok(())
        }
    }
}

fn validate_logic(op: LogicOp, children: &[Node], path: &NodePath) -> Result<(), StructuralError> {
    if children.is_empty() {
        return Err(StructuralError::EmptyLogic {
            op,
            path: path.clone(),
        });
    }

    for (index, child) in children.iter().enumerate() {
        validate_at(child, &path.child(index))?;
    }

    Ok(())
}

///
/// TESTS
///
