use crate::ir::{LogicOp, Node};
use tracing::trace;

///
/// Normalize a tree into its canonical structural form.
///
/// Rules, applied bottom-up in a single pass:
/// - COND                    → unchanged
/// - AND(AND(a, b), c)       → AND(a, b, c)   (same for OR)
/// - AND(x, <empty>)         → x
/// - AND()                   → None
/// - AND(x)                  → x
///
/// Condition contents are never inspected or rewritten, and child order is
/// preserved. The input is left untouched; the result is a fresh tree.
/// `normalize(normalize(x)) == normalize(x)` for every `x`.
///
#[must_use]
pub fn normalize(node: Option<&Node>) -> Option<Node> {
    node.and_then(Node::normalized)
}

impl Node {
    /// Normalized copy of this tree; `None` when nothing but empty logic
    /// nodes remain.
    #[must_use]
    pub fn normalized(&self) -> Option<Self> {
        self.clone().into_normalized()
    }

    /// Consuming form of [`Node::normalized`]; moves leaves instead of
    /// cloning them.
    #[must_use]
    pub fn into_normalized(self) -> Option<Self> {
        match self {
            Self::Cond(_) => Some(self),
            Self::And(children) => normalize_logic(LogicOp::And, children),
            Self::Or(children) => normalize_logic(LogicOp::Or, children),
        }
    }
}

fn normalize_logic(op: LogicOp, children: Vec<Node>) -> Option<Node> {
    let mut out = Vec::with_capacity(children.len());

    for child in children {
        let Some(normalized) = child.into_normalized() else {
            continue;
        };

        match normalized {
            Node::And(grandchildren) if op == LogicOp::And => out.extend(grandchildren),
            Node::Or(grandchildren) if op == LogicOp::Or => out.extend(grandchildren),
            other => out.push(other),
        }
    }

    match out.len() {
        0 => {
            trace!(%op, "dropping empty logic node");
            None
        }
        1 => {
            trace!(%op, "collapsing single-child logic node");
            out.pop()
        }
        _ => Some(Node::logic(op, out)),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Operator, and, cond, or};

    fn a() -> Node {
        cond("a", Operator::Eq, 1)
    }

    fn b() -> Node {
        cond("b", Operator::Eq, 2)
    }

    fn c() -> Node {
        cond("c", Operator::Eq, 3)
    }

    #[test]
    fn none_stays_none() {
        assert_eq!(normalize(None), None);
    }

    #[test]
    fn condition_is_returned_unchanged() {
        let leaf = cond("name", Operator::Like, "al");

        assert_eq!(normalize(Some(&leaf)), Some(leaf));
    }

    #[test]
    fn same_operator_children_are_flattened() {
        let tree = and([and([a(), b()]), c()]);

        assert_eq!(normalize(Some(&tree)), Some(and([a(), b(), c()])));
    }

    #[test]
    fn flattening_preserves_child_order() {
        let tree = or([a(), or([b(), or([c(), a()])])]);

        assert_eq!(tree.normalized(), Some(or([a(), b(), c(), a()])));
    }

    #[test]
    fn different_operator_children_stay_nested() {
        let tree = and([or([a(), b()]), c()]);

        assert_eq!(tree.normalized(), Some(tree.clone()));
    }

    #[test]
    fn single_child_wrappers_collapse_at_any_depth() {
        assert_eq!(and([or([a()])]).normalized(), Some(a()));
        assert_eq!(
            or([and([or([and([a(), b()])])])]).normalized(),
            Some(and([a(), b()]))
        );
    }

    #[test]
    fn empty_logic_nodes_vanish() {
        assert_eq!(and(Vec::new()).normalized(), None);
        assert_eq!(
            or([and(Vec::new()), or([and(Vec::new())])]).normalized(),
            None
        );
    }

    #[test]
    fn empty_branches_are_dropped_before_collapse() {
        let tree = and([or(Vec::new()), a(), and(Vec::new())]);

        assert_eq!(tree.normalized(), Some(a()));
    }

    #[test]
    fn collapsed_child_of_same_operator_is_spliced() {
        // OR(AND(a, b)) collapses to AND(a, b), which then joins its parent.
        let tree = and([or([and([a(), b()])]), c()]);

        assert_eq!(tree.normalized(), Some(and([a(), b(), c()])));
    }

    #[test]
    fn input_tree_is_not_modified() {
        let tree = and([and([a(), b()]), or(Vec::new())]);
        let before = tree.clone();

        let _ = normalize(Some(&tree));

        assert_eq!(tree, before);
    }

    #[test]
    fn normalizing_twice_is_a_no_op() {
        let tree = or([and([a(), and([b()])]), or([c(), or(Vec::new())])]);
        let once = tree.normalized();

        assert_eq!(normalize(once.as_ref()), once);
    }
}
