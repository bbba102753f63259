use crate::{
    error::{QueryError, TranslationError},
    ir::Node,
    normalize::normalize,
    validate::validate,
};

///
/// Compiler
///
/// Translates a filter tree into a backend's native query representation.
///
/// Every implementation must honor the same contract:
/// - `None` compiles to the backend's "match everything" value, never an error
/// - unknown operators and malformed operands fail with a `TranslationError`
/// - logic nodes combine their compiled children with the native AND / OR;
///   children that compile to an empty result are dropped, errors propagate,
///   and a single remaining clause is returned without a wrapper
///   (see [`combine_clauses`])
///

pub trait Compiler {
    /// Native representation produced by this backend.
    type Output;

    /// Compile a tree as-is. The tree may be un-normalized.
    fn compile(&self, node: Option<&Node>) -> Result<Self::Output, TranslationError>;

    /// Normalize, validate, then compile.
    fn compile_checked(&self, node: Option<&Node>) -> Result<Self::Output, QueryError> {
        let normalized = normalize(node);
        validate(normalized.as_ref())?;

        self.compile(normalized.as_ref()).map_err(QueryError::from)
    }
}

/// Compile `node` with `compiler`.
pub fn compile<C: Compiler + ?Sized>(
    compiler: &C,
    node: Option<&Node>,
) -> Result<C::Output, TranslationError> {
    compiler.compile(node)
}

///
/// Combined
///
/// Outcome of folding the compiled children of one logic node.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Combined<T> {
    /// Every child was empty; the node matches everything.
    Empty,
    /// Exactly one non-empty clause; use it without a wrapper.
    Single(T),
    /// Two or more clauses to join with the backend's combinator.
    Many(Vec<T>),
}

/// Fold compiled children of a logic node.
///
/// Stops at the first error and returns it. Clauses for which `is_empty`
/// holds are dropped. Clause order is preserved.
pub fn combine_clauses<T, E, I, F>(results: I, is_empty: F) -> Result<Combined<T>, E>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: Fn(&T) -> bool,
{
    let mut clauses = Vec::new();

    for result in results {
        let clause = result?;
        if !is_empty(&clause) {
            clauses.push(clause);
        }
    }

    Ok(match clauses.len() {
        0 => Combined::Empty,
        1 => clauses.pop().map_or(Combined::Empty, Combined::Single),
        _ => Combined::Many(clauses),
    })
}

///
/// TESTS
///
