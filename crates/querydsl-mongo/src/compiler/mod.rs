
use crate::{config::MongoCompilerConfig, filter::MongoFilter};
use querydsl_core::{
    Combined, Compiler, TranslationError, Value, ValueKind, combine_clauses,
    ir::{Condition, Node, Operator},
};
use serde_json::{Map, Number, Value as JsonValue};
use tracing::{debug, trace};

///
/// CONSTANTS
///

const AND: &str = "$and";
const OR: &str = "$or";
const NE: &str = "$ne";
const IN: &str = "$in";
const REGEX: &str = "$regex";
const OPTIONS: &str = "$options";
const EXISTS: &str = "$exists";
const GTE: &str = "$gte";
const LTE: &str = "$lte";

// Lazy wildcard used on both sides of substring patterns.
const ANY: &str = ".*?";

///
/// MongoCompiler
///
/// Compiles the filter IR into MongoDB filter documents.
///
/// | operator      | output                                         |
/// |---------------|------------------------------------------------|
/// | `=`           | `{ field: v }`                                 |
/// | `!=`          | `{ field: { $ne: v } }`                        |
/// | `in`          | `{ field: { $in: [..] } }`                     |
/// | `like`        | `{ field: { $regex: ".*?p.*?" } }`             |
/// | `like_i`      | as `like`, plus `$options: "i"`                |
/// | `prefix_like` | `{ field: { $regex: "^p.*?" } }`               |
/// | `exists`      | `{ field: { $exists: b } }`                    |
/// | `range`       | `{ field: { $gte: lo, $lte: hi } }`            |
///

#[derive(Clone, Debug, Default)]
pub struct MongoCompiler {
    config: MongoCompilerConfig,
}

impl MongoCompiler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_config(config: MongoCompilerConfig) -> Self {
        Self { config }
    }

    fn compile_node(&self, node: &Node) -> Result<MongoFilter, TranslationError> {
        match node {
            Node::And(children) => self.compile_logic(AND, children),
            Node::Or(children) => self.compile_logic(OR, children),
            Node::Cond(condition) => self.compile_condition(condition),
        }
    }

    fn compile_logic(&self, key: &str, children: &[Node]) -> Result<MongoFilter, TranslationError> {
        let results = children.iter().map(|child| self.compile_node(child));

        Ok(
            match combine_clauses(results, |filter: &MongoFilter| filter.is_empty())? {
                Combined::Empty => MongoFilter::default(),
                Combined::Single(clause) => clause,
                Combined::Many(clauses) => MongoFilter::single(
                    key,
                    JsonValue::Array(clauses.into_iter().map(MongoFilter::into_json).collect()),
                ),
            },
        )
    }

    fn compile_condition(&self, cond: &Condition) -> Result<MongoFilter, TranslationError> {
        trace!(field = %cond.field, op = %cond.op, "compiling condition");

        let field = cond.field.as_str();

        match cond.op {
            Operator::Eq => Ok(MongoFilter::single(field, to_json(cond, &cond.value)?)),

            Operator::Ne => Ok(with_operators(field, [(NE, to_json(cond, &cond.value)?)])),

            Operator::In => {
                if cond.value.as_list().is_none() {
                    return Err(invalid_value(cond, "a list"));
                }

                Ok(with_operators(field, [(IN, to_json(cond, &cond.value)?)]))
            }

            Operator::Like => {
                let pattern = self.pattern(cond)?;
                let regex = format!("{ANY}{pattern}{ANY}");

                Ok(with_operators(field, [(REGEX, JsonValue::String(regex))]))
            }

            Operator::LikeI => {
                let pattern = self.pattern(cond)?;
                let regex = format!("{ANY}{pattern}{ANY}");

                Ok(with_operators(
                    field,
                    [
                        (REGEX, JsonValue::String(regex)),
                        (OPTIONS, JsonValue::String("i".to_string())),
                    ],
                ))
            }

            Operator::PrefixLike => {
                let pattern = self.pattern(cond)?;
                let regex = format!("^{pattern}{ANY}");

                Ok(with_operators(field, [(REGEX, JsonValue::String(regex))]))
            }

            Operator::Exists => {
                let present = cond
                    .value
                    .as_bool()
                    .ok_or_else(|| invalid_value(cond, "a bool"))?;

                Ok(with_operators(field, [(EXISTS, JsonValue::Bool(present))]))
            }

            Operator::Range => self.compile_range(cond),

            op => Err(TranslationError::UnsupportedOperator {
                field: cond.field.clone(),
                op,
            }),
        }
    }

    fn compile_range(&self, cond: &Condition) -> Result<MongoFilter, TranslationError> {
        let (lower, upper) = cond.value.as_range().ok_or_else(|| {
            TranslationError::MalformedRange {
                field: cond.field.clone(),
                found: cond.value.kind(),
            }
        })?;

        let mut bounds = Map::new();
        if !lower.is_null() {
            bounds.insert(GTE.to_string(), to_json(cond, lower)?);
        }
        if !upper.is_null() {
            bounds.insert(LTE.to_string(), to_json(cond, upper)?);
        }

        if bounds.is_empty() {
            if self.config.reject_unbounded_ranges {
                return Err(TranslationError::UnboundedRange {
                    field: cond.field.clone(),
                });
            }

            // no bound on either side constrains nothing
            return Ok(MongoFilter::default());
        }

        Ok(MongoFilter::single(cond.field.as_str(), JsonValue::Object(bounds)))
    }

    // Text operand of a pattern operator, escaped per config.
    fn pattern(&self, cond: &Condition) -> Result<String, TranslationError> {
        let text = cond
            .value
            .as_text()
            .ok_or_else(|| invalid_value(cond, "text"))?;

        Ok(if self.config.escape_patterns {
            regex::escape(text)
        } else {
            text.to_string()
        })
    }
}

impl Compiler for MongoCompiler {
    type Output = MongoFilter;

    fn compile(&self, node: Option<&Node>) -> Result<MongoFilter, TranslationError> {
        let Some(node) = node else {
            return Ok(MongoFilter::default());
        };

        self.compile_node(node).inspect_err(|err| {
            debug!(error = %err, field = err.field(), "mongo filter compilation failed");
        })
    }
}

// `{ field: { op: value, .. } }`
fn with_operators<const N: usize>(field: &str, ops: [(&str, JsonValue); N]) -> MongoFilter {
    let inner = ops
        .into_iter()
        .map(|(op, value)| (op.to_string(), value))
        .collect::<Map<_, _>>();

    MongoFilter::single(field, JsonValue::Object(inner))
}

fn invalid_value(cond: &Condition, expected: &'static str) -> TranslationError {
    invalid_value_of(cond, expected, cond.value.kind())
}

// `found` is the kind of the offending value, which may sit inside the operand.
fn invalid_value_of(
    cond: &Condition,
    expected: &'static str,
    found: ValueKind,
) -> TranslationError {
    TranslationError::InvalidValue {
        field: cond.field.clone(),
        op: cond.op,
        expected,
        found,
    }
}

// Lists convert element-wise; ranges are not representable as an operand.
fn to_json(cond: &Condition, value: &Value) -> Result<JsonValue, TranslationError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::Number(Number::from(*n)),
        Value::Uint(n) => JsonValue::Number(Number::from(*n)),
        Value::Float(f) => JsonValue::Number(Number::from_f64(*f).ok_or_else(|| {
            TranslationError::NonFiniteNumber {
                field: cond.field.clone(),
            }
        })?),
        Value::Text(s) => JsonValue::String(s.clone()),
        Value::List(items) => JsonValue::Array(
            items
                .iter()
                .map(|item| to_json(cond, item))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Range { .. } => {
            return Err(invalid_value_of(cond, "a scalar or list", value.kind()));
        }
    })
}
