//! ## Crate layout
//! - `core`: filter IR, normalization, validation, and the compiler contract.
//! - `mongo`: reference backend producing MongoDB filter documents
//!   (feature `mongo`, enabled by default).
//!
//! The `prelude` module mirrors the surface most callers need to build,
//! check, and compile a filter.

pub use querydsl_core as core;
#[cfg(feature = "mongo")]
pub use querydsl_mongo as mongo;

pub use querydsl_core::{QueryError, StructuralError, TranslationError, normalize, validate};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use querydsl_core::prelude::*;
    #[cfg(feature = "mongo")]
    pub use querydsl_mongo::{MongoCompiler, MongoCompilerConfig, MongoFilter};
}

///
/// TESTS
///

#[cfg(all(test, feature = "mongo"))]
mod tests {
    use super::prelude::*;
    use serde_json::json;

    #[test]
    fn prelude_covers_build_and_compile() {
        let tree = and([cond("age", Operator::Range, Value::at_least(18)), Node::eq("active", true)]);

        let filter = MongoCompiler::new().compile_checked(Some(&tree)).unwrap();

        assert_eq!(
            filter.into_json(),
            json!({ "$and": [{ "age": { "$gte": 18 } }, { "active": true }] })
        );
    }

    #[test]
    fn version_matches_manifest() {
        assert_eq!(super::VERSION, env!("CARGO_PKG_VERSION"));
        assert!(!super::VERSION.is_empty());
    }
}
