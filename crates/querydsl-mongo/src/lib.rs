//! Reference backend for QueryDSL: compiles the filter IR into MongoDB-style
//! filter documents.
#![warn(unreachable_pub)]

pub mod compiler;
pub mod config;
pub mod filter;

pub use compiler::MongoCompiler;
pub use config::MongoCompilerConfig;
pub use filter::MongoFilter;
