//! Typemark Core - Markdown renderer for reflection documents
//!
//! This crate turns a symbol-level reflection model of a codebase
//! (functions, interfaces, properties, type references) into a set of
//! cross-linked Markdown documents, one per source module:
//! - Reflection: typed model of the analyzer's JSON document
//! - Crosslink: id-to-module link table built before rendering
//! - Paths: source path to output path resolution
//! - Markdown: kind-dispatching entity renderer
//! - Generator: the build-then-render entry point
//!
//! The engine is a pure, synchronous function of its input: the external
//! analyzer and all file I/O live with the caller.

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Typed model of the analyzer's reflection document
pub mod reflection;

/// Error types for link table construction and rendering
pub mod error;

/// Output path resolution
pub mod paths;

/// Cross-reference link table
pub mod crosslink;

/// Markdown rendering of reflection entities
pub mod markdown;

/// Documentation generation entry point
pub mod generator;

/// Convenience re-export of the generator
pub use generator::{DocConfig, DocFile, DocGenerator};

/// Convenience re-export of the document model
pub use reflection::{Entity, EntityKind, Module, ReflectionDocument};

/// Convenience re-export of the link table
pub use crosslink::{LinkEntry, LinkTable};

/// Convenience re-export of the error type
pub use error::RenderError;

/// Convenience re-export of the path resolver
pub use paths::PathResolver;

/// Convenience re-export of the renderer
pub use markdown::MarkdownRenderer;
