//! Error types for documentation rendering

use thiserror::Error;

/// Errors raised while building the link table or rendering Markdown
///
/// The engine performs no up-front validation of the document; malformed
/// input surfaces at the point of use and aborts the run. There is no
/// partial recovery and nothing transient to retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A reference type names an id that no documented entity declares
    #[error("unresolved reference: type `{name}` points at unknown entity id {id}")]
    UnresolvedReference { id: u64, name: String },

    /// A function entity carries no signatures to render
    #[error("function `{0}` has no signatures")]
    MissingSignature(String),

    /// A parameter or property carries no type
    #[error("`{0}` has no type")]
    MissingType(String),

    /// A signature carries no return type
    #[error("signature `{0}` has no return type")]
    MissingReturnType(String),

    /// Two entities declare the same stable id
    #[error("duplicate entity id {id}: declared in both `{first}` and `{second}`")]
    DuplicateId {
        id: u64,
        first: String,
        second: String,
    },

    /// Two modules normalize to the same output path
    #[error("output path collision: `{path}` is produced by both `{first}` and `{second}`")]
    PathCollision {
        path: String,
        first: String,
        second: String,
    },
}
