//! Errors raised while turning a schema document into declaration modules.
//!
//! Every variant is fatal: the document is trusted to be internally
//! consistent, so any of these means an assumption about the schema no longer
//! holds and the run must stop before anything is written.

/// Failure of a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The document is not JSON, or lacks the `info`/`definitions` shape.
    #[error("failed to parse schema document: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `$ref` that does not point into `#/definitions/`.
    #[error("invalid or unsupported $ref: {reference:?}")]
    InvalidReference { reference: String },

    /// A `$ref` naming a definition the document does not contain.
    #[error("failed to resolve {name} in {title}/{version}")]
    UnresolvedReference {
        name: String,
        title: String,
        version: String,
    },

    /// A `$ref` to a definition that classifies as excluded, so no output
    /// symbol exists for it.
    #[error("value references excluded type: {name}")]
    ExcludedReferenceTarget { name: String },

    /// Two definitions that classify to the same symbol in the same module.
    #[error("{first} and {second} both declare {symbol} in module {module:?}")]
    DuplicateDeclaration {
        symbol: String,
        module: String,
        first: String,
        second: String,
    },

    /// A property value outside the scalar/array/map/reference taxonomy.
    #[error("unrecognized value shape: {shape}")]
    ImpossibleValueShape { shape: String },
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
