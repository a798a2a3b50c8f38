//! Errors surfaced by the decoding and configuration paths.

/// Decoding refused because a node does not have the expected shape.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("{what} node: expected {expected} operands, found {found}")]
    OperandCount {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what} node: operand {index} should be {expected}, found {found}")]
    UnexpectedLeaf {
        what: &'static str,
        index: usize,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown numeric type tag `{0}`")]
    UnknownNumericKind(String),

    #[error("invalid fixed-point format: signed width {signed_width}, point position {point_pos}")]
    InvalidFixedPoint { signed_width: i64, point_pos: i64 },

    /// The node matches neither the scalar nor the aggregate info shape.
    /// Both refusals are kept.
    #[error(
        "node does not encode scalar or aggregate info \
         (as scalar: {scalar}; as aggregate: {aggregate})"
    )]
    UnrecognizedInfo {
        scalar: Box<DecodeError>,
        aggregate: Box<DecodeError>,
    },
}

/// Failure to load an `AttachmentConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid attachment config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("attachment kind `{0}` is used for more than one kind of metadata")]
    DuplicateKind(String),

    #[error("attachment kind names must not be empty")]
    EmptyKind,
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
