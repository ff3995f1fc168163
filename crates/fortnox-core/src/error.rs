//! Error types for fortnox-core.

/// Result type for fortnox-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or decoding API payloads.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A decimal value could not be represented as a JSON number.
    #[error("decimal {value} cannot be encoded as a JSON number")]
    DecimalOutOfRange {
        /// The offending decimal, in canonical string form.
        value: String,
    },

    /// A float attribute was NaN or infinite.
    #[error("attribute {key} holds a non-finite float")]
    NonFiniteFloat {
        /// Attribute name.
        key: String,
    },

    /// A response body declared as JSON could not be decoded.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
