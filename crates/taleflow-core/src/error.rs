//! Core error types for taleflow-core.
//!
//! Uses `thiserror` for structured, matchable error variants. The only
//! fallible operation at this layer is handle decoding; everything else in
//! the document model is plain data.

use thiserror::Error;

/// Core errors produced by the taleflow-core crate.
///
/// All three variants describe a connection endpoint string that cannot be
/// decoded into `(node, role, port)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The handle string does not split into exactly three segments.
    #[error("malformed handle '{handle}': expected <node>:<role>:<port>")]
    HandleSegmentCount { handle: String },

    /// The role segment is not one of the recognized role tokens.
    #[error("malformed handle '{handle}': unknown role token '{token}'")]
    HandleUnknownRole { handle: String, token: String },

    /// The port segment is not a canonical non-negative decimal integer.
    #[error("malformed handle '{handle}': invalid port index '{segment}'")]
    HandleInvalidPort { handle: String, segment: String },
}
