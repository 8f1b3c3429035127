//! Compile error types covering all compilation failure modes.
//!
//! Every error is fatal to the current compile call: a partially-resolved
//! dialogue graph is unsafe to execute, so there is no best-effort output.
//! Each variant carries enough context (node/edge id, port, label) to locate
//! the offending authoring mistake.

use taleflow_core::CoreError;

/// Errors that can occur while compiling a dialogue document.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// An edge endpoint string could not be decoded into `(node, role, port)`.
    #[error("edge '{edge}': {source}")]
    MalformedHandle {
        edge: String,
        #[source]
        source: CoreError,
    },

    /// Both endpoints of an edge have the same role.
    #[error("edge '{edge}' connects two endpoints of the same role")]
    AmbiguousEdge { edge: String },

    /// Two edges bind the same producing-node/port pair to different consumers.
    #[error("output port {port} of node '{node}' is bound by more than one edge")]
    DuplicatePortBinding { node: String, port: u32 },

    /// Two nodes share a label.
    #[error("label '{label}' is used by both node '{first}' and node '{second}'")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },

    /// A goto target matches no label in the document.
    #[error("goto target '{label}' matches no label in the document")]
    UnknownLabel { label: String },

    /// Goto resolution exceeded the document's node-count bound.
    #[error("goto chain exceeded {limit} hops without reaching a concrete node")]
    InfiniteGotoChain { limit: usize },

    /// A control-flow marker was reached where compilable content is required.
    #[error("node '{node}' ({kind}) cannot appear in compiled output")]
    UnsupportedNode { node: String, kind: &'static str },

    /// A dialogue entry's speaker index does not resolve against the
    /// participant table.
    #[error("node '{node}': speaker index {index} out of range for {participants} participant(s)")]
    SpeakerIndexOutOfRange {
        node: String,
        index: usize,
        participants: usize,
    },

    /// A switch or reply node declares zero branches.
    #[error("node '{node}': {kind} must declare at least one branch")]
    EmptyBranchSet { node: String, kind: &'static str },

    /// The document has no usable entry point.
    #[error("document has no usable entry point: {reason}")]
    MissingEntry { reason: String },

    /// An edge or goto referenced a node id absent from the document.
    #[error("reference to unknown node '{node}'")]
    UnknownNode { node: String },
}
