//! Compiler from authored dialogue documents to the flat runtime IR.
//!
//! This crate turns a [`taleflow_core::Document`] -- the node/edge snapshot
//! produced by the graph editor -- into a [`CompiledGraph`]: a linear,
//! integer-indexed, tagged-variant representation the external dialogue
//! runtime steps through deterministically.
//!
//! # Modules
//!
//! - [`error`] -- Error types for all compilation failure modes
//! - [`topology`] -- Output-port adjacency recovered from the edge list
//! - [`labels`] -- Label index and goto-chain resolution
//! - [`alloc`] -- Dense compiled-id allocation
//! - [`serialize`] -- Per-kind node payload serializers
//! - [`ir`] -- The compiled output types
//! - [`compiler`] -- The cycle-safe graph walker tying it all together

pub mod alloc;
pub mod compiler;
pub mod error;
pub mod ir;
pub mod labels;
pub mod serialize;
pub mod topology;

pub use compiler::compile;
pub use error::CompileError;
pub use ir::{
    CallPayload, CompiledGraph, CompiledNode, LinePayload, Payload, RandomSwitchPayload,
    ReplyPayload, TogglePayload, FORMAT_VERSION,
};
