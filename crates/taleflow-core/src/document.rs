//! The document: an immutable snapshot of one authored dialogue graph.
//!
//! A [`Document`] is what the editing and persistence layers hand to the
//! compiler -- a participant table, a node table keyed by editor-assigned
//! string ids, and a flat edge list. The node table is an `IndexMap` so that
//! iteration follows author insertion order, which keeps diagnostics (e.g.
//! which node is reported "first" in a label collision) deterministic.
//!
//! The producing layers guarantee field-level syntax only; the cross-cutting
//! invariants (unique entry, label uniqueness, port bindings, index ranges)
//! are checked by the compiler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::NodeKind;

/// A speaking character referenced by dialogue entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, copied verbatim into compiled lines.
    pub name: String,
}

/// One authored dialogue graph, read-only for the duration of a compile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Participants, indexed by `speakerIndex`.
    #[serde(default)]
    pub participants: Vec<Participant>,
    /// Nodes keyed by editor-assigned id, in author insertion order.
    #[serde(default)]
    pub nodes: IndexMap<String, NodeKind>,
    /// Connections between node endpoints.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Document::default()
    }

    /// Appends a participant and returns its speaker index.
    pub fn push_participant(&mut self, name: impl Into<String>) -> usize {
        self.participants.push(Participant { name: name.into() });
        self.participants.len() - 1
    }

    /// Inserts (or replaces) a node under the given id.
    pub fn insert_node(&mut self, id: impl Into<String>, kind: NodeKind) {
        self.nodes.insert(id.into(), kind);
    }

    /// Appends an edge.
    pub fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeKind> {
        self.nodes.get(id)
    }

    /// Number of nodes in the document.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Looks up a participant by speaker index.
    pub fn participant(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }
}
