//! The graph walker: cycle-safe traversal driving the whole pipeline.
//!
//! [`compile`] is the single entry point. It precomputes the output-port
//! topology and the label index, locates the document's entry marker, then
//! depth-first walks the reachable subgraph. Every successor reference is
//! resolved through goto indirection and allocated a dense compiled id
//! before the successor itself is visited, so sibling and back references
//! serialize correctly regardless of traversal order.
//!
//! Nodes unreachable from the resolved entry point are never visited and
//! never emitted. That is intentional pruning, not an error.

use std::collections::HashSet;

use tracing::debug;

use taleflow_core::{CompiledId, Document, NodeKind};

use crate::alloc::IdAllocator;
use crate::error::CompileError;
use crate::ir::{CompiledGraph, CompiledNode, FORMAT_VERSION};
use crate::labels::LabelIndex;
use crate::serialize::serialize_node;
use crate::topology::Topology;

/// Compiles a dialogue document into the flat runtime IR.
///
/// Pure function of its input: identical documents always yield identical
/// output. All intermediate tables live for the duration of one call.
///
/// # Errors
///
/// The first violated invariant aborts the compile; see [`CompileError`] for
/// the full taxonomy.
pub fn compile(document: &Document) -> Result<CompiledGraph, CompileError> {
    debug!(
        nodes = document.node_count(),
        edges = document.edges.len(),
        "compiling dialogue document"
    );

    let topology = Topology::build(&document.edges)?;
    let labels = LabelIndex::build(document)?;

    let entry_node = find_entry(document)?;
    let first = entry_successor(&topology, entry_node)?;
    let start = labels.resolve_through_gotos(document, first)?;

    let mut walker = Walker {
        document,
        topology: &topology,
        labels: &labels,
        alloc: IdAllocator::new(),
        visited: HashSet::new(),
        nodes: Vec::new(),
    };
    let entry_id = walker.alloc.allocate(start);
    walker.visit(start)?;

    debug!(compiled = walker.nodes.len(), "dialogue document compiled");
    Ok(CompiledGraph {
        version: FORMAT_VERSION,
        entry_id,
        nodes: walker.nodes,
    })
}

/// Locates the unique entry marker.
fn find_entry(document: &Document) -> Result<&str, CompileError> {
    let mut entries = document
        .nodes
        .iter()
        .filter(|(_, kind)| matches!(kind, NodeKind::Entry))
        .map(|(id, _)| id.as_str());
    match (entries.next(), entries.count()) {
        (Some(id), 0) => Ok(id),
        (None, _) => Err(CompileError::MissingEntry {
            reason: "no entry node in document".to_string(),
        }),
        (Some(_), extra) => Err(CompileError::MissingEntry {
            reason: format!("{} entry nodes in document, expected exactly one", extra + 1),
        }),
    }
}

/// Reads the entry marker's single outgoing connection.
fn entry_successor<'t>(topology: &'t Topology, entry: &str) -> Result<&'t str, CompileError> {
    let slots = topology.successors_of(entry);
    let bound = slots.iter().flatten().count();
    if bound > 1 {
        return Err(CompileError::MissingEntry {
            reason: format!("entry node '{entry}' has {bound} outgoing connections, expected one"),
        });
    }
    slots
        .first()
        .and_then(|slot| slot.as_deref())
        .ok_or_else(|| CompileError::MissingEntry {
            reason: format!("entry node '{entry}' has no outgoing connection"),
        })
}

struct Walker<'d> {
    document: &'d Document,
    topology: &'d Topology,
    labels: &'d LabelIndex,
    alloc: IdAllocator,
    visited: HashSet<String>,
    nodes: Vec<CompiledNode>,
}

impl<'d> Walker<'d> {
    /// Visits one node: resolves and allocates its successors, recurses into
    /// them, then serializes the node itself. The visited set terminates
    /// authored loops.
    fn visit(&mut self, node_id: &'d str) -> Result<(), CompileError> {
        if self.visited.contains(node_id) {
            return Ok(());
        }
        self.visited.insert(node_id.to_string());

        let document = self.document;
        let kind = document
            .node(node_id)
            .ok_or_else(|| CompileError::UnknownNode {
                node: node_id.to_string(),
            })?;
        if kind.is_control_marker() {
            return Err(CompileError::UnsupportedNode {
                node: node_id.to_string(),
                kind: kind.kind_name(),
            });
        }

        let slots = self.topology.successors_of(node_id);
        let mut resolved: Vec<Option<CompiledId>> = Vec::with_capacity(slots.len());
        for slot in slots {
            let Some(consumer) = slot else {
                resolved.push(None);
                continue;
            };
            let target = self.labels.resolve_through_gotos(document, consumer)?;
            resolved.push(Some(self.alloc.allocate(target)));
            self.visit(target)?;
        }

        let payload = serialize_node(node_id, kind, &document.participants, &resolved)?;
        let id = self.alloc.allocate(node_id);
        self.nodes.push(CompiledNode { id, payload });
        Ok(())
    }
}
