//! Output-port adjacency recovered from the edge list.
//!
//! The editor's edge records have no inherent direction -- either endpoint
//! may be the producing side, depending on how the author drew the
//! connection. [`Topology::build`] decodes both endpoints of every edge and
//! orients each one by its role, producing a per-node table mapping output
//! port index to consuming node id.
//!
//! Port tables are sparse: a node may legitimately leave a port unconnected
//! (an unused reply branch), which shows up as a `None` slot rather than an
//! error.

use std::collections::HashMap;

use smallvec::SmallVec;

use taleflow_core::{Edge, Handle, Role};

use crate::error::CompileError;

// Most nodes have a single output; reply/switch nodes rarely exceed a few.
type PortSlots = SmallVec<[Option<String>; 4]>;

/// Per-producer ordered output-port adjacency.
#[derive(Debug, Default)]
pub struct Topology {
    ports: HashMap<String, PortSlots>,
}

impl Topology {
    /// Builds the adjacency table from the document's edge list.
    ///
    /// # Errors
    ///
    /// - [`CompileError::MalformedHandle`] when an endpoint does not decode
    /// - [`CompileError::AmbiguousEdge`] when both endpoints share a role
    /// - [`CompileError::DuplicatePortBinding`] when two edges bind the same
    ///   producing port to different consumers
    pub fn build(edges: &[Edge]) -> Result<Self, CompileError> {
        let mut topology = Topology::default();
        for edge in edges {
            let a = decode_endpoint(&edge.id, &edge.endpoint_a)?;
            let b = decode_endpoint(&edge.id, &edge.endpoint_b)?;
            let (producer, consumer) = match (a.role, b.role) {
                (Role::Producing, Role::Consuming) => (a, b),
                (Role::Consuming, Role::Producing) => (b, a),
                _ => {
                    return Err(CompileError::AmbiguousEdge {
                        edge: edge.id.clone(),
                    })
                }
            };
            topology.bind(&producer, &consumer)?;
        }
        Ok(topology)
    }

    /// Ordered successor slots of a producing node. The slice runs from port
    /// 0 through the highest bound port; unbound ports in between are `None`.
    /// Nodes with no outgoing edges yield an empty slice.
    pub fn successors_of(&self, node_id: &str) -> &[Option<String>] {
        self.ports
            .get(node_id)
            .map(|slots| slots.as_slice())
            .unwrap_or(&[])
    }

    fn bind(&mut self, producer: &Handle, consumer: &Handle) -> Result<(), CompileError> {
        let slots = self.ports.entry(producer.node_id.clone()).or_default();
        let index = producer.port as usize;
        if slots.len() <= index {
            slots.resize(index + 1, None);
        }
        match &slots[index] {
            // A second edge re-stating the same binding is a no-op; a second
            // edge claiming the port for a different consumer is an authoring
            // error, not a silent overwrite.
            Some(existing) if existing != &consumer.node_id => {
                Err(CompileError::DuplicatePortBinding {
                    node: producer.node_id.clone(),
                    port: producer.port,
                })
            }
            _ => {
                slots[index] = Some(consumer.node_id.clone());
                Ok(())
            }
        }
    }
}

fn decode_endpoint(edge_id: &str, raw: &str) -> Result<Handle, CompileError> {
    Handle::decode(raw).map_err(|source| CompileError::MalformedHandle {
        edge: edge_id.to_string(),
        source,
    })
}
