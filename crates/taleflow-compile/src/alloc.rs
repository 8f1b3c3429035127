//! Dense compiled-id allocation.
//!
//! The walker needs to record a successor's compiled id before that successor
//! has itself been visited and serialized (sibling and forward references).
//! [`IdAllocator`] decouples "a node has an id" from "a node has been
//! emitted": the first `allocate` call for a node id wins a fresh integer,
//! every later call returns the same one.

use std::collections::HashMap;

use taleflow_core::CompiledId;

/// First-call-wins dense integer allocator keyed by document node id.
#[derive(Debug, Default)]
pub struct IdAllocator {
    ids: HashMap<String, CompiledId>,
    next: u32,
}

impl IdAllocator {
    /// Creates an empty allocator; the first allocation yields id 0.
    pub fn new() -> Self {
        IdAllocator::default()
    }

    /// Returns the compiled id for `node_id`, allocating the next dense
    /// integer on first reference. Idempotent per node id.
    pub fn allocate(&mut self, node_id: &str) -> CompiledId {
        if let Some(&id) = self.ids.get(node_id) {
            return id;
        }
        let id = CompiledId(self.next);
        self.next += 1;
        self.ids.insert(node_id.to_string(), id);
        id
    }

    /// Non-allocating lookup, for diagnostics.
    pub fn id_for(&self, node_id: &str) -> Option<CompiledId> {
        self.ids.get(node_id).copied()
    }

    /// Number of ids handed out so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// `true` when no id has been handed out yet.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
