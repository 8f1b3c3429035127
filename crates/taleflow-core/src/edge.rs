//! Edges of the dialogue graph.
//!
//! An edge carries two flat handle strings and nothing else. It has no
//! inherent direction: which endpoint is the producer and which the consumer
//! is decided by decoding the handles, never by which end was drawn first in
//! the editor.

use serde::{Deserialize, Serialize};

/// A connection between two node endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Unique edge identifier, used only in diagnostics.
    pub id: String,
    /// Flat handle string of one endpoint.
    pub endpoint_a: String,
    /// Flat handle string of the other endpoint.
    pub endpoint_b: String,
}

impl Edge {
    /// Creates an edge from its id and two encoded endpoints.
    pub fn new(
        id: impl Into<String>,
        endpoint_a: impl Into<String>,
        endpoint_b: impl Into<String>,
    ) -> Self {
        Edge {
            id: id.into(),
            endpoint_a: endpoint_a.into(),
            endpoint_b: endpoint_b.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_form_uses_camel_case_endpoints() {
        let edge = Edge::new("e-1", "a:out:0", "b:in:0");
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            json!({ "id": "e-1", "endpointA": "a:out:0", "endpointB": "b:in:0" })
        );
    }

    #[test]
    fn serde_roundtrip() {
        let edge = Edge::new("e-2", "b:in:1", "a:out:2");
        let json = serde_json::to_string(&edge).unwrap();
        let back: Edge = serde_json::from_str(&json).unwrap();
        assert_eq!(back, edge);
    }
}
