//! Label index and goto-chain resolution.
//!
//! Authors name nodes with labels and jump to them with `Goto` nodes. The
//! compiler never emits a goto: every reference about to be recorded is first
//! passed through [`LabelIndex::resolve_through_gotos`], which follows the
//! indirection to a concrete node. Resolution is bounded by the document's
//! node count so that authored loops cannot hang the compiler.

use std::collections::HashMap;

use taleflow_core::{Document, NodeKind};

use crate::error::CompileError;

/// Mapping from label to the node id carrying it.
#[derive(Debug, Default)]
pub struct LabelIndex {
    by_label: HashMap<String, String>,
}

impl LabelIndex {
    /// Indexes every non-empty label in the document, in author order.
    ///
    /// # Errors
    ///
    /// [`CompileError::DuplicateLabel`] when two nodes share a label; the
    /// collision is reported before any traversal begins.
    pub fn build(document: &Document) -> Result<Self, CompileError> {
        let mut by_label: HashMap<String, String> = HashMap::new();
        for (node_id, kind) in &document.nodes {
            let Some(label) = kind.label().filter(|label| !label.is_empty()) else {
                continue;
            };
            if let Some(first) = by_label.get(label) {
                return Err(CompileError::DuplicateLabel {
                    label: label.to_string(),
                    first: first.clone(),
                    second: node_id.clone(),
                });
            }
            by_label.insert(label.to_string(), node_id.clone());
        }
        Ok(LabelIndex { by_label })
    }

    /// The node id carrying `label`, if any.
    pub fn target_of(&self, label: &str) -> Option<&str> {
        self.by_label.get(label).map(String::as_str)
    }

    /// Follows goto indirection starting at `start` until a non-goto node is
    /// reached, and returns that node's id. Non-goto inputs come back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`CompileError::UnknownNode`] when an id is absent from the document
    /// - [`CompileError::UnknownLabel`] when a goto targets a missing label
    /// - [`CompileError::InfiniteGotoChain`] when the chain exceeds the
    ///   document's node count
    pub fn resolve_through_gotos<'a>(
        &'a self,
        document: &'a Document,
        start: &'a str,
    ) -> Result<&'a str, CompileError> {
        let limit = document.node_count();
        let mut current = start;
        let mut hops = 0usize;
        loop {
            let kind = document
                .node(current)
                .ok_or_else(|| CompileError::UnknownNode {
                    node: current.to_string(),
                })?;
            let NodeKind::Goto(goto) = kind else {
                return Ok(current);
            };
            hops += 1;
            if hops > limit {
                return Err(CompileError::InfiniteGotoChain { limit });
            }
            current = self
                .by_label
                .get(&goto.target)
                .map(String::as_str)
                .ok_or_else(|| CompileError::UnknownLabel {
                    label: goto.target.clone(),
                })?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taleflow_core::{DialogueEntryData, EmitData, GotoData};

    fn dialogue(label: Option<&str>) -> NodeKind {
        NodeKind::DialogueEntry(DialogueEntryData {
            speaker_index: 0,
            text: "...".to_string(),
            custom_data: None,
            label: label.map(str::to_string),
        })
    }

    fn goto(target: &str) -> NodeKind {
        NodeKind::Goto(GotoData {
            target: target.to_string(),
        })
    }

    #[test]
    fn indexes_labels_across_kinds() {
        let mut doc = Document::new();
        doc.insert_node("d", dialogue(Some("scene-2")));
        doc.insert_node(
            "e",
            NodeKind::Emit(EmitData {
                function: "rumble".to_string(),
                label: Some("fx".to_string()),
            }),
        );
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(index.target_of("scene-2"), Some("d"));
        assert_eq!(index.target_of("fx"), Some("e"));
        assert_eq!(index.target_of("absent"), None);
    }

    #[test]
    fn empty_labels_are_not_indexed() {
        let mut doc = Document::new();
        doc.insert_node("d", dialogue(Some("")));
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(index.target_of(""), None);
    }

    #[test]
    fn duplicate_label_reports_both_nodes_in_author_order() {
        let mut doc = Document::new();
        doc.insert_node("first-node", dialogue(Some("dup")));
        doc.insert_node("second-node", dialogue(Some("dup")));
        assert_eq!(
            LabelIndex::build(&doc).unwrap_err(),
            CompileError::DuplicateLabel {
                label: "dup".to_string(),
                first: "first-node".to_string(),
                second: "second-node".to_string(),
            }
        );
    }

    #[test]
    fn non_goto_resolves_to_itself() {
        let mut doc = Document::new();
        doc.insert_node("d", dialogue(None));
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(index.resolve_through_gotos(&doc, "d").unwrap(), "d");
    }

    #[test]
    fn goto_resolves_to_label_target() {
        let mut doc = Document::new();
        doc.insert_node("g", goto("scene-2"));
        doc.insert_node("d", dialogue(Some("scene-2")));
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(index.resolve_through_gotos(&doc, "g").unwrap(), "d");
    }

    #[test]
    fn goto_to_missing_label_fails() {
        let mut doc = Document::new();
        doc.insert_node("g", goto("nowhere"));
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(
            index.resolve_through_gotos(&doc, "g").unwrap_err(),
            CompileError::UnknownLabel {
                label: "nowhere".to_string()
            }
        );
    }

    #[test]
    fn unknown_node_id_fails() {
        let doc = Document::new();
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(
            index.resolve_through_gotos(&doc, "ghost").unwrap_err(),
            CompileError::UnknownNode {
                node: "ghost".to_string()
            }
        );
    }

    #[test]
    fn cyclic_goto_chain_hits_the_hop_budget() {
        // Labels only ever land on non-goto nodes, so a self-referential
        // chain cannot be authored through LabelIndex::build. Wire the index
        // by hand to exercise the termination bound.
        let mut doc = Document::new();
        doc.insert_node("g", goto("loop"));
        let index = LabelIndex {
            by_label: HashMap::from([("loop".to_string(), "g".to_string())]),
        };
        assert_eq!(
            index.resolve_through_gotos(&doc, "g").unwrap_err(),
            CompileError::InfiniteGotoChain { limit: 1 }
        );
    }

    #[test]
    fn chain_of_distinct_gotos_resolves() {
        let mut doc = Document::new();
        doc.insert_node("g1", goto("hop"));
        doc.insert_node("d1", dialogue(Some("hop")));
        let index = LabelIndex::build(&doc).unwrap();
        assert_eq!(index.resolve_through_gotos(&doc, "g1").unwrap(), "d1");
    }
}
