//! Node kinds of the dialogue graph.
//!
//! [`NodeKind`] is the closed vocabulary of authorable nodes. The editor
//! stores each node as a `{type, data}` record, which maps onto the
//! adjacently tagged serde encoding here. Keeping the set closed means every
//! consumer of node data is an exhaustive `match` -- adding a node kind
//! forces every site to be updated.
//!
//! `Entry` and `Goto` are control-flow markers only: they carry no authored
//! content and never appear in compiled output.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A node in the dialogue graph, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NodeKind {
    /// Unique starting marker of a document. One logical output, no input.
    Entry,
    /// A spoken line attributed to a participant.
    DialogueEntry(DialogueEntryData),
    /// Weighted random branch over its output ports.
    RandomSwitch(RandomSwitchData),
    /// Player-facing choice over its output ports.
    PlayerReplies(PlayerRepliesData),
    /// Locks or unlocks a named boolean variable.
    Lock(LockData),
    /// Invokes a named function in the host game.
    Emit(EmitData),
    /// Symbolic jump to a labeled node. One logical input, no ports of its own.
    Goto(GotoData),
}

// ---------------------------------------------------------------------------
// Per-kind data
// ---------------------------------------------------------------------------

/// Data carried by a `DialogueEntry` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogueEntryData {
    /// Index into the document's participant table.
    pub speaker_index: usize,
    /// The spoken line.
    pub text: String,
    /// Ordered author-defined key/value pairs, passed through to the runtime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<IndexMap<String, Value>>,
    /// Optional jump-target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Data carried by a `RandomSwitch` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomSwitchData {
    /// Relative weight of each branch, one per output port, in port order.
    pub proportions: Vec<f64>,
    /// Optional jump-target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Data carried by a `PlayerReplies` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRepliesData {
    /// The choices presented to the player, one per output port, in port order.
    pub replies: Vec<Reply>,
    /// Optional jump-target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// One selectable reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// The reply text shown to the player.
    pub text: String,
}

/// Whether a `Lock` node locks or unlocks its variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockAction {
    Lock,
    Unlock,
}

/// Data carried by a `Lock` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockData {
    /// Name of the boolean variable to toggle.
    pub variable: String,
    /// Lock or unlock.
    pub action: LockAction,
    /// Optional jump-target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Data carried by an `Emit` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitData {
    /// Name of the host function to call.
    pub function: String,
    /// Optional jump-target label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Data carried by a `Goto` node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GotoData {
    /// Label of the node to jump to.
    pub target: String,
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl NodeKind {
    /// Returns the kind tag as used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            NodeKind::Entry => "Entry",
            NodeKind::DialogueEntry(_) => "DialogueEntry",
            NodeKind::RandomSwitch(_) => "RandomSwitch",
            NodeKind::PlayerReplies(_) => "PlayerReplies",
            NodeKind::Lock(_) => "Lock",
            NodeKind::Emit(_) => "Emit",
            NodeKind::Goto(_) => "Goto",
        }
    }

    /// Returns the node's jump-target label, if any. `Entry` and `Goto`
    /// nodes never carry labels.
    pub fn label(&self) -> Option<&str> {
        match self {
            NodeKind::Entry | NodeKind::Goto(_) => None,
            NodeKind::DialogueEntry(data) => data.label.as_deref(),
            NodeKind::RandomSwitch(data) => data.label.as_deref(),
            NodeKind::PlayerReplies(data) => data.label.as_deref(),
            NodeKind::Lock(data) => data.label.as_deref(),
            NodeKind::Emit(data) => data.label.as_deref(),
        }
    }

    /// Returns `true` for pure control-flow markers that never serialize
    /// into compiled output.
    pub fn is_control_marker(&self) -> bool {
        matches!(self, NodeKind::Entry | NodeKind::Goto(_))
    }
}
