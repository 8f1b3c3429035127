//! The compiled intermediate representation.
//!
//! A [`CompiledGraph`] is the only contract between this subsystem and the
//! external dialogue runtime: a version tag, an integer entry point, and a
//! list of tagged node payloads whose `next`/`nexts` references are dense
//! integers into the same list. Everything here is plain serde data; the
//! runtime advances through it without ever seeing editor node ids, labels,
//! or goto indirection.
//!
//! [`Payload`] is externally tagged on purpose: the variant name *is* the
//! wire key (`line`, `random_switch`, `reply`, `lock`, `unlock`, `call`),
//! which is how the lock/unlock action ends up as the payload's own tag key.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use taleflow_core::CompiledId;

/// Version tag of the compiled output shape.
pub const FORMAT_VERSION: u32 = 1;

/// The linear, fully-resolved output of one compile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledGraph {
    /// Always [`FORMAT_VERSION`] for output produced by this crate.
    pub version: u32,
    /// Compiled id of the node execution starts at.
    pub entry_id: CompiledId,
    /// Every reachable, serializable node, ids covering exactly `0..len`.
    pub nodes: Vec<CompiledNode>,
}

/// One node of the compiled graph: its dense id plus its tagged payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledNode {
    pub id: CompiledId,
    #[serde(flatten)]
    pub payload: Payload,
}

/// Tagged per-kind payloads. The serde tag key is the runtime opcode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// A spoken line.
    Line(LinePayload),
    /// Weighted random branch.
    RandomSwitch(RandomSwitchPayload),
    /// Player choice.
    Reply(ReplyPayload),
    /// Lock a boolean variable.
    Lock(TogglePayload),
    /// Unlock a boolean variable.
    Unlock(TogglePayload),
    /// Host function invocation.
    Call(CallPayload),
}

/// Payload of a compiled dialogue line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePayload {
    /// Resolved participant display name.
    pub speaker: String,
    /// The spoken text.
    pub text: String,
    /// Author-defined key/value pairs, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<IndexMap<String, Value>>,
    /// Successor id; absent when the line ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<CompiledId>,
}

/// Payload of a compiled random switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomSwitchPayload {
    /// Successor per branch, in branch order; `null` for unconnected branches.
    pub nexts: Vec<Option<CompiledId>>,
    /// Relative weight per branch, same order as `nexts`.
    pub chances: Vec<f64>,
}

/// Payload of a compiled player-choice node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyPayload {
    /// Successor per reply, in reply order; `null` for unconnected replies.
    pub nexts: Vec<Option<CompiledId>>,
    /// Reply text per choice, same order as `nexts`.
    pub texts: Vec<String>,
}

/// Payload shared by the `lock` and `unlock` opcodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TogglePayload {
    /// Name of the boolean variable to toggle.
    #[serde(rename = "booleanVariableName")]
    pub boolean_variable_name: String,
    /// Successor id; absent when the toggle ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<CompiledId>,
}

/// Payload of a compiled host-function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallPayload {
    /// Name of the function the runtime should invoke.
    #[serde(rename = "functionName")]
    pub function_name: String,
    /// Successor id; absent when the call ends the conversation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<CompiledId>,
}
