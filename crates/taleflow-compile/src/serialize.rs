//! Per-kind node payload serializers.
//!
//! One exhaustive match over [`NodeKind`] maps each node's raw data, the
//! participant table, and its already-resolved successor ids onto the tagged
//! [`Payload`] the runtime consumes. Successors arrive as compiled ids only;
//! raw node ids and labels never reach this layer.
//!
//! Cross-referential validation lives here: speaker indices are checked
//! against the participant table, and switch/reply nodes must declare at
//! least one branch.

use taleflow_core::{CompiledId, LockAction, NodeKind, Participant};

use crate::error::CompileError;
use crate::ir::{
    CallPayload, LinePayload, Payload, RandomSwitchPayload, ReplyPayload, TogglePayload,
};

/// Serializes one node into its tagged payload.
///
/// `successors` is the node's resolved output table in port order; gaps are
/// unconnected ports. Single-successor kinds read port 0. Branching kinds
/// take exactly one slot per declared branch: missing tail ports pad with
/// `None`, bound ports beyond the branch count are dropped as stale editor
/// leftovers.
pub fn serialize_node(
    node_id: &str,
    kind: &NodeKind,
    participants: &[Participant],
    successors: &[Option<CompiledId>],
) -> Result<Payload, CompileError> {
    match kind {
        NodeKind::DialogueEntry(data) => {
            let speaker = participants.get(data.speaker_index).ok_or_else(|| {
                CompileError::SpeakerIndexOutOfRange {
                    node: node_id.to_string(),
                    index: data.speaker_index,
                    participants: participants.len(),
                }
            })?;
            Ok(Payload::Line(LinePayload {
                speaker: speaker.name.clone(),
                text: data.text.clone(),
                metadata: data.custom_data.clone(),
                next: single(successors),
            }))
        }

        NodeKind::RandomSwitch(data) => {
            if data.proportions.is_empty() {
                return Err(CompileError::EmptyBranchSet {
                    node: node_id.to_string(),
                    kind: kind.kind_name(),
                });
            }
            Ok(Payload::RandomSwitch(RandomSwitchPayload {
                nexts: per_branch(successors, data.proportions.len()),
                chances: data.proportions.clone(),
            }))
        }

        NodeKind::PlayerReplies(data) => {
            if data.replies.is_empty() {
                return Err(CompileError::EmptyBranchSet {
                    node: node_id.to_string(),
                    kind: kind.kind_name(),
                });
            }
            Ok(Payload::Reply(ReplyPayload {
                nexts: per_branch(successors, data.replies.len()),
                texts: data.replies.iter().map(|reply| reply.text.clone()).collect(),
            }))
        }

        NodeKind::Lock(data) => {
            let toggle = TogglePayload {
                boolean_variable_name: data.variable.clone(),
                next: single(successors),
            };
            Ok(match data.action {
                LockAction::Lock => Payload::Lock(toggle),
                LockAction::Unlock => Payload::Unlock(toggle),
            })
        }

        NodeKind::Emit(data) => Ok(Payload::Call(CallPayload {
            function_name: data.function.clone(),
            next: single(successors),
        })),

        // Control-flow markers carry no payload; the walker rejects them
        // before serialization, so reaching this arm means an edge was drawn
        // straight into one.
        NodeKind::Entry | NodeKind::Goto(_) => Err(CompileError::UnsupportedNode {
            node: node_id.to_string(),
            kind: kind.kind_name(),
        }),
    }
}

fn single(successors: &[Option<CompiledId>]) -> Option<CompiledId> {
    successors.first().copied().flatten()
}

fn per_branch(successors: &[Option<CompiledId>], branches: usize) -> Vec<Option<CompiledId>> {
    (0..branches)
        .map(|port| successors.get(port).copied().flatten())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taleflow_core::{
        DialogueEntryData, EmitData, GotoData, LockData, PlayerRepliesData, RandomSwitchData,
        Reply,
    };

    fn cast(names: &[&str]) -> Vec<Participant> {
        names
            .iter()
            .map(|name| Participant {
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn dialogue_entry_resolves_speaker_name() {
        let kind = NodeKind::DialogueEntry(DialogueEntryData {
            speaker_index: 1,
            text: "Hold the line.".to_string(),
            custom_data: None,
            label: None,
        });
        let payload = serialize_node(
            "n",
            &kind,
            &cast(&["Iris", "Bram"]),
            &[Some(CompiledId(4))],
        )
        .unwrap();
        assert_eq!(
            payload,
            Payload::Line(LinePayload {
                speaker: "Bram".to_string(),
                text: "Hold the line.".to_string(),
                metadata: None,
                next: Some(CompiledId(4)),
            })
        );
    }

    #[test]
    fn speaker_index_out_of_range() {
        let kind = NodeKind::DialogueEntry(DialogueEntryData {
            speaker_index: 5,
            text: "?".to_string(),
            custom_data: None,
            label: None,
        });
        assert_eq!(
            serialize_node("n", &kind, &cast(&["Iris", "Bram"]), &[]).unwrap_err(),
            CompileError::SpeakerIndexOutOfRange {
                node: "n".to_string(),
                index: 5,
                participants: 2,
            }
        );
    }

    #[test]
    fn random_switch_pads_missing_tail_ports() {
        let kind = NodeKind::RandomSwitch(RandomSwitchData {
            proportions: vec![1.0, 2.0, 7.0],
            label: None,
        });
        let payload = serialize_node("n", &kind, &[], &[Some(CompiledId(1))]).unwrap();
        assert_eq!(
            payload,
            Payload::RandomSwitch(RandomSwitchPayload {
                nexts: vec![Some(CompiledId(1)), None, None],
                chances: vec![1.0, 2.0, 7.0],
            })
        );
    }

    #[test]
    fn stale_ports_beyond_branch_count_are_dropped() {
        let kind = NodeKind::RandomSwitch(RandomSwitchData {
            proportions: vec![1.0],
            label: None,
        });
        let payload =
            serialize_node("n", &kind, &[], &[Some(CompiledId(1)), Some(CompiledId(2))]).unwrap();
        assert_eq!(
            payload,
            Payload::RandomSwitch(RandomSwitchPayload {
                nexts: vec![Some(CompiledId(1))],
                chances: vec![1.0],
            })
        );
    }

    #[test]
    fn empty_proportions_rejected() {
        let kind = NodeKind::RandomSwitch(RandomSwitchData {
            proportions: vec![],
            label: None,
        });
        assert_eq!(
            serialize_node("n", &kind, &[], &[]).unwrap_err(),
            CompileError::EmptyBranchSet {
                node: "n".to_string(),
                kind: "RandomSwitch",
            }
        );
    }

    #[test]
    fn replies_keep_text_and_port_order() {
        let kind = NodeKind::PlayerReplies(PlayerRepliesData {
            replies: vec![
                Reply {
                    text: "Fight.".to_string(),
                },
                Reply {
                    text: "Flee.".to_string(),
                },
            ],
            label: None,
        });
        let payload = serialize_node("n", &kind, &[], &[None, Some(CompiledId(9))]).unwrap();
        assert_eq!(
            payload,
            Payload::Reply(ReplyPayload {
                nexts: vec![None, Some(CompiledId(9))],
                texts: vec!["Fight.".to_string(), "Flee.".to_string()],
            })
        );
    }

    #[test]
    fn empty_replies_rejected() {
        let kind = NodeKind::PlayerReplies(PlayerRepliesData {
            replies: vec![],
            label: None,
        });
        assert_eq!(
            serialize_node("n", &kind, &[], &[]).unwrap_err(),
            CompileError::EmptyBranchSet {
                node: "n".to_string(),
                kind: "PlayerReplies",
            }
        );
    }

    #[test]
    fn lock_action_selects_the_payload_variant() {
        let lock = NodeKind::Lock(LockData {
            variable: "gate_open".to_string(),
            action: LockAction::Lock,
            label: None,
        });
        assert!(matches!(
            serialize_node("n", &lock, &[], &[]).unwrap(),
            Payload::Lock(_)
        ));

        let unlock = NodeKind::Lock(LockData {
            variable: "gate_open".to_string(),
            action: LockAction::Unlock,
            label: None,
        });
        assert!(matches!(
            serialize_node("n", &unlock, &[], &[]).unwrap(),
            Payload::Unlock(_)
        ));
    }

    #[test]
    fn emit_becomes_call() {
        let kind = NodeKind::Emit(EmitData {
            function: "fade_out".to_string(),
            label: None,
        });
        let payload = serialize_node("n", &kind, &[], &[Some(CompiledId(2))]).unwrap();
        assert_eq!(
            payload,
            Payload::Call(CallPayload {
                function_name: "fade_out".to_string(),
                next: Some(CompiledId(2)),
            })
        );
    }

    #[test]
    fn control_markers_never_serialize() {
        assert_eq!(
            serialize_node("n", &NodeKind::Entry, &[], &[]).unwrap_err(),
            CompileError::UnsupportedNode {
                node: "n".to_string(),
                kind: "Entry",
            }
        );
        let goto = NodeKind::Goto(GotoData {
            target: "x".to_string(),
        });
        assert!(matches!(
            serialize_node("n", &goto, &[], &[]).unwrap_err(),
            CompileError::UnsupportedNode { kind: "Goto", .. }
        ));
    }
}
