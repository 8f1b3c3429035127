pub mod document;
pub mod edge;
pub mod error;
pub mod handle;
pub mod id;
pub mod node;

// Re-export commonly used types
pub use document::{Document, Participant};
pub use edge::Edge;
pub use error::CoreError;
pub use handle::{Handle, Role};
pub use id::CompiledId;
pub use node::{
    DialogueEntryData, EmitData, GotoData, LockAction, LockData, NodeKind, PlayerRepliesData,
    RandomSwitchData, Reply,
};
