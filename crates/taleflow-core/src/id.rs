//! Identifier newtype for the compiled id space.
//!
//! Document nodes are keyed by editor-assigned strings; the compiler maps
//! every reachable node onto a dense integer space starting at 0. The newtype
//! keeps compiled ids from being confused with port indices or counters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense integer identifier assigned to a node in the compiled graph.
///
/// Serializes as a bare integer, which is what the execution runtime follows
/// through `next`/`nexts` references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompiledId(pub u32);

impl fmt::Display for CompiledId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prints_inner_value() {
        assert_eq!(format!("{}", CompiledId(7)), "7");
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&CompiledId(42)).unwrap();
        assert_eq!(json, "42");

        let back: CompiledId = serde_json::from_str("42").unwrap();
        assert_eq!(back, CompiledId(42));
    }

    #[test]
    fn ordering_follows_inner_value() {
        assert!(CompiledId(0) < CompiledId(1));
    }
}
