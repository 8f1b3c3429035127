//! Structured identity of a connection endpoint.
//!
//! The editor stores each edge endpoint as a flat string; [`Handle`] is the
//! decoded form: which node, whether the endpoint is a producing (output) or
//! consuming (input) port, and which port index. Decoding happens exactly
//! once at the compiler boundary -- no other component re-parses raw strings.
//!
//! The wire form is three `:`-separated segments: `"<node>:<role>:<port>"`,
//! with role tokens `out` (producing) and `in` (consuming). Node ids must not
//! contain the delimiter. The port segment must be a canonical decimal
//! integer (digits only, no redundant leading zeros), which makes
//! `encode`/`decode` exact inverses in both directions.

use std::fmt;

use crate::error::CoreError;

/// Segment separator in the flat handle encoding.
pub const HANDLE_DELIMITER: char = ':';

const ROLE_PRODUCING: &str = "out";
const ROLE_CONSUMING: &str = "in";

/// Which side of a node an endpoint sits on.
///
/// `Producing` means "this is an output port of the owning node", `Consuming`
/// means "this is an input port". This is independent of the visual direction
/// the edge was drawn in -- the compiler derives flow from roles only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Producing,
    Consuming,
}

impl Role {
    /// The wire token for this role.
    pub fn token(self) -> &'static str {
        match self {
            Role::Producing => ROLE_PRODUCING,
            Role::Consuming => ROLE_CONSUMING,
        }
    }

    fn from_token(token: &str) -> Option<Role> {
        match token {
            ROLE_PRODUCING => Some(Role::Producing),
            ROLE_CONSUMING => Some(Role::Consuming),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Decoded identity of one endpoint of a connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Handle {
    /// The node owning this endpoint.
    pub node_id: String,
    /// Whether the endpoint is an output or an input of the node.
    pub role: Role,
    /// Zero-based port index on that side of the node.
    pub port: u32,
}

impl Handle {
    /// Creates a handle from its parts.
    pub fn new(node_id: impl Into<String>, role: Role, port: u32) -> Self {
        Handle {
            node_id: node_id.into(),
            role,
            port,
        }
    }

    /// Decodes a flat handle string into its structured form.
    ///
    /// # Errors
    ///
    /// Returns a [`CoreError`] when the string does not split into exactly
    /// three segments, the role token is unrecognized, or the port segment is
    /// not a canonical non-negative decimal integer.
    pub fn decode(raw: &str) -> Result<Handle, CoreError> {
        let mut segments = raw.split(HANDLE_DELIMITER);
        let (Some(node_id), Some(role_token), Some(port_segment), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(CoreError::HandleSegmentCount {
                handle: raw.to_string(),
            });
        };

        let role = Role::from_token(role_token).ok_or_else(|| CoreError::HandleUnknownRole {
            handle: raw.to_string(),
            token: role_token.to_string(),
        })?;

        if !is_canonical_port(port_segment) {
            return Err(CoreError::HandleInvalidPort {
                handle: raw.to_string(),
                segment: port_segment.to_string(),
            });
        }
        let port: u32 =
            port_segment
                .parse()
                .map_err(|_| CoreError::HandleInvalidPort {
                    handle: raw.to_string(),
                    segment: port_segment.to_string(),
                })?;

        Ok(Handle {
            node_id: node_id.to_string(),
            role,
            port,
        })
    }

    /// Encodes the handle back into its flat string form. Exact inverse of
    /// [`Handle::decode`].
    pub fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            self.node_id,
            self.role.token(),
            self.port,
            d = HANDLE_DELIMITER
        )
    }
}

// Digits only, no sign, no redundant leading zero. Keeps decode(s) -> encode
// an identity on every accepted string.
fn is_canonical_port(segment: &str) -> bool {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    segment.len() == 1 || !segment.starts_with('0')
}
