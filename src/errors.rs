//! Error taxonomy
//!
//! Every user-triggered action catches its own errors at the boundary:
//! transport failures revert the optimistic change and show a transient
//! notice, a missing re-insertion anchor abandons the operation, offline is
//! detected before a request goes out.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("you are offline")]
    Offline,

    #[error("{op} failed: {message}")]
    Call { op: String, message: String },

    #[error("bad response from server: {0}")]
    Decode(String),

    /// A server response referenced a previous entry that is not in the
    /// local board state.
    #[error("entry {id} is not on this board")]
    MissingAnchor { id: u32 },
}

impl UiError {
    pub fn call(op: &str, message: impl Into<String>) -> Self {
        UiError::Call { op: op.to_string(), message: message.into() }
    }
}
