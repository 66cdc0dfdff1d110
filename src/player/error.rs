//! Player operation errors.

/// Errors raised by a host player's time and playback primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    /// The player handle was torn down or is otherwise invalid.
    #[error("Player handle is unavailable (torn down or invalid)")]
    Unavailable,

    #[error("Player rejected the operation: {reason}")]
    Rejected { reason: String },
}
