//! Overlay errors.

use crate::player::PlayerError;

/// Errors surfaced by `ClipOverlay` operations.
///
/// Configuration problems never show up here: bad offsets are defaulted
/// to 0 when parsed. What remains are faults of the host environment,
/// which the overlay cannot recover from on its own.
#[derive(Debug, thiserror::Error)]
pub enum OverlayError {
    #[error("Host player fault: {0}")]
    Environment(#[from] PlayerError),
}

impl OverlayError {
    /// True when the player handle itself is gone.
    ///
    /// Hosts typically answer this by reloading the whole player context.
    pub fn is_environment_fault(&self) -> bool {
        matches!(self, Self::Environment(PlayerError::Unavailable))
    }
}
