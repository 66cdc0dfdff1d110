//! Clip boundary evaluation.
//!
//! Decides, for one time-update, what has to happen to keep playback
//! inside the clip. The decision is pure; `ClipOverlay` applies it.

use serde::Serialize;

use crate::offset::{time_almost_equal, OffsetWindow};

/// A corrective step the overlay must take after a time-update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryAction {
    /// Playback is before the clip start: seek to outer 0
    ClampToStart,
    /// Clip end crossed: emit `ended`, seek to the clip end and pause
    PauseAtEnd,
    /// Clip end crossed in restart mode: emit `ended` and `loadstart`,
    /// then seek to outer 0 and keep playing
    RestartFromBeginning,
}

impl BoundaryAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ClampToStart => "clamp-to-start",
            Self::PauseAtEnd => "pause-at-end",
            Self::RestartFromBeginning => "restart",
        }
    }
}

/// Evaluate both clip boundaries at outer time `outer_now`.
///
/// Times within `EPSILON` of 0 are left alone so clock jitter at the
/// start of the clip never causes a seek. The two checks are otherwise
/// independent and the actions come back in the order they must run.
pub fn evaluate(window: &OffsetWindow, outer_now: f64) -> Vec<BoundaryAction> {
    let mut actions = Vec::new();

    if time_almost_equal(outer_now, 0.0) {
        return actions;
    }

    if outer_now < 0.0 {
        actions.push(BoundaryAction::ClampToStart);
    }

    if window.is_bounded() && outer_now > window.end - window.start {
        actions.push(if window.restart_on_end {
            BoundaryAction::RestartFromBeginning
        } else {
            BoundaryAction::PauseAtEnd
        });
    }

    actions
}
