//! The offset window describing which part of the media is exposed.

use serde::Serialize;

use crate::config::OverlayOptions;

/// A `[start, end]` window over the inner media timeline.
///
/// `end == 0.0` means the clip is open-ended and runs to the natural end
/// of the media. A window with `end <= start` is accepted as-is and yields
/// a degenerate clip.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OffsetWindow {
    /// Inner time where the clip begins (always >= 0)
    pub start: f64,
    /// Inner time where the clip ends, or 0 for "unbounded"
    pub end: f64,
    /// Loop back to the clip start instead of pausing at the end
    pub restart_on_end: bool,
}

impl OffsetWindow {
    /// Create a window from already-sanitized values.
    ///
    /// Negative or non-finite bounds are treated as 0.
    pub fn new(start: f64, end: f64, restart_on_end: bool) -> Self {
        Self {
            start: sanitize(start),
            end: sanitize(end),
            restart_on_end,
        }
    }

    /// Build a window from attach options.
    pub fn from_options(options: &OverlayOptions) -> Self {
        Self::new(options.start, options.end, options.restart_beginning)
    }

    /// Replace both bounds in place, keeping the restart mode.
    pub fn set(&mut self, start: f64, end: f64) {
        self.start = sanitize(start);
        self.end = sanitize(end);
    }

    /// Whether an explicit end boundary is configured.
    pub fn is_bounded(&self) -> bool {
        self.end > 0.0
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
