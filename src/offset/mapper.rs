//! Pure conversions between outer (clip) and inner (media) time.
//!
//! Everything here is a total function of the window and the values the
//! host reports; none of it touches the player.

use super::range::TimeRange;
use super::window::OffsetWindow;

/// Tolerance for comparing measured media times.
///
/// Looser than `f64::EPSILON` because playback positions come from a
/// wall clock, not from exact arithmetic.
pub const EPSILON: f64 = 0.0001;

/// Whether two media times are equal within [`EPSILON`].
pub fn time_almost_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

impl OffsetWindow {
    /// Convert a clip-relative time into media time.
    pub fn to_inner(&self, outer: f64) -> f64 {
        outer + self.start
    }

    /// Convert a media time into clip-relative time.
    pub fn to_outer(&self, inner: f64) -> f64 {
        inner - self.start
    }

    /// Length of the clip.
    ///
    /// A bounded window has a fixed length regardless of what the media
    /// reports, so live or growing streams can be clipped. An open-ended
    /// window runs to the natural end of the media.
    pub fn duration(&self, inner_duration: f64) -> f64 {
        if self.is_bounded() {
            self.end - self.start
        } else {
            inner_duration - self.start
        }
    }

    /// Where the clip starts in media time.
    pub fn start_offset(&self) -> f64 {
        self.start
    }

    /// Effective end boundary: the configured end, or the clip duration.
    pub fn end_offset(&self, inner_duration: f64) -> f64 {
        if self.is_bounded() {
            self.end
        } else {
            self.duration(inner_duration)
        }
    }

    /// Time left until the end of the clip.
    pub fn remaining(&self, outer_now: f64, inner_duration: f64) -> f64 {
        self.duration(inner_duration) - outer_now
    }

    /// Re-project buffered media ranges onto the clip's time axis.
    ///
    /// Output has the same length and order as the input. Both bounds are
    /// clamped into `[0, duration]`, so ranges lying wholly outside the
    /// clip collapse to zero-length ranges instead of being dropped.
    pub fn project_buffered(&self, inner: &[TimeRange], inner_duration: f64) -> Vec<TimeRange> {
        let limit = self.duration(inner_duration).max(0.0);
        inner
            .iter()
            .map(|range| {
                let start = (range.start - self.start).max(0.0).min(limit);
                let end = (range.end - self.start).max(0.0).min(limit);
                TimeRange { start, end }
            })
            .collect()
    }
}
