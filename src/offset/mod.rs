//! Clip coordinate mapping
//!
//! Converts between *outer* time (clip-relative, what callers see) and
//! *inner* time (the position inside the underlying, unclipped media).
//!
//! # Architecture
//!
//! - `window`: the `OffsetWindow` that defines the clip
//! - `range`: `TimeRange`, one contiguous span of media
//! - `mapper`: the pure conversions (time, duration, buffered ranges)

mod mapper;
mod range;
mod window;

pub use mapper::{time_almost_equal, EPSILON};
pub use range::TimeRange;
pub use window::OffsetWindow;
