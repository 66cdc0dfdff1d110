//! clipoffset - clip a media player's timeline to a `[start, end]` window
//!
//! A `ClipOverlay` wraps a host media player and remaps its time axis, so
//! a caller can present part of a longer asset as if it were the whole
//! thing: `current_time`, `duration` and `buffered` are clip-relative, and
//! playback ends (or loops) at the clip end.
//!
//! # Modules
//!
//! - `offset`: pure outer/inner time mapping
//! - `player`: the host capability surface and an in-memory host
//! - `overlay`: the attached overlay and its boundary monitor
//! - `config`: attach options and the CLI config file
//! - `playback`: deterministic playback driver used by the CLI
//! - `cli`: command line definitions (shared with `xtask`)

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod offset;
pub mod overlay;
pub mod playback;
pub mod player;

pub use config::{Config, OverlayOptions};
pub use offset::{OffsetWindow, TimeRange};
pub use overlay::{BoundaryAction, ClipOverlay, OverlayError};
pub use player::{MediaPlayer, PlayerError, PlayerEvent, SimulatedPlayer};
