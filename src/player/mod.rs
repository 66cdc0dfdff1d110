//! Host media-player capability surface
//!
//! The overlay never owns decoding, buffering or UI. It talks to the host
//! player through the small `MediaPlayer` trait defined here.
//!
//! # Architecture
//!
//! - `host`: the `MediaPlayer` trait
//! - `event`: `PlayerEvent` kinds and the `EventBus` (on/off/once/emit)
//! - `error`: `PlayerError`, raised when the player handle is unusable
//! - `simulated`: `SimulatedPlayer`, an in-memory host for the CLI and tests

mod error;
mod event;
mod host;
mod simulated;

pub use error::PlayerError;
pub use event::{EventBus, HandlerId, PlayerEvent};
pub use host::MediaPlayer;
pub use simulated::SimulatedPlayer;
