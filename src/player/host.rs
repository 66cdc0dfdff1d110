//! MediaPlayer trait.

use super::error::PlayerError;
use super::event::{EventBus, PlayerEvent};
use crate::offset::TimeRange;

/// The capabilities the overlay needs from a host media player.
///
/// All times are *inner* times: positions in the underlying media, in
/// seconds. Implementations return `PlayerError::Unavailable` from the
/// time primitives once the player handle can no longer be trusted.
pub trait MediaPlayer {
    /// Current playback position.
    fn current_time(&self) -> Result<f64, PlayerError>;

    /// Seek to `seconds`.
    fn seek(&mut self, seconds: f64) -> Result<(), PlayerError>;

    /// Natural duration of the media.
    fn duration(&self) -> Result<f64, PlayerError>;

    /// Buffered spans of the media.
    fn buffered(&self) -> Result<Vec<TimeRange>, PlayerError>;

    fn play(&mut self) -> Result<(), PlayerError>;

    fn pause(&mut self) -> Result<(), PlayerError>;

    fn is_paused(&self) -> bool;

    /// Whether the player has finished its own setup.
    ///
    /// Overlays attached before this is true wait for a `Ready` event.
    fn is_ready(&self) -> bool {
        true
    }

    /// The player's own event channel.
    fn events(&mut self) -> &mut EventBus;

    /// Emit `event` to everyone observing the player.
    fn trigger(&mut self, event: PlayerEvent) {
        self.events().emit(event);
    }
}
