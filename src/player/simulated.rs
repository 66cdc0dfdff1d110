//! In-memory host player.
//!
//! Drives a playhead by explicit `advance` calls instead of a wall clock,
//! which makes playback fully deterministic.

use super::error::PlayerError;
use super::event::{EventBus, PlayerEvent};
use super::host::MediaPlayer;
use crate::offset::TimeRange;

/// A media player with no media behind it.
///
/// Starts ready and playing at position 0. For on-demand media the
/// playhead stops at the natural end, the player pauses and `Ended` is
/// emitted. In live mode the natural duration grows with the playhead.
#[derive(Debug)]
pub struct SimulatedPlayer {
    position: f64,
    media_duration: f64,
    live: bool,
    paused: bool,
    ready: bool,
    valid: bool,
    buffered: Vec<TimeRange>,
    events: EventBus,
}

impl SimulatedPlayer {
    /// Create a ready, playing player for media of `media_duration` seconds.
    pub fn new(media_duration: f64) -> Self {
        Self {
            position: 0.0,
            media_duration: media_duration.max(0.0),
            live: false,
            paused: false,
            ready: true,
            valid: true,
            buffered: Vec::new(),
            events: EventBus::new(),
        }
    }

    /// Treat the media as a growing live stream.
    pub fn with_live(mut self, live: bool) -> Self {
        self.live = live;
        self
    }

    /// Report these spans from `buffered()`.
    pub fn with_buffered(mut self, buffered: Vec<TimeRange>) -> Self {
        self.buffered = buffered;
        self
    }

    /// Start out not ready; call `mark_ready` to finish setup.
    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    /// Finish setup and emit `Ready`.
    pub fn mark_ready(&mut self) {
        self.ready = true;
        self.events.emit(PlayerEvent::Ready);
    }

    /// Move the playhead forward by `dt` seconds and emit `TimeUpdate`.
    ///
    /// A paused player does not move but still emits the update. The
    /// playhead only moves forward, so `dt` must be finite and >= 0.
    pub fn advance(&mut self, dt: f64) -> Result<(), PlayerError> {
        self.ensure_valid()?;
        if !dt.is_finite() || dt < 0.0 {
            return Err(PlayerError::Rejected {
                reason: format!("cannot advance by {}", dt),
            });
        }
        if !self.paused {
            self.position += dt;
            if self.live {
                self.media_duration = self.media_duration.max(self.position);
            } else if self.position >= self.media_duration {
                self.position = self.media_duration;
                self.paused = true;
                self.events.emit(PlayerEvent::Pause);
                self.events.emit(PlayerEvent::Ended);
            }
        }
        self.events.emit(PlayerEvent::TimeUpdate);
        Ok(())
    }

    /// Emit `Dispose` and invalidate the handle.
    pub fn dispose(&mut self) {
        self.events.emit(PlayerEvent::Dispose);
        self.invalidate();
    }

    /// Make every further time read or write fail.
    pub fn invalidate(&mut self) {
        self.valid = false;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    fn ensure_valid(&self) -> Result<(), PlayerError> {
        if self.valid {
            Ok(())
        } else {
            Err(PlayerError::Unavailable)
        }
    }
}

impl MediaPlayer for SimulatedPlayer {
    fn current_time(&self) -> Result<f64, PlayerError> {
        self.ensure_valid()?;
        Ok(self.position)
    }

    fn seek(&mut self, seconds: f64) -> Result<(), PlayerError> {
        self.ensure_valid()?;
        if !seconds.is_finite() {
            return Err(PlayerError::Rejected {
                reason: format!("cannot seek to {}", seconds),
            });
        }
        self.position = if self.live {
            seconds.max(0.0)
        } else {
            seconds.clamp(0.0, self.media_duration)
        };
        Ok(())
    }

    fn duration(&self) -> Result<f64, PlayerError> {
        self.ensure_valid()?;
        Ok(self.media_duration)
    }

    fn buffered(&self) -> Result<Vec<TimeRange>, PlayerError> {
        self.ensure_valid()?;
        Ok(self.buffered.clone())
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.ensure_valid()?;
        if self.paused {
            self.paused = false;
            self.events.emit(PlayerEvent::Play);
        }
        Ok(())
    }

    fn pause(&mut self) -> Result<(), PlayerError> {
        self.ensure_valid()?;
        if !self.paused {
            self.paused = true;
            self.events.emit(PlayerEvent::Pause);
        }
        Ok(())
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }
}
