//! Clip overlay for a host media player
//!
//! `ClipOverlay` wraps a `MediaPlayer` and presents only the
//! `[start, end]` window of its media. Every time value going in or out of
//! the overlay is an *outer* (clip-relative) time.
//!
//! # Architecture
//!
//! - `monitor`: pure evaluation of the clip boundaries for one time-update
//! - `error`: `OverlayError`
//!
//! The host feeds notifications into [`ClipOverlay::handle`]. The overlay
//! reacts synchronously and reports what it did as a list of
//! [`BoundaryAction`]s.
//!
//! # Usage
//!
//! ```
//! use clipoffset::config::OverlayOptions;
//! use clipoffset::overlay::ClipOverlay;
//! use clipoffset::player::{PlayerEvent, SimulatedPlayer};
//!
//! let options = OverlayOptions::new(5.0, 35.0, false);
//! let mut overlay = ClipOverlay::attach(SimulatedPlayer::new(120.0), &options).unwrap();
//!
//! overlay.set_current_time(31.0).unwrap();
//! overlay.handle(PlayerEvent::TimeUpdate).unwrap();
//!
//! assert_eq!(overlay.current_time().unwrap(), 30.0);
//! assert!(overlay.is_paused());
//! ```

mod error;
pub mod monitor;

pub use error::OverlayError;
pub use monitor::BoundaryAction;

use tracing::{debug, info, warn};

use crate::config::{IntoSeconds, OverlayOptions};
use crate::offset::{OffsetWindow, TimeRange};
use crate::player::{MediaPlayer, PlayerEvent};

/// Where an overlay is in its attach/detach lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Attached before the player was ready; the monitor is not armed yet
    AwaitingReady,
    /// Boundary checks run on every time-update
    Monitoring,
    /// The player sent `dispose`; the monitor is gone for good
    Disposed,
}

/// A player whose time axis is remapped to a clip window.
#[derive(Debug)]
pub struct ClipOverlay<P: MediaPlayer> {
    player: P,
    window: OffsetWindow,
    lifecycle: Lifecycle,
}

impl<P: MediaPlayer> ClipOverlay<P> {
    /// Attach to `player` and move playback to the start of the clip.
    ///
    /// The boundary monitor is armed right away when the player is ready,
    /// otherwise on the first `Ready` notification.
    pub fn attach(player: P, options: &OverlayOptions) -> Result<Self, OverlayError> {
        let window = OffsetWindow::from_options(options);
        let lifecycle = if player.is_ready() {
            Lifecycle::Monitoring
        } else {
            Lifecycle::AwaitingReady
        };

        let mut overlay = Self {
            player,
            window,
            lifecycle,
        };
        overlay.set_current_time(0.0)?;

        info!(
            start = window.start,
            end = window.end,
            restart = window.restart_on_end,
            "Clip overlay attached"
        );
        Ok(overlay)
    }

    /// Detach and hand back the player with its native time axis.
    pub fn into_inner(self) -> P {
        self.player
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn window(&self) -> &OffsetWindow {
        &self.window
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_paused(&self) -> bool {
        self.player.is_paused()
    }

    /// React to a notification from the player.
    ///
    /// Hosts wire this to the player's `on("timeupdate")`, `once("ready")`
    /// and `once("dispose")` registrations. Returns the boundary actions
    /// taken, which is empty for anything other than a time-update while
    /// monitoring.
    pub fn handle(&mut self, event: PlayerEvent) -> Result<Vec<BoundaryAction>, OverlayError> {
        match (event, self.lifecycle) {
            (PlayerEvent::Ready, Lifecycle::AwaitingReady) => {
                debug!("Player ready, boundary monitor armed");
                self.lifecycle = Lifecycle::Monitoring;
                Ok(Vec::new())
            }
            (PlayerEvent::TimeUpdate, Lifecycle::Monitoring) => self.check_boundaries(),
            (PlayerEvent::Dispose, Lifecycle::AwaitingReady | Lifecycle::Monitoring) => {
                info!("Player disposed, clip overlay detached");
                self.lifecycle = Lifecycle::Disposed;
                Ok(Vec::new())
            }
            _ => Ok(Vec::new()),
        }
    }

    /// Current outer time.
    pub fn current_time(&self) -> Result<f64, OverlayError> {
        Ok(self.window.to_outer(self.player.current_time()?))
    }

    /// Seek to outer time `seconds`.
    pub fn set_current_time(&mut self, seconds: f64) -> Result<(), OverlayError> {
        self.player.seek(self.window.to_inner(seconds))?;
        Ok(())
    }

    /// Length of the clip.
    pub fn duration(&self) -> Result<f64, OverlayError> {
        Ok(self.window.duration(self.media_duration()?))
    }

    /// Time left until the end of the clip.
    pub fn remaining_time(&self) -> Result<f64, OverlayError> {
        let now = self.current_time()?;
        Ok(self.window.remaining(now, self.media_duration()?))
    }

    pub fn start_offset(&self) -> f64 {
        self.window.start_offset()
    }

    /// Configured end, or the clip duration for an open-ended clip.
    pub fn end_offset(&self) -> Result<f64, OverlayError> {
        Ok(self.window.end_offset(self.media_duration()?))
    }

    /// Buffered ranges in outer time, one per buffered media range.
    pub fn buffered(&self) -> Result<Vec<TimeRange>, OverlayError> {
        let inner = self.player.buffered()?;
        Ok(self.window.project_buffered(&inner, self.media_duration()?))
    }

    /// Switch restart-on-end mode.
    pub fn set_restart_on_end(&mut self, restart: bool) {
        self.window.restart_on_end = restart;
    }

    /// Move the clip window, then re-check the boundaries immediately.
    ///
    /// Bounds are read like attach options, so `"12.5"` works and garbage
    /// means 0. Observers get a `TimeUpdate` as if the player had just
    /// reported its position again.
    pub fn set_offset(
        &mut self,
        start: impl IntoSeconds,
        end: impl IntoSeconds,
    ) -> Result<Vec<BoundaryAction>, OverlayError> {
        self.window.set(start.into_seconds(), end.into_seconds());
        info!(
            start = self.window.start,
            end = self.window.end,
            "Clip window changed"
        );

        self.player.trigger(PlayerEvent::TimeUpdate);
        self.handle(PlayerEvent::TimeUpdate)
    }

    fn check_boundaries(&mut self) -> Result<Vec<BoundaryAction>, OverlayError> {
        let result = self.enforce_boundaries();
        if let Err(err) = &result {
            if err.is_environment_fault() {
                warn!(error = %err, "Lost the player while checking clip boundaries");
            }
        }
        result
    }

    fn enforce_boundaries(&mut self) -> Result<Vec<BoundaryAction>, OverlayError> {
        let now = self.current_time()?;
        let actions = monitor::evaluate(&self.window, now);

        for action in &actions {
            debug!(outer = now, action = action.name(), "Clip boundary reached");
            match action {
                BoundaryAction::ClampToStart => {
                    self.set_current_time(0.0)?;
                }
                BoundaryAction::PauseAtEnd => {
                    self.player.trigger(PlayerEvent::Ended);
                    let clip_end = self.duration()?;
                    self.set_current_time(clip_end)?;
                    self.player.pause()?;
                }
                BoundaryAction::RestartFromBeginning => {
                    self.player.trigger(PlayerEvent::Ended);
                    self.player.trigger(PlayerEvent::LoadStart);
                    self.set_current_time(0.0)?;
                }
            }
        }

        Ok(actions)
    }

    // A bounded clip has a fixed length, so the media is never consulted
    fn media_duration(&self) -> Result<f64, OverlayError> {
        if self.window.is_bounded() {
            Ok(0.0)
        } else {
            Ok(self.player.duration()?)
        }
    }
}
