//! Deterministic playback driver.
//!
//! Plays the role of the host framework's event loop: advances a
//! `SimulatedPlayer` by a fixed step, delivers each time-update to the
//! overlay and records what happened.

mod trace;

pub use trace::{PlaybackTrace, TraceEntry};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tracing::{debug, warn};

use crate::config::{Config, FaultPolicy};
use crate::overlay::{BoundaryAction, ClipOverlay, OverlayError};
use crate::player::{EventBus, HandlerId, MediaPlayer, PlayerEvent, SimulatedPlayer};

/// Events worth showing in a trace (time-updates are implied by ticks).
const OBSERVED_EVENTS: [PlayerEvent; 4] = [
    PlayerEvent::Ended,
    PlayerEvent::LoadStart,
    PlayerEvent::Play,
    PlayerEvent::Pause,
];

/// Collects player events between ticks.
#[derive(Debug, Clone, Default)]
struct EventRecorder {
    seen: Rc<RefCell<Vec<PlayerEvent>>>,
    handlers: RefCell<Vec<(PlayerEvent, HandlerId)>>,
}

impl EventRecorder {
    fn observe(&self, bus: &mut EventBus) {
        for event in OBSERVED_EVENTS {
            let seen = Rc::clone(&self.seen);
            let id = bus.on(event, move |e| seen.borrow_mut().push(e));
            self.handlers.borrow_mut().push((event, id));
        }
    }

    /// Unregister everything `observe` registered on `bus`.
    fn detach(&self, bus: &mut EventBus) {
        for (event, id) in self.handlers.borrow_mut().drain(..) {
            bus.off(event, id);
        }
    }

    fn take(&self) -> Vec<PlayerEvent> {
        std::mem::take(&mut *self.seen.borrow_mut())
    }
}

/// Run playback as described by `config`.
///
/// Stops after `simulation.ticks` time-updates or as soon as the player
/// is paused (clip end without restart, or natural end of the media).
/// Environment faults abort the run unless the policy is
/// `FaultPolicy::Reload`, in which case player and overlay are rebuilt.
pub fn run(config: &Config) -> Result<PlaybackTrace, OverlayError> {
    let sim = &config.simulation;
    let recorder = EventRecorder::default();
    let mut overlay = attach(config, &recorder)?;
    let mut trace = PlaybackTrace::default();

    for tick in 1..=sim.ticks {
        if sim.fault_at_tick == Some(tick) {
            warn!(tick, "Invalidating player handle");
            overlay.player_mut().invalidate();
        }

        let (actions, note) = match step(&mut overlay, config, tick) {
            Ok(actions) => (actions, None),
            Err(err) if err.is_environment_fault() && sim.on_fault == FaultPolicy::Reload => {
                warn!(tick, error = %err, "Reloading player");
                teardown(&mut overlay, &recorder)?;
                recorder.take();
                overlay = attach(config, &recorder)?;
                trace.reloads += 1;
                (Vec::new(), Some("reload".to_string()))
            }
            Err(err) => return Err(err),
        };

        let entry = TraceEntry {
            tick,
            outer: overlay.current_time()?,
            inner: overlay.player().current_time()?,
            paused: overlay.is_paused(),
            events: recorder.take(),
            actions,
            note,
        };
        let paused = entry.paused;
        trace.entries.push(entry);

        if paused {
            debug!(tick, "Player paused, playback finished");
            break;
        }
    }

    teardown(&mut overlay, &recorder)?;
    Ok(trace)
}

fn attach(
    config: &Config,
    recorder: &EventRecorder,
) -> Result<ClipOverlay<SimulatedPlayer>, OverlayError> {
    let mut player = SimulatedPlayer::new(config.media.duration)
        .with_live(config.media.live)
        .with_buffered(config.media.buffered.clone());
    recorder.observe(player.events());
    ClipOverlay::attach(player, &config.offset)
}

/// Dispose the player, forwarding its one-shot `Dispose` to the overlay
/// the way a host registers `once("dispose")`.
fn teardown(
    overlay: &mut ClipOverlay<SimulatedPlayer>,
    recorder: &EventRecorder,
) -> Result<(), OverlayError> {
    let events = overlay.player_mut().events();
    recorder.detach(events);

    let disposed = Rc::new(Cell::new(false));
    let flag = Rc::clone(&disposed);
    events.once(PlayerEvent::Dispose, move |_| flag.set(true));

    overlay.player_mut().dispose();
    if disposed.get() {
        overlay.handle(PlayerEvent::Dispose)?;
    }
    Ok(())
}

fn step(
    overlay: &mut ClipOverlay<SimulatedPlayer>,
    config: &Config,
    tick: u32,
) -> Result<Vec<BoundaryAction>, OverlayError> {
    let mut actions = Vec::new();

    for change in config
        .simulation
        .offset_changes
        .iter()
        .filter(|change| change.at_tick == tick)
    {
        actions.extend(overlay.set_offset(change.start, change.end)?);
    }

    overlay.player_mut().advance(config.simulation.tick)?;
    actions.extend(overlay.handle(PlayerEvent::TimeUpdate)?);
    Ok(actions)
}
