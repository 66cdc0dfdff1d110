//! Integration tests for ClipOverlay against the simulated host

use std::cell::RefCell;
use std::rc::Rc;

use clipoffset::{
    BoundaryAction, ClipOverlay, MediaPlayer, OverlayOptions, PlayerEvent, SimulatedPlayer,
    TimeRange,
};

fn overlay(start: f64, end: f64, restart: bool) -> ClipOverlay<SimulatedPlayer> {
    ClipOverlay::attach(
        SimulatedPlayer::new(120.0),
        &OverlayOptions::new(start, end, restart),
    )
    .expect("attach should succeed")
}

fn observe(
    overlay: &mut ClipOverlay<SimulatedPlayer>,
    events: &[PlayerEvent],
) -> Rc<RefCell<Vec<PlayerEvent>>> {
    let log = Rc::new(RefCell::new(Vec::new()));
    for &event in events {
        let log = Rc::clone(&log);
        overlay
            .player_mut()
            .events()
            .on(event, move |e| log.borrow_mut().push(e));
    }
    log
}

// ============================================================================
// Coordinate mapping
// ============================================================================

#[test]
fn duration_of_open_clip_tracks_media() {
    for start in [0.0, 7.5, 60.0] {
        let overlay = overlay(start, 0.0, false);
        assert_eq!(overlay.duration().unwrap(), 120.0 - start);
    }
}

#[test]
fn duration_of_bounded_clip_is_fixed() {
    let overlay = overlay(5.0, 35.0, false);
    assert_eq!(overlay.duration().unwrap(), 30.0);
    assert_eq!(overlay.end_offset().unwrap(), 35.0);
    assert_eq!(overlay.start_offset(), 5.0);
}

#[test]
fn live_stream_clip_keeps_fixed_length() {
    let player = SimulatedPlayer::new(10.0).with_live(true);
    let mut overlay = ClipOverlay::attach(player, &OverlayOptions::new(5.0, 25.0, false)).unwrap();

    for _ in 0..8 {
        overlay.player_mut().advance(1.0).unwrap();
        overlay.handle(PlayerEvent::TimeUpdate).unwrap();
    }

    assert_eq!(overlay.duration().unwrap(), 20.0);
    assert_eq!(overlay.current_time().unwrap(), 8.0);
}

#[test]
fn buffered_keeps_count_and_order() {
    let inner = vec![
        TimeRange::new(0.0, 4.0),
        TimeRange::new(8.0, 50.0),
        TimeRange::new(90.0, 120.0),
    ];
    let player = SimulatedPlayer::new(120.0).with_buffered(inner.clone());
    let overlay = ClipOverlay::attach(player, &OverlayOptions::new(5.0, 35.0, false)).unwrap();

    let outer = overlay.buffered().unwrap();

    assert_eq!(outer.len(), inner.len());
    assert_eq!(
        outer,
        vec![
            TimeRange::new(0.0, 0.0),
            TimeRange::new(3.0, 30.0),
            TimeRange::new(30.0, 30.0),
        ]
    );
}

// ============================================================================
// Boundary monitor
// ============================================================================

#[test]
fn near_zero_time_is_not_clamped() {
    let mut overlay = overlay(10.0, 40.0, false);
    overlay.set_current_time(0.00005).unwrap();
    let before = overlay.player().current_time().unwrap();

    assert!(overlay.handle(PlayerEvent::TimeUpdate).unwrap().is_empty());
    assert_eq!(overlay.player().current_time().unwrap(), before);
}

#[test]
fn negative_time_reads_back_as_zero() {
    let mut overlay = overlay(10.0, 0.0, false);
    overlay.set_current_time(-5.0).unwrap();

    overlay.handle(PlayerEvent::TimeUpdate).unwrap();

    assert_eq!(overlay.current_time().unwrap(), 0.0);
}

#[test]
fn clip_end_without_restart() {
    let mut overlay = overlay(5.0, 35.0, false);
    let log = observe(&mut overlay, &[PlayerEvent::Ended, PlayerEvent::LoadStart]);
    overlay.set_current_time(31.0).unwrap();

    overlay.handle(PlayerEvent::TimeUpdate).unwrap();

    assert_eq!(*log.borrow(), vec![PlayerEvent::Ended]);
    assert_eq!(overlay.current_time().unwrap(), 30.0);
    assert!(overlay.is_paused());
}

#[test]
fn clip_end_with_restart() {
    let mut overlay = overlay(5.0, 35.0, true);
    let log = observe(&mut overlay, &[PlayerEvent::Ended, PlayerEvent::LoadStart]);
    overlay.set_current_time(31.0).unwrap();

    overlay.handle(PlayerEvent::TimeUpdate).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![PlayerEvent::Ended, PlayerEvent::LoadStart]
    );
    assert_eq!(overlay.current_time().unwrap(), 0.0);
    assert!(!overlay.is_paused());
}

#[test]
fn set_offset_recomputes_duration_and_reevaluates() {
    let mut overlay = overlay(0.0, 0.0, false);
    let log = observe(&mut overlay, &[PlayerEvent::TimeUpdate]);
    overlay.set_current_time(2.0).unwrap();

    let actions = overlay.set_offset(10.0, 40.0).unwrap();

    assert_eq!(overlay.duration().unwrap(), 30.0);
    assert_eq!(*log.borrow(), vec![PlayerEvent::TimeUpdate]);
    // inner 2.0 lies before the new window
    assert_eq!(actions, vec![BoundaryAction::ClampToStart]);
    assert_eq!(overlay.player().current_time().unwrap(), 10.0);
}

#[test]
fn two_overlays_are_independent() {
    let mut first = overlay(5.0, 35.0, false);
    let second = overlay(50.0, 0.0, true);

    first.set_offset(20.0, 30.0).unwrap();

    assert_eq!(first.duration().unwrap(), 10.0);
    assert_eq!(second.duration().unwrap(), 70.0);
    assert_eq!(second.start_offset(), 50.0);
}

#[test]
fn dispose_notification_stops_monitoring() {
    let mut overlay = overlay(5.0, 35.0, false);
    overlay.player_mut().dispose();
    overlay.handle(PlayerEvent::Dispose).unwrap();

    // the handle is gone, but a detached overlay no longer touches it
    assert!(overlay.handle(PlayerEvent::TimeUpdate).unwrap().is_empty());
    assert!(overlay.current_time().unwrap_err().is_environment_fault());
}
