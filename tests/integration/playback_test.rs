//! Integration tests for the playback driver

use clipoffset::config::{FaultPolicy, OverlayOptions};
use clipoffset::playback;
use clipoffset::{BoundaryAction, Config, PlayerEvent};

use crate::helpers::load_fixture;

#[test]
fn bounded_fixture_ends_paused_at_clip_end() {
    let trace = playback::run(&load_fixture("bounded_clip.toml")).unwrap();
    let last = trace.last().expect("trace should not be empty");

    // 30 second clip at 0.5s per tick: crossed on tick 61
    assert_eq!(last.tick, 61);
    assert_eq!(last.outer, 30.0);
    assert_eq!(last.inner, 35.0);
    assert!(last.paused);
    assert_eq!(trace.count_event(PlayerEvent::Ended), 1);
    assert_eq!(trace.count_event(PlayerEvent::LoadStart), 0);
}

#[test]
fn restart_fixture_loops() {
    let trace = playback::run(&load_fixture("restart_clip.toml")).unwrap();

    // 2.5 second clip at 0.5s per tick: crossed every 6 ticks
    assert_eq!(trace.entries.len(), 20);
    assert_eq!(trace.count_event(PlayerEvent::LoadStart), 3);
    let restarts: Vec<u32> = trace
        .entries
        .iter()
        .filter(|entry| entry.actions == vec![BoundaryAction::RestartFromBeginning])
        .map(|entry| entry.tick)
        .collect();
    assert_eq!(restarts, vec![6, 12, 18]);
}

#[test]
fn faulty_fixture_reloads_and_finishes() {
    let config = load_fixture("faulty_player.toml");
    assert_eq!(config.simulation.on_fault, FaultPolicy::Reload);

    let trace = playback::run(&config).unwrap();

    assert_eq!(trace.reloads, 1);
    assert_eq!(trace.entries[3].note.as_deref(), Some("reload"));
    assert!(trace.last().unwrap().paused);
}

#[test]
fn table_rendering() {
    let mut config = Config::default();
    config.offset = OverlayOptions::new(5.0, 6.0, false);
    config.media.duration = 60.0;
    config.simulation.ticks = 10;

    let trace = playback::run(&config).unwrap();

    insta::assert_snapshot!(trace.render_table(), @r"
    tick  outer      inner      state   details
       1  00:00.250  00:05.250  play
       2  00:00.500  00:05.500  play
       3  00:00.750  00:05.750  play
       4  00:01.000  00:06.000  play
       5  00:01.000  00:06.000  paused  events=ended,pause actions=pause-at-end
    ");
}
