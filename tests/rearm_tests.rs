//! Integration tests for RearmTask

mod common;
use common::*;

use oneshot_debounce::{DebounceState, EdgeLatch, RearmTask, TimeSource, Timing, TimingError};

#[test]
fn idle_ticks_never_touch_the_source() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    // Arming once at construction is the init step; ticks add nothing.
    assert_eq!(task.source().calls(), &[SourceCall::Arm]);

    for now in (0..20_000u32).step_by(7) {
        let events = task.tick(now);
        assert!(!events.captured);
        assert!(!events.rearmed);
    }

    assert_eq!(task.state(), DebounceState::Idle);
    assert_eq!(task.debounce_started(), None);
    assert_eq!(task.source().calls(), &[SourceCall::Arm]);
    assert!(task.is_armed());
    assert!(!task.status_indicator().is_lit());
}

#[test]
fn source_stays_disarmed_through_window_and_rearms_after() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);
    let t = 10_000u32;

    fire_edge(&latch, &mut task);
    assert!(task.tick(t).captured);

    for now in (t + 1)..=(t + 2000) {
        let events = task.tick(now);
        assert!(!events.rearmed, "re-armed early at {}", now);
        assert!(!task.is_armed());
        assert!(task.status_indicator().is_lit());
    }

    let events = task.tick(t + 2001);
    assert!(events.rearmed);
    assert!(task.is_armed());
    assert!(!task.status_indicator().is_lit());
    assert_eq!(task.state(), DebounceState::Idle);
}

#[test]
fn rearm_happens_on_first_late_tick() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    fire_edge(&latch, &mut task);
    task.tick(100);
    task.tick(1500);

    // Polling gap: the next tick is far past the deadline.
    let events = task.tick(9000);
    assert!(events.rearmed);
    assert_eq!(task.stats().rearms, 1);
}

#[test]
fn every_distinct_edge_starts_exactly_one_window() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);
    let mut now = 0u32;

    for _ in 0..5 {
        fire_edge(&latch, &mut task);
        now += 10;
        assert!(task.tick(now).captured);
        now += 1;
        assert!(!task.tick(now).captured);

        now += 2500;
        assert!(task.tick(now).rearmed);
    }

    let stats = task.stats();
    assert_eq!(stats.edges_captured, 5);
    assert_eq!(stats.rearms, 5);
    assert_eq!(stats.extensions, 0);
}

#[test]
fn edges_between_two_ticks_count_once() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    fire_edge(&latch, &mut task);
    fire_edge(&latch, &mut task);
    fire_edge(&latch, &mut task);

    assert!(task.tick(50).captured);
    assert!(!task.tick(51).captured);
    assert_eq!(task.stats().edges_captured, 1);
}

#[test]
fn second_bounce_within_window_extends_it() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);
    let t = 3000u32;

    fire_edge(&latch, &mut task);
    task.tick(t);

    fire_edge(&latch, &mut task);
    let events = task.tick(t + 1000);
    assert!(events.captured);
    assert!(events.extended);
    assert_eq!(task.debounce_started(), Some(t + 1000));

    // The original deadline passes without a rearm.
    assert!(!task.tick(t + 2001).rearmed);
    assert!(!task.tick(t + 3000).rearmed);
    assert!(!task.is_armed());

    assert!(task.tick(t + 3001).rearmed);
    assert!(task.is_armed());
    assert_eq!(task.stats().extensions, 1);
}

#[test]
fn window_survives_counter_wrap() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);
    let t = u32::MAX - 100;

    fire_edge(&latch, &mut task);
    task.tick(t);

    // 151 ticks have passed across the wrap: still inside the window.
    let events = task.tick(50);
    assert!(!events.rearmed);
    assert!(!task.is_armed());

    // MAX - 100 + 2001 wraps to 1900.
    assert!(!task.tick(1899).rearmed);
    assert!(task.tick(1900).rearmed);
}

#[test]
fn heartbeat_toggles_once_per_period() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    let fired: Vec<u32> = [0u32, 499, 500, 999, 1000]
        .into_iter()
        .filter(|&now| task.tick(now).heartbeat)
        .collect();

    assert_eq!(fired, vec![500, 1000]);
    assert_eq!(task.heartbeat_timestamp(), 1000);
    // Initial off from construction, then two toggles.
    assert_eq!(task.heartbeat_indicator().history(), &[false, true, false]);
}

#[test]
fn heartbeat_ignores_debounce_state() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    fire_edge(&latch, &mut task);
    let first = task.tick(500);
    assert!(first.captured);
    assert!(first.heartbeat);

    assert!(task.tick(1000).heartbeat);
    assert!(task.tick(1500).heartbeat);
    assert!(task.tick(2501).rearmed);
    assert_eq!(task.stats().heartbeats, 4);
}

#[test]
fn status_indicator_follows_arm_state() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    fire_edge(&latch, &mut task);
    task.tick(1);
    task.tick(2);
    task.tick(2002);

    // off at construction, on when the window starts, off at rearm
    assert_eq!(task.status_indicator().history(), &[false, true, false]);
}

#[test]
fn service_reads_the_clock() {
    let latch = EdgeLatch::new();
    let clock = MockClock::new();
    clock.init();
    clock.init();
    assert_eq!(clock.init_count(), 2);

    let mut task = new_task(&latch);

    clock.set(700);
    fire_edge(&latch, &mut task);
    assert!(task.service(&clock).captured);
    assert_eq!(task.debounce_started(), Some(700));

    clock.advance(2001);
    assert!(task.service(&clock).rearmed);
}

#[test]
fn custom_timing_is_honoured() {
    let latch = EdgeLatch::new();
    let timing = Timing::new(20u32, 5).unwrap();
    let mut task: TestTask<'_> = RearmTask::with_timing(
        &latch,
        MockEdgeSource::new(),
        MockIndicator::new(),
        MockIndicator::new(),
        timing,
    );
    assert_eq!(task.timing(), timing);

    fire_edge(&latch, &mut task);
    task.tick(0);
    assert!(!task.tick(20).rearmed);
    assert!(task.tick(21).rearmed);
    // 5-tick heartbeat fired at 20 only
    assert_eq!(task.stats().heartbeats, 1);
}

#[test]
fn zero_heartbeat_period_rejected() {
    assert_eq!(
        Timing::<u32>::new(2000, 0).unwrap_err(),
        TimingError::ZeroHeartbeatPeriod
    );
}

#[test]
fn release_hands_back_hardware() {
    let latch = EdgeLatch::new();
    let mut task = new_task(&latch);

    fire_edge(&latch, &mut task);
    task.tick(5);

    let (source, status, _heartbeat) = task.release();
    assert_eq!(source.calls(), &[SourceCall::Arm, SourceCall::Disarm]);
    assert!(status.is_lit());
}
