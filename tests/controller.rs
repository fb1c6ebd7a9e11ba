use std::time::Duration;

use chronos_clock::{StopwatchController, StopwatchStatus};
use tokio::time::advance;

fn stopwatch() -> StopwatchController {
    StopwatchController::with_tick_interval(Duration::from_millis(10))
}

// Scenario: one lap after ~1.5s of running.
#[tokio::test(start_paused = true)]
async fn single_lap_matches_elapsed_time() {
    let sw = stopwatch();
    sw.start().await;
    advance(Duration::from_millis(1500)).await;
    sw.lap().await;

    let snapshot = sw.snapshot().await;
    assert_eq!(snapshot.state, StopwatchStatus::Running);
    assert_eq!(snapshot.laps.len(), 1);

    let lap = &snapshot.laps[0];
    assert_eq!(lap.lap_number, 1);
    assert!(
        lap.lap_time >= 1500 && lap.lap_time < 1600,
        "lap_time={}",
        lap.lap_time
    );
    assert_eq!(lap.lap_time, lap.total_time);
    assert_eq!(snapshot.best_lap_id, None);
    assert_eq!(snapshot.worst_lap_id, None);

    sw.shutdown().await;
}

// Scenario: laps at t=1000 and t=2500 come back most-recent-first, with
// best/worst pointing at the slower and faster of the two.
#[tokio::test(start_paused = true)]
async fn laps_are_most_recent_first() {
    let sw = stopwatch();
    sw.start().await;
    advance(Duration::from_millis(1000)).await;
    sw.lap().await;
    advance(Duration::from_millis(1500)).await;
    sw.lap().await;

    let snapshot = sw.snapshot().await;
    assert_eq!(snapshot.laps.len(), 2);

    let newest = &snapshot.laps[0];
    let oldest = &snapshot.laps[1];
    assert_eq!(newest.lap_number, 2);
    assert_eq!(oldest.lap_number, 1);
    assert!(newest.lap_time >= 1500 && newest.lap_time < 1600);
    assert!(newest.total_time >= 2500 && newest.total_time < 2700);
    assert!(oldest.lap_time >= 1000 && oldest.lap_time < 1100);
    assert_eq!(oldest.lap_time, oldest.total_time);
    assert!(newest.total_time > oldest.total_time);

    assert_eq!(snapshot.best_lap_id, Some(oldest.id));
    assert_eq!(snapshot.worst_lap_id, Some(newest.id));

    sw.shutdown().await;
}

// Scenario: time spent paused does not count.
#[tokio::test(start_paused = true)]
async fn pause_freezes_elapsed_time() {
    let sw = stopwatch();
    sw.start().await;
    advance(Duration::from_millis(1000)).await;
    sw.pause().await;

    advance(Duration::from_millis(1000)).await;
    let frozen = sw.snapshot().await;
    assert_eq!(frozen.state, StopwatchStatus::Paused);
    assert!(frozen.time >= 1000 && frozen.time < 1100, "time={}", frozen.time);

    sw.resume().await;
    advance(Duration::from_millis(500)).await;
    let resumed = sw.snapshot().await;
    assert!(
        resumed.time >= 1500 && resumed.time < 1700,
        "time={}",
        resumed.time
    );

    sw.shutdown().await;
}

// Scenario: reset clears everything regardless of prior state.
#[tokio::test(start_paused = true)]
async fn reset_returns_to_idle_and_clears_laps() {
    let sw = stopwatch();
    sw.start().await;
    advance(Duration::from_millis(800)).await;
    sw.lap().await;
    sw.reset().await;

    let snapshot = sw.snapshot().await;
    assert_eq!(snapshot.time, 0);
    assert_eq!(snapshot.state, StopwatchStatus::Idle);
    assert!(snapshot.laps.is_empty());
    assert_eq!(snapshot.best_lap_id, None);
    assert_eq!(snapshot.worst_lap_id, None);

    sw.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn start_while_running_is_a_no_op() {
    let sw = stopwatch();
    sw.start().await;
    advance(Duration::from_millis(500)).await;
    // A second start must not reset the anchor.
    sw.start().await;
    advance(Duration::from_millis(500)).await;

    let snapshot = sw.snapshot().await;
    assert!(
        snapshot.time >= 1000 && snapshot.time < 1100,
        "time={}",
        snapshot.time
    );

    sw.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn lap_outside_running_is_ignored() {
    let sw = stopwatch();
    sw.lap().await;
    assert!(sw.snapshot().await.laps.is_empty());

    sw.start().await;
    advance(Duration::from_millis(300)).await;
    sw.pause().await;
    sw.lap().await;
    assert!(sw.snapshot().await.laps.is_empty());

    // pause while paused and resume while idle are no-ops too
    sw.pause().await;
    assert_eq!(sw.snapshot().await.state, StopwatchStatus::Paused);
    sw.reset().await;
    sw.resume().await;
    assert_eq!(sw.snapshot().await.state, StopwatchStatus::Idle);

    sw.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn sampler_publishes_while_running_and_stops_after_pause() {
    let sw = stopwatch();
    let mut rx = sw.subscribe();
    assert_eq!(rx.borrow().time, 0);

    sw.start().await;
    advance(Duration::from_millis(50)).await;
    rx.changed().await.expect("sender alive");
    assert!(rx.borrow_and_update().time > 0);

    sw.pause().await;
    let frozen = sw.snapshot().await.time;

    // With the sampler cancelled, nothing newer than the pause-time snapshot
    // may arrive, no matter how far time advances.
    advance(Duration::from_millis(500)).await;
    let latest = rx.borrow_and_update().time;
    assert!(latest <= frozen, "latest={} frozen={}", latest, frozen);

    sw.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn elapsed_is_monotonic_while_running() {
    let sw = stopwatch();
    sw.start().await;

    let mut previous = 0;
    for _ in 0..5 {
        advance(Duration::from_millis(40)).await;
        let time = sw.snapshot().await.time;
        assert!(time >= previous, "time={} previous={}", time, previous);
        previous = time;
    }

    sw.shutdown().await;
}
