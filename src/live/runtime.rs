//! Live dashboard runtime
//!
//! Mounts the four periodic loops (clock, regions, activity, gauges) on a
//! [`Scheduler`]. Each loop owns its state and random source inside its task
//! and publishes a copy through a `watch` channel after every tick, so no
//! state is shared between loops.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use super::activity::ActivityFeed;
use super::gauges::GaugeBoard;
use super::regions::{mutate_regions, total_viewers};
use super::scheduler::{CancelHandle, Scheduler};
use crate::config::LiveConfig;
use crate::data::{initial_regions, ActivityEvent, RegionStat};

/// Source of "now" for the loops
pub type TimeSource = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Offsets mixed into the base seed so each loop draws its own sequence
const REGION_STREAM: u64 = 1;
const ACTIVITY_STREAM: u64 = 2;
const GAUGE_STREAM: u64 = 3;

/// Point-in-time copy of every live panel
#[derive(Debug, Clone, Serialize)]
pub struct LiveSnapshot {
    pub clock: DateTime<Utc>,
    pub regions: Vec<RegionStat>,
    pub total_region_viewers: i64,
    /// Newest first
    pub activity: Vec<ActivityEvent>,
    pub gauges: GaugeBoard,
}

/// Running set of live loops
pub struct LiveDashboard {
    clock: watch::Receiver<DateTime<Utc>>,
    regions: watch::Receiver<Vec<RegionStat>>,
    activity: watch::Receiver<ActivityFeed>,
    gauges: watch::Receiver<GaugeBoard>,
    time_source: TimeSource,
    handles: Vec<CancelHandle>,
}

impl LiveDashboard {
    /// Mount all loops using the wall clock
    pub fn mount<S: Scheduler + ?Sized>(
        scheduler: &mut S,
        config: &LiveConfig,
        seed: Option<u64>,
    ) -> Self {
        let wall_clock: TimeSource = Arc::new(Utc::now);
        Self::mount_with_time(scheduler, config, seed, wall_clock)
    }

    /// Mount all loops with an explicit time source
    pub fn mount_with_time<S: Scheduler + ?Sized>(
        scheduler: &mut S,
        config: &LiveConfig,
        seed: Option<u64>,
        time_source: TimeSource,
    ) -> Self {
        let now = time_source();
        let mut handles = Vec::with_capacity(4);

        // Clock
        let (clock_tx, clock) = watch::channel(now);
        let clock_time = Arc::clone(&time_source);
        handles.push(scheduler.register_periodic(
            config.clock_interval(),
            Box::new(move || {
                clock_tx.send_replace(clock_time());
            }),
        ));

        // Regions
        let mut region_state = initial_regions();
        let mut region_rng = stream_rng(seed, REGION_STREAM);
        let (region_tx, regions) = watch::channel(region_state.clone());
        handles.push(scheduler.register_periodic(
            config.region_interval(),
            Box::new(move || {
                mutate_regions(&mut region_state, &mut region_rng);
                tracing::debug!(total = total_viewers(&region_state), "Region tick");
                region_tx.send_replace(region_state.clone());
            }),
        ));

        // Activity feed, prefilled on mount
        let mut feed = ActivityFeed::new(config.feed_capacity);
        let mut activity_rng = stream_rng(seed, ACTIVITY_STREAM);
        feed.prefill(config.initial_activity, now, &mut activity_rng);
        let (activity_tx, activity) = watch::channel(feed.clone());
        let activity_time = Arc::clone(&time_source);
        handles.push(scheduler.register_periodic(
            config.activity_interval(),
            Box::new(move || {
                feed.tick(activity_time(), &mut activity_rng);
                if let Some(event) = feed.latest() {
                    tracing::debug!(kind = %event.kind, title = %event.title, "Activity tick");
                }
                activity_tx.send_replace(feed.clone());
            }),
        ));

        // Gauges
        let mut board = GaugeBoard::new(now);
        let mut gauge_rng = stream_rng(seed, GAUGE_STREAM);
        let (gauge_tx, gauges) = watch::channel(board.clone());
        let gauge_time = Arc::clone(&time_source);
        handles.push(scheduler.register_periodic(
            config.gauge_interval(),
            Box::new(move || {
                let updated = board.tick(gauge_time(), &mut gauge_rng);
                tracing::debug!(updated, "Gauge tick");
                gauge_tx.send_replace(board.clone());
            }),
        ));

        tracing::info!(
            seeded = seed.is_some(),
            feed_capacity = config.feed_capacity,
            "Live dashboard mounted"
        );

        Self {
            clock,
            regions,
            activity,
            gauges,
            time_source,
            handles,
        }
    }

    /// Copy the current state of every panel
    ///
    /// Gauge highlight flags are settled against the current time.
    pub fn snapshot(&self) -> LiveSnapshot {
        let regions = self.regions.borrow().clone();
        let mut gauges = self.gauges.borrow().clone();
        gauges.settle((self.time_source)());

        LiveSnapshot {
            clock: *self.clock.borrow(),
            total_region_viewers: total_viewers(&regions),
            regions,
            activity: self.activity.borrow().events().cloned().collect(),
            gauges,
        }
    }

    /// Receiver that changes on every clock tick
    pub fn clock_updates(&self) -> watch::Receiver<DateTime<Utc>> {
        self.clock.clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.handles.is_empty()
    }

    /// Cancel all four loops. Idempotent.
    pub fn teardown(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        for handle in self.handles.drain(..) {
            handle.cancel();
        }
        tracing::info!("Live dashboard torn down");
    }
}

impl Drop for LiveDashboard {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn stream_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}

/// Static snapshot as it looks at mount time, without running any loop
pub fn initial_snapshot(config: &LiveConfig, seed: Option<u64>, now: DateTime<Utc>) -> LiveSnapshot {
    let regions = initial_regions();
    let mut feed = ActivityFeed::new(config.feed_capacity);
    feed.prefill(
        config.initial_activity,
        now,
        &mut stream_rng(seed, ACTIVITY_STREAM),
    );

    LiveSnapshot {
        clock: now,
        total_region_viewers: total_viewers(&regions),
        regions,
        activity: feed.events().cloned().collect(),
        gauges: GaugeBoard::new(now),
    }
}
