//! Simulated Live Telemetry
//!
//! Independent periodic mutators that keep the dashboard moving.
//!
//! ## Architecture
//!
//! - **Scheduler**: `register_periodic(interval, task) -> CancelHandle`, backed
//!   by tokio timers or by a manually advanced virtual clock
//! - **Mutators**: Pure updates over owned state and an explicit random source
//!   (regions every 5s, activity every 3s, gauges every 2s)
//! - **Runtime**: [`LiveDashboard`] mounts the loops plus the 1s header clock
//!   and cancels all of them on teardown
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use streamdash::config::LiveConfig;
//! use streamdash::live::{LiveDashboard, ManualScheduler};
//!
//! let mut scheduler = ManualScheduler::new();
//! let mut dashboard = LiveDashboard::mount(&mut scheduler, &LiveConfig::default(), Some(7));
//!
//! scheduler.advance(Duration::from_secs(30));
//! assert_eq!(dashboard.snapshot().activity.len(), 10);
//!
//! dashboard.teardown();
//! assert_eq!(scheduler.active_tasks(), 0);
//! ```

mod activity;
mod gauges;
mod regions;
mod runtime;
mod scheduler;

pub use activity::{
    synthesize_event, ActivityFeed, ACTIVITY_INTERVAL, DEFAULT_FEED_CAPACITY, INITIAL_ACTIVITY,
};
pub use gauges::{
    mutate_gauges, volatility, GaugeBoard, GaugeSummary, Volatility, ANIMATION_SETTLE,
    GAUGE_INTERVAL, UPDATE_PROBABILITY,
};
pub use regions::{mutate_regions, total_viewers, GROWTH_DELTA, REGION_INTERVAL, VIEWER_DELTA};
pub use runtime::{initial_snapshot, LiveDashboard, LiveSnapshot, TimeSource};
pub use scheduler::{CancelHandle, ManualScheduler, PeriodicTask, Scheduler, TokioScheduler};
