//! Periodic Scheduler
//!
//! Abstracts "run this every N milliseconds" so the live loops can be driven
//! by tokio timers in the binary and by a virtual clock in tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::AbortHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// A periodic callback. Each call is one tick.
pub type PeriodicTask = Box<dyn FnMut() + Send + 'static>;

/// Shortest interval accepted; zero would spin
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Something that can run callbacks on a fixed interval
pub trait Scheduler {
    /// Register `task` to run every `interval`, first run one interval from now
    fn register_periodic(&mut self, interval: Duration, task: PeriodicTask) -> CancelHandle;
}

/// Handle returned by [`Scheduler::register_periodic`]
///
/// Cancelling is idempotent. Clones share the same registration.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
    abort: Option<AbortHandle>,
}

impl CancelHandle {
    fn new(cancelled: Arc<AtomicBool>, abort: Option<AbortHandle>) -> Self {
        Self { cancelled, abort }
    }

    /// Stop the periodic callback. No tick starts after this returns.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(abort) = &self.abort {
            abort.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs each registration as its own tokio task
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Scheduler bound to the runtime of the calling context, if any
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn register_periodic(&mut self, interval: Duration, mut task: PeriodicTask) -> CancelHandle {
        let interval = interval.max(MIN_INTERVAL);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);

        let join = self.handle.spawn(async move {
            let mut ticker = tokio::time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if flag.load(Ordering::SeqCst) {
                    break;
                }
                task();
            }
        });

        tracing::debug!(interval_ms = interval.as_millis() as u64, "Registered periodic task");
        CancelHandle::new(cancelled, Some(join.abort_handle()))
    }
}

struct ManualEntry {
    id: u64,
    interval: Duration,
    next_due: Duration,
    task: PeriodicTask,
    cancelled: Arc<AtomicBool>,
}

/// Virtual-time scheduler driven explicitly by [`ManualScheduler::advance`]
///
/// Ticks run in due-time order; registrations due at the same instant run
/// in registration order. Every tick completes before the next one starts.
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    next_id: u64,
    entries: Vec<ManualEntry>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of registrations that have not been cancelled
    pub fn active_tasks(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| !entry.cancelled.load(Ordering::SeqCst))
            .count()
    }

    /// Move virtual time forward, running every tick that falls due
    ///
    /// Returns the number of ticks executed.
    pub fn advance(&mut self, by: Duration) -> usize {
        let target = self.now + by;
        let mut ticks = 0;

        loop {
            self.entries
                .retain(|entry| !entry.cancelled.load(Ordering::SeqCst));

            let due = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.next_due <= target)
                .min_by_key(|(_, entry)| (entry.next_due, entry.id))
                .map(|(index, _)| index);

            let Some(index) = due else {
                break;
            };

            let entry = &mut self.entries[index];
            self.now = entry.next_due;
            entry.next_due += entry.interval;
            (entry.task)();
            ticks += 1;
        }

        self.now = target;
        ticks
    }
}

impl Scheduler for ManualScheduler {
    fn register_periodic(&mut self, interval: Duration, task: PeriodicTask) -> CancelHandle {
        let interval = interval.max(MIN_INTERVAL);
        let cancelled = Arc::new(AtomicBool::new(false));

        self.entries.push(ManualEntry {
            id: self.next_id,
            interval,
            next_due: self.now + interval,
            task,
            cancelled: Arc::clone(&cancelled),
        });
        self.next_id += 1;

        CancelHandle::new(cancelled, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder(log: &Arc<Mutex<Vec<&'static str>>>, name: &'static str) -> PeriodicTask {
        let log = Arc::clone(log);
        Box::new(move || log.lock().unwrap().push(name))
    }

    #[test]
    fn test_manual_first_tick_after_one_interval() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        scheduler.register_periodic(Duration::from_secs(2), recorder(&log, "a"));

        assert_eq!(scheduler.advance(Duration::from_millis(1999)), 0);
        assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
        assert_eq!(scheduler.advance(Duration::from_secs(10)), 5);
        assert_eq!(scheduler.now(), Duration::from_secs(12));
    }

    #[test]
    fn test_manual_runs_ticks_in_due_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        scheduler.register_periodic(Duration::from_secs(3), recorder(&log, "slow"));
        scheduler.register_periodic(Duration::from_secs(2), recorder(&log, "fast"));

        scheduler.advance(Duration::from_secs(6));

        // t=2 fast, t=3 slow, t=4 fast, t=6 slow then fast (registration order)
        assert_eq!(
            *log.lock().unwrap(),
            vec!["fast", "slow", "fast", "slow", "fast"]
        );
    }

    #[test]
    fn test_manual_cancel_stops_ticks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.register_periodic(Duration::from_secs(1), recorder(&log, "a"));

        scheduler.advance(Duration::from_secs(2));
        handle.cancel();
        handle.cancel();

        assert!(handle.is_cancelled());
        assert_eq!(scheduler.advance(Duration::from_secs(5)), 0);
        assert_eq!(scheduler.active_tasks(), 0);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[test]
    fn test_zero_interval_is_bounded() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = ManualScheduler::new();
        scheduler.register_periodic(Duration::ZERO, recorder(&log, "a"));

        assert_eq!(scheduler.advance(Duration::from_millis(5)), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_ticks_and_cancels() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut scheduler = TokioScheduler::try_current().unwrap();
        let handle = scheduler.register_periodic(Duration::from_secs(1), recorder(&log, "a"));

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(log.lock().unwrap().len(), 3);

        handle.cancel();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(log.lock().unwrap().len(), 3);
    }
}
