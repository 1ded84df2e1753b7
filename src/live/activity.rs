//! Live activity feed
//!
//! Synthesizes viewer activity from fixed templates and keeps a bounded,
//! newest-first window of recent events.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;

use crate::data::catalog::pick;
use crate::data::{ActivityEvent, ActivityKind};

pub const ACTIVITY_INTERVAL: Duration = Duration::from_secs(3);

/// Events retained by default
pub const DEFAULT_FEED_CAPACITY: usize = 10;

/// Events synthesized when the feed is mounted
pub const INITIAL_ACTIVITY: usize = 5;

const SHOWS: [&str; 10] = [
    "Stranger Things",
    "The Crown",
    "Bridgerton",
    "Money Heist",
    "Squid Game",
    "The Witcher",
    "Ozark",
    "Dark",
    "Narcos",
    "House of Cards",
];

const LOCATIONS: [&str; 10] = [
    "New York, US",
    "London, UK",
    "Tokyo, JP",
    "São Paulo, BR",
    "Mumbai, IN",
    "Berlin, DE",
    "Paris, FR",
    "Sydney, AU",
    "Toronto, CA",
    "Seoul, KR",
];

const MILESTONES: [&str; 4] = [
    "1M views reached",
    "500K downloads completed",
    "100K concurrent viewers",
    "Trending #1 globally",
];

/// Build one random event
///
/// `sequence` disambiguates events created within the same millisecond.
pub fn synthesize_event<R: Rng + ?Sized>(
    sequence: u64,
    now: DateTime<Utc>,
    rng: &mut R,
) -> ActivityEvent {
    let kinds = ActivityKind::all();
    let kind = kinds[rng.gen_range(0..kinds.len())];
    let show = pick(rng, &SHOWS);
    let location = pick(rng, &LOCATIONS);

    let (title, description) = match kind {
        ActivityKind::StreamStart => (
            format!("{} started streaming", show),
            format!("{} viewers joined", rng.gen_range(100..=1099)),
        ),
        ActivityKind::Download => (
            format!("{} downloaded", show),
            format!("{} downloads in last minute", rng.gen_range(50..=549)),
        ),
        ActivityKind::Rating => (
            format!("{} highly rated", show),
            format!("Average rating: {:.1}/10", rng.gen_range(8.0..10.0)),
        ),
        ActivityKind::Milestone => (
            format!("{} milestone", show),
            pick(rng, &MILESTONES).to_string(),
        ),
    };

    ActivityEvent {
        id: format!("activity-{}-{}", now.timestamp_millis(), sequence),
        kind,
        title,
        description,
        timestamp: now,
        location: location.to_string(),
    }
}

/// Bounded window of recent events, newest first
#[derive(Debug, Clone, Serialize)]
pub struct ActivityFeed {
    events: VecDeque<ActivityEvent>,
    capacity: usize,
    next_sequence: u64,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::new(),
            capacity,
            next_sequence: 0,
        }
    }

    /// Prepend an event, discarding the oldest beyond capacity
    pub fn push(&mut self, event: ActivityEvent) {
        self.events.push_front(event);
        self.events.truncate(self.capacity);
    }

    /// Synthesize and retain one event
    pub fn tick<R: Rng + ?Sized>(&mut self, now: DateTime<Utc>, rng: &mut R) {
        let event = synthesize_event(self.next_sequence, now, rng);
        self.next_sequence += 1;
        self.push(event);
    }

    /// Synthesize `count` events in a row, as done on mount
    pub fn prefill<R: Rng + ?Sized>(&mut self, count: usize, now: DateTime<Utc>, rng: &mut R) {
        for _ in 0..count {
            self.tick(now, rng);
        }
    }

    /// Events, newest first
    pub fn events(&self) -> impl Iterator<Item = &ActivityEvent> {
        self.events.iter()
    }

    pub fn latest(&self) -> Option<&ActivityEvent> {
        self.events.front()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total events generated, including discarded ones
    pub fn generated(&self) -> u64 {
        self.next_sequence
    }
}

impl Default for ActivityFeed {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_CAPACITY)
    }
}
