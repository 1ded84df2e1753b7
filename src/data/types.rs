//! Core data types for the streamdash dashboard
//!
//! This module defines the records every panel of the dashboard reads:
//! - `ContentItem`: A fictitious catalog entry
//! - `DailyViewing`: One day of aggregate viewing statistics
//! - `DemographicSegment` and `GenrePerformance`: Static reference rows
//! - `RegionStat`, `ActivityEvent` and `RealTimeMetric`: Live, mutated state

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Whether a catalog entry is a film or an episodic show
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    Movie,
    Series,
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Movie => write!(f, "Movie"),
            ContentKind::Series => write!(f, "TV Show"),
        }
    }
}

/// A single catalog entry
///
/// Generated once per session and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentItem {
    /// Stable identifier, `show-{n}` with `n` starting at 1
    pub id: String,
    pub title: String,
    pub kind: ContentKind,
    /// Exactly two genre labels, duplicates allowed
    pub genres: Vec<String>,
    pub release_year: i32,
    /// Maturity label such as `TV-MA` or `PG-13`
    pub maturity_rating: String,
    /// Human-readable running time (`"3 Seasons"`, `"112 min"`)
    pub duration: String,
    pub country: String,
    pub description: String,
    pub view_count: u64,
    /// Percentage of viewers that finish the title, in [60, 100]
    pub completion_rate: u8,
    /// Audience score, in [70, 100]
    pub user_rating: u8,
    pub added_date: DateTime<Utc>,
}

/// Aggregate viewing statistics for one calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyViewing {
    pub date: NaiveDate,
    pub total_views: u64,
    pub unique_viewers: u64,
    pub average_watch_time_minutes: u32,
    pub top_genre: String,
}

/// Share of the audience in one age band
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemographicSegment {
    pub age_band: String,
    pub percentage_share: f64,
    pub average_watch_time_hours: f64,
}

/// Performance row for a single genre
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenrePerformance {
    pub genre: String,
    pub total_views: u64,
    pub average_rating: f64,
    pub content_count: u32,
    pub growth_rate_percent: f64,
}

/// Counts and rankings derived from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentMetricsSummary {
    pub total_content: usize,
    pub movie_count: usize,
    pub series_count: usize,
    pub new_this_month_count: usize,
    /// Top 5 by user rating, descending
    pub top_rated: Vec<ContentItem>,
    /// Top 5 by view count, descending
    pub most_viewed: Vec<ContentItem>,
}

/// Position on the decorative world map, in percent of its width and height
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    pub x: f64,
    pub y: f64,
}

/// Per-country viewer aggregate shown on the map panel
///
/// `viewer_count` is signed: random drift is not clamped and may go negative
/// over a long session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegionStat {
    pub region: String,
    pub country: String,
    pub viewer_count: i64,
    pub growth_percent: f64,
    pub top_show_title: String,
    pub map_coordinates: MapPoint,
}

/// Kind of entry in the live activity feed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    StreamStart,
    Download,
    Rating,
    Milestone,
}

impl ActivityKind {
    /// Get all kinds for uniform selection
    pub fn all() -> &'static [ActivityKind] {
        &[
            ActivityKind::StreamStart,
            ActivityKind::Download,
            ActivityKind::Rating,
            ActivityKind::Milestone,
        ]
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityKind::StreamStart => write!(f, "stream_start"),
            ActivityKind::Download => write!(f, "download"),
            ActivityKind::Rating => write!(f, "rating"),
            ActivityKind::Milestone => write!(f, "milestone"),
        }
    }
}

/// One synthesized entry of the live activity feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityEvent {
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub location: String,
}

/// The eight named real-time gauges
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GaugeKind {
    ActiveViewers,
    StreamsStarted,
    AvgWatchTime,
    EngagementRate,
    Downloads,
    GlobalReach,
    PeakConcurrent,
    ContentHours,
}

impl GaugeKind {
    /// All gauges in panel order
    pub fn all() -> &'static [GaugeKind] {
        &[
            GaugeKind::ActiveViewers,
            GaugeKind::StreamsStarted,
            GaugeKind::AvgWatchTime,
            GaugeKind::EngagementRate,
            GaugeKind::Downloads,
            GaugeKind::GlobalReach,
            GaugeKind::PeakConcurrent,
            GaugeKind::ContentHours,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            GaugeKind::ActiveViewers => "Active Viewers",
            GaugeKind::StreamsStarted => "Streams Started",
            GaugeKind::AvgWatchTime => "Avg Watch Time",
            GaugeKind::EngagementRate => "Engagement Rate",
            GaugeKind::Downloads => "Downloads",
            GaugeKind::GlobalReach => "Global Reach",
            GaugeKind::PeakConcurrent => "Peak Concurrent",
            GaugeKind::ContentHours => "Content Hours",
        }
    }

    /// Unit suffix appended after the formatted value
    pub fn unit(&self) -> &'static str {
        match self {
            GaugeKind::ActiveViewers | GaugeKind::PeakConcurrent => "",
            GaugeKind::StreamsStarted | GaugeKind::Downloads => "/hour",
            GaugeKind::AvgWatchTime => "min",
            GaugeKind::EngagementRate => "%",
            GaugeKind::GlobalReach => " countries",
            GaugeKind::ContentHours => " hrs",
        }
    }

    /// Value shown before the first tick
    pub fn initial_value(&self) -> f64 {
        match self {
            GaugeKind::ActiveViewers => 2_847_392.0,
            GaugeKind::StreamsStarted => 156_789.0,
            GaugeKind::AvgWatchTime => 47.3,
            GaugeKind::EngagementRate => 87.3,
            GaugeKind::Downloads => 45_678.0,
            GaugeKind::GlobalReach => 190.0,
            GaugeKind::PeakConcurrent => 3_245_678.0,
            GaugeKind::ContentHours => 15_847.0,
        }
    }
}

/// A live gauge value with its last applied change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RealTimeMetric {
    pub kind: GaugeKind,
    pub label: String,
    pub value: f64,
    pub unit: String,
    /// Percent delta applied on the most recent update
    pub change_percent: f64,
    /// Set when the gauge changed on the latest tick, cleared once it settles
    pub is_animating: bool,
}

impl RealTimeMetric {
    /// Create a gauge at its initial value
    pub fn new(kind: GaugeKind) -> Self {
        Self::with_value(kind, kind.initial_value())
    }

    /// Create a gauge at a specific value
    pub fn with_value(kind: GaugeKind, value: f64) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            value,
            unit: kind.unit().to_string(),
            change_percent: 0.0,
            is_animating: false,
        }
    }

    /// Whether the value is a percentage bounded to [0, 100]
    pub fn is_percentage(&self) -> bool {
        self.unit == "%"
    }

    /// Apply a multiplicative change, given as a fraction (`0.08` is +8%)
    ///
    /// Percentage gauges clamp to [0, 100]; any other gauge that would turn
    /// negative takes the absolute value. The result is rounded to one
    /// decimal place.
    pub fn apply_change(&mut self, change: f64) {
        let mut value = self.value * (1.0 + change);
        if self.is_percentage() {
            value = value.clamp(0.0, 100.0);
        } else if value < 0.0 {
            value = value.abs();
        }

        self.value = round_one_decimal(value);
        self.change_percent = change * 100.0;
        self.is_animating = true;
    }
}

/// Round to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_gauge_clamps_at_hundred() {
        let mut gauge = RealTimeMetric::with_value(GaugeKind::EngagementRate, 100.0);
        gauge.apply_change(0.08);

        assert_eq!(gauge.value, 100.0);
        assert!((gauge.change_percent - 8.0).abs() < 1e-9);
        assert!(gauge.is_animating);
    }

    #[test]
    fn test_percentage_gauge_clamps_at_zero() {
        let mut gauge = RealTimeMetric::with_value(GaugeKind::EngagementRate, 10.0);
        gauge.apply_change(-1.5);
        assert_eq!(gauge.value, 0.0);
    }

    #[test]
    fn test_non_percentage_gauge_takes_absolute_value() {
        let mut gauge = RealTimeMetric::with_value(GaugeKind::Downloads, 100.0);
        gauge.apply_change(-1.5);
        assert_eq!(gauge.value, 50.0);
    }

    #[test]
    fn test_apply_change_rounds_to_one_decimal() {
        let mut gauge = RealTimeMetric::with_value(GaugeKind::AvgWatchTime, 47.3);
        gauge.apply_change(0.0123);
        assert_eq!(gauge.value, 47.9);
    }

    #[test]
    fn test_gauge_catalog() {
        assert_eq!(GaugeKind::all().len(), 8);
        let gauge = RealTimeMetric::new(GaugeKind::GlobalReach);
        assert_eq!(gauge.label, "Global Reach");
        assert_eq!(gauge.unit, " countries");
        assert_eq!(gauge.value, 190.0);
        assert!(!gauge.is_animating);
    }

    #[test]
    fn test_content_kind_display() {
        assert_eq!(ContentKind::Movie.to_string(), "Movie");
        assert_eq!(ContentKind::Series.to_string(), "TV Show");
    }

    #[test]
    fn test_activity_event_serialization() {
        let event = ActivityEvent {
            id: "activity-1-0".to_string(),
            kind: ActivityKind::StreamStart,
            title: "Dark started streaming".to_string(),
            description: "120 viewers joined".to_string(),
            timestamp: Utc::now(),
            location: "Berlin, DE".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"kind\":\"stream_start\""));
        let restored: ActivityEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, event);
    }
}
