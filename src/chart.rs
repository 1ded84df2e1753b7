//! Chart Geometry
//!
//! Turns dashboard data into drawable shapes: viewing bars, demographic pie
//! slices, genre bars and map markers. Coordinates for the pie and the map
//! live in a 100x100 viewBox.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::data::{DailyViewing, DemographicSegment, GenrePerformance, RegionStat};

/// Days shown in the viewing bar chart
pub const VIEWING_BARS: usize = 14;

const PIE_CENTER: f64 = 50.0;
const PIE_RADIUS: f64 = 40.0;

/// Smallest marker radius on the map
const MIN_MARKER_RADIUS: f64 = 2.0;
/// Radius a region with every viewer would get
const MARKER_SCALE: f64 = 20.0;

/// One bar of the viewing chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ViewingBar {
    pub date: NaiveDate,
    /// `month/day` axis label
    pub label: String,
    pub total_views: u64,
    /// Height relative to the busiest day of the full series
    pub height_percent: f64,
    pub is_weekend: bool,
}

/// Bars for the most recent `VIEWING_BARS` days
///
/// Heights are scaled against the maximum of the whole series, not only the
/// visible days.
pub fn viewing_bars(series: &[DailyViewing]) -> Vec<ViewingBar> {
    let max_views = series.iter().map(|day| day.total_views).max().unwrap_or(0);
    let start = series.len().saturating_sub(VIEWING_BARS);

    series[start..]
        .iter()
        .map(|day| ViewingBar {
            date: day.date,
            label: format!("{}/{}", day.date.month(), day.date.day()),
            total_views: day.total_views,
            height_percent: percent_of(day.total_views as f64, max_views as f64),
            is_weekend: matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun),
        })
        .collect()
}

/// One wedge of the demographics pie
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// SVG path: move to center, line to arc start, arc to arc end, close
    pub path: String,
}

impl PieSlice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

/// Slices in input order, starting at 0 degrees and running clockwise
pub fn pie_slices(segments: &[DemographicSegment]) -> Vec<PieSlice> {
    let mut angle = 0.0;
    segments
        .iter()
        .map(|segment| {
            let start = angle;
            let sweep = segment.percentage_share / 100.0 * 360.0;
            let end = start + sweep;
            angle = end;

            let (x1, y1) = point_on_circle(start);
            let (x2, y2) = point_on_circle(end);
            let large_arc = if sweep > 180.0 { 1 } else { 0 };

            PieSlice {
                label: segment.age_band.clone(),
                start_angle: start,
                end_angle: end,
                path: format!(
                    "M {c} {c} L {x1:.3} {y1:.3} A {r} {r} 0 {large_arc} 1 {x2:.3} {y2:.3} Z",
                    c = PIE_CENTER,
                    r = PIE_RADIUS,
                ),
            }
        })
        .collect()
}

fn point_on_circle(degrees: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (
        PIE_CENTER + PIE_RADIUS * radians.cos(),
        PIE_CENTER + PIE_RADIUS * radians.sin(),
    )
}

/// Growth badge tier on the genre chart
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GrowthTier {
    /// Above 15%
    High,
    /// Above 10%
    Medium,
    Normal,
}

impl GrowthTier {
    pub fn for_rate(rate: f64) -> Self {
        if rate > 15.0 {
            GrowthTier::High
        } else if rate > 10.0 {
            GrowthTier::Medium
        } else {
            GrowthTier::Normal
        }
    }
}

/// One horizontal bar of the genre chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreBar {
    pub genre: String,
    pub width_percent: f64,
    pub tier: GrowthTier,
}

pub fn genre_bars(genres: &[GenrePerformance]) -> Vec<GenreBar> {
    let max_views = genres.iter().map(|g| g.total_views).max().unwrap_or(0);
    genres
        .iter()
        .map(|genre| GenreBar {
            genre: genre.genre.clone(),
            width_percent: percent_of(genre.total_views as f64, max_views as f64),
            tier: GrowthTier::for_rate(genre.growth_rate_percent),
        })
        .collect()
}

/// A circle on the world map
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapMarker {
    pub country: String,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Markers sized by each region's share of all viewers
pub fn map_markers(regions: &[RegionStat]) -> Vec<MapMarker> {
    let total: i64 = regions.iter().map(|r| r.viewer_count).sum();
    regions
        .iter()
        .map(|region| {
            let share = if total > 0 {
                region.viewer_count as f64 / total as f64
            } else {
                0.0
            };
            MapMarker {
                country: region.country.clone(),
                x: region.map_coordinates.x,
                y: region.map_coordinates.y,
                radius: (share * MARKER_SCALE).max(MIN_MARKER_RADIUS),
            }
        })
        .collect()
}

fn percent_of(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{demographics, genre_performance, generate_viewing_series, initial_regions};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_viewing_bars_show_last_fourteen_days() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap(); // a Sunday
        let series = generate_viewing_series(today, &mut StdRng::seed_from_u64(1));
        let bars = viewing_bars(&series);

        assert_eq!(bars.len(), VIEWING_BARS);
        assert_eq!(bars.last().unwrap().date, today);
        assert_eq!(bars.last().unwrap().label, "6/16");
        assert!(bars.last().unwrap().is_weekend);
        assert!(!bars[bars.len() - 3].is_weekend); // Friday

        let max = series.iter().map(|d| d.total_views).max().unwrap();
        for bar in &bars {
            assert!(bar.height_percent > 0.0 && bar.height_percent <= 100.0);
            if bar.total_views == max {
                assert_eq!(bar.height_percent, 100.0);
            }
        }
    }

    #[test]
    fn test_viewing_bars_empty() {
        assert!(viewing_bars(&[]).is_empty());
    }

    #[test]
    fn test_pie_slices_cover_full_circle() {
        let slices = pie_slices(&demographics());

        assert_eq!(slices.len(), 5);
        assert_eq!(slices[0].start_angle, 0.0);
        assert!((slices.last().unwrap().end_angle - 360.0).abs() < 1e-9);
        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle, pair[1].start_angle);
        }
        // 22% of 360
        assert!((slices[0].sweep() - 79.2).abs() < 1e-9);
        assert!(slices[0].path.starts_with("M 50 50 L 90.000 50.000 A 40 40 0 0 1"));
    }

    #[test]
    fn test_large_arc_flag() {
        let segments = vec![
            DemographicSegment {
                age_band: "big".to_string(),
                percentage_share: 75.0,
                average_watch_time_hours: 1.0,
            },
            DemographicSegment {
                age_band: "small".to_string(),
                percentage_share: 25.0,
                average_watch_time_hours: 1.0,
            },
        ];
        let slices = pie_slices(&segments);
        assert!(slices[0].path.contains(" 0 1 1 "));
        assert!(slices[1].path.contains(" 0 0 1 "));
    }

    #[test]
    fn test_genre_bars() {
        let bars = genre_bars(&genre_performance());
        assert_eq!(bars.len(), 8);
        assert_eq!(bars[0].width_percent, 100.0); // Drama has the most views
        assert_eq!(bars[0].tier, GrowthTier::Medium);
        assert_eq!(bars[4].tier, GrowthTier::High); // Horror 18.9
        assert_eq!(bars[5].tier, GrowthTier::Normal); // Romance 6.4
        assert_eq!(GrowthTier::for_rate(15.0), GrowthTier::Medium);
        assert_eq!(GrowthTier::for_rate(10.0), GrowthTier::Normal);
    }

    #[test]
    fn test_map_markers() {
        let markers = map_markers(&initial_regions());
        assert_eq!(markers.len(), 6);
        // 75M of 243M
        assert!((markers[0].radius - 75.0 / 243.0 * 20.0).abs() < 1e-9);
        assert!(markers.iter().all(|m| m.radius >= MIN_MARKER_RADIUS));
    }

    #[test]
    fn test_map_markers_without_viewers() {
        let mut regions = initial_regions();
        for region in &mut regions {
            region.viewer_count = 0;
        }
        assert!(map_markers(&regions).iter().all(|m| m.radius == MIN_MARKER_RADIUS));
    }
}
