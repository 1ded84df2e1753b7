//! Time-Series Generator
//!
//! Daily viewing statistics for the trailing 30 days. Each day is drawn
//! independently; there is deliberately no smoothing between days.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::catalog::pick;
use super::types::DailyViewing;

/// Number of days in the viewing window
pub const VIEWING_WINDOW_DAYS: i64 = 30;

const TOP_GENRES: [&str; 6] = ["Drama", "Comedy", "Action", "Thriller", "Horror", "Romance"];

/// Generate one record per day for the window ending at `today`, oldest first
pub fn generate_viewing_series<R: Rng + ?Sized>(today: NaiveDate, rng: &mut R) -> Vec<DailyViewing> {
    (0..VIEWING_WINDOW_DAYS)
        .rev()
        .map(|days_ago| DailyViewing {
            date: today - Duration::days(days_ago),
            total_views: rng.gen_range(15_000_000..=20_000_000),
            unique_viewers: rng.gen_range(8_000_000..=10_000_000),
            average_watch_time_minutes: rng.gen_range(45..=105),
            top_genre: pick(rng, &TOP_GENRES).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    #[test]
    fn test_thirty_days_ending_today() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate_viewing_series(today(), &mut rng);

        assert_eq!(series.len(), 30);
        assert_eq!(series.last().unwrap().date, today());
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());
    }

    #[test]
    fn test_dates_ascending_without_gaps() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = generate_viewing_series(today(), &mut rng);

            for pair in series.windows(2) {
                assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
            }
        }
    }

    #[test]
    fn test_value_ranges() {
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for day in generate_viewing_series(today(), &mut rng) {
                assert!((15_000_000..=20_000_000).contains(&day.total_views));
                assert!((8_000_000..=10_000_000).contains(&day.unique_viewers));
                assert!((45..=105).contains(&day.average_watch_time_minutes));
                assert!(TOP_GENRES.contains(&day.top_genre.as_str()));
            }
        }
    }
}
