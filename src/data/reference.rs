//! Static Reference Tables
//!
//! Hand-authored rows: audience demographics, genre performance, and the
//! starting state of the region map.

use super::types::{DemographicSegment, GenrePerformance, MapPoint, RegionStat};

/// Audience split by age band. Shares sum to 100.
pub fn demographics() -> Vec<DemographicSegment> {
    [
        ("18-24", 22.0, 3.2),
        ("25-34", 28.0, 2.8),
        ("35-44", 24.0, 2.5),
        ("45-54", 16.0, 2.1),
        ("55+", 10.0, 1.8),
    ]
    .into_iter()
    .map(|(age_band, share, hours)| DemographicSegment {
        age_band: age_band.to_string(),
        percentage_share: share,
        average_watch_time_hours: hours,
    })
    .collect()
}

/// Views, rating, size and growth per genre
pub fn genre_performance() -> Vec<GenrePerformance> {
    [
        ("Drama", 45_000_000, 8.2, 156, 12.5),
        ("Comedy", 38_000_000, 7.8, 134, 8.3),
        ("Action", 42_000_000, 7.9, 98, 15.2),
        ("Thriller", 35_000_000, 8.1, 87, 10.7),
        ("Horror", 28_000_000, 7.5, 65, 18.9),
        ("Romance", 32_000_000, 7.6, 78, 6.4),
        ("Sci-Fi", 31_000_000, 8.3, 54, 22.1),
        ("Documentary", 25_000_000, 8.5, 89, 14.3),
    ]
    .into_iter()
    .map(
        |(genre, total_views, average_rating, content_count, growth)| GenrePerformance {
            genre: genre.to_string(),
            total_views,
            average_rating,
            content_count,
            growth_rate_percent: growth,
        },
    )
    .collect()
}

/// Starting viewer figures for the map panel
pub fn initial_regions() -> Vec<RegionStat> {
    [
        ("North America", "United States", 75_000_000, 8.5, "Stranger Things", 25.0, 40.0),
        ("Europe", "United Kingdom", 45_000_000, 12.3, "The Crown", 50.0, 35.0),
        ("Asia Pacific", "Japan", 38_000_000, 15.7, "Squid Game", 85.0, 45.0),
        ("Latin America", "Brazil", 32_000_000, 18.2, "Money Heist", 35.0, 70.0),
        ("Asia", "India", 28_000_000, 22.1, "Sacred Games", 75.0, 55.0),
        ("Europe", "Germany", 25_000_000, 9.8, "Dark", 52.0, 38.0),
    ]
    .into_iter()
    .map(|(region, country, viewers, growth, top_show, x, y)| RegionStat {
        region: region.to_string(),
        country: country.to_string(),
        viewer_count: viewers,
        growth_percent: growth,
        top_show_title: top_show.to_string(),
        map_coordinates: MapPoint { x, y },
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demographic_shares_sum_to_hundred() {
        let segments = demographics();
        assert_eq!(segments.len(), 5);
        let total: f64 = segments.iter().map(|s| s.percentage_share).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_genre_table() {
        let genres = genre_performance();
        assert_eq!(genres.len(), 8);
        assert_eq!(genres[0].genre, "Drama");
        assert_eq!(genres[6].growth_rate_percent, 22.1);
    }

    #[test]
    fn test_regions_have_unique_countries() {
        let regions = initial_regions();
        assert_eq!(regions.len(), 6);
        let mut countries: Vec<_> = regions.iter().map(|r| r.country.as_str()).collect();
        countries.sort();
        countries.dedup();
        assert_eq!(countries.len(), 6);
    }
}
