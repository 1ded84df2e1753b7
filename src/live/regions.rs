//! Region mutator
//!
//! Nudges every region's viewer count and growth figure by a random delta.

use rand::Rng;
use std::time::Duration;

use crate::data::RegionStat;

pub const REGION_INTERVAL: Duration = Duration::from_secs(5);

/// Largest absolute change to `viewer_count` per tick
pub const VIEWER_DELTA: i64 = 5_000;

/// Largest absolute change to `growth_percent` per tick, in percentage points
pub const GROWTH_DELTA: f64 = 1.0;

/// Apply one tick of random drift to every region
///
/// Counts are not floored, so a long session can drift below zero.
pub fn mutate_regions<R: Rng + ?Sized>(regions: &mut [RegionStat], rng: &mut R) {
    for region in regions.iter_mut() {
        region.viewer_count += rng.gen_range(-VIEWER_DELTA..=VIEWER_DELTA);
        region.growth_percent += rng.gen_range(-GROWTH_DELTA..=GROWTH_DELTA);
    }
}

/// Sum of viewers across all regions
pub fn total_viewers(regions: &[RegionStat]) -> i64 {
    regions.iter().map(|region| region.viewer_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{initial_regions, MapPoint};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_deltas_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut regions = initial_regions();

        for _ in 0..500 {
            let before = regions.clone();
            mutate_regions(&mut regions, &mut rng);

            for (old, new) in before.iter().zip(regions.iter()) {
                assert_eq!(old.country, new.country);
                assert!((new.viewer_count - old.viewer_count).abs() <= VIEWER_DELTA);
                assert!((new.growth_percent - old.growth_percent).abs() <= GROWTH_DELTA);
                assert_eq!(old.map_coordinates, new.map_coordinates);
            }
        }
    }

    #[test]
    fn test_viewer_count_may_go_negative() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut regions = vec![RegionStat {
            region: "Test".to_string(),
            country: "Nowhere".to_string(),
            viewer_count: 0,
            growth_percent: 0.0,
            top_show_title: "Dark".to_string(),
            map_coordinates: MapPoint { x: 0.0, y: 0.0 },
        }];

        let mut saw_negative = false;
        for _ in 0..200 {
            mutate_regions(&mut regions, &mut rng);
            saw_negative |= regions[0].viewer_count < 0;
        }
        assert!(saw_negative);
    }

    #[test]
    fn test_total_viewers() {
        assert_eq!(total_viewers(&initial_regions()), 243_000_000);
        assert_eq!(total_viewers(&[]), 0);
    }
}
