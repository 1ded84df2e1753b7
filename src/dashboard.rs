//! Dashboard assembly
//!
//! Generates the session's static data in one pass and pairs it with a live
//! snapshot for rendering.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::config::Config;
use crate::error::DashboardResult;
use crate::data::{
    dashboard_kpis, demographics, generate_catalog, generate_viewing_series, genre_performance,
    summarize, ContentItem, ContentMetricsSummary, DailyViewing, DashboardKpis,
    DemographicSegment, GenrePerformance,
};
use crate::live::{initial_snapshot, LiveSnapshot};

/// Everything generated once at load and never mutated
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub catalog: Vec<ContentItem>,
    pub viewing: Vec<DailyViewing>,
    pub demographics: Vec<DemographicSegment>,
    pub genres: Vec<GenrePerformance>,
    pub summary: ContentMetricsSummary,
    pub kpis: DashboardKpis,
}

impl Dashboard {
    /// Generate all static panels from `titles` as of `now`
    pub fn generate<S, R>(titles: &[S], now: DateTime<Utc>, rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let catalog = generate_catalog(titles, now, rng);
        let viewing = generate_viewing_series(now.date_naive(), rng);
        let summary = summarize(&catalog, now);
        let kpis = dashboard_kpis(&catalog, &viewing, &summary);

        tracing::debug!(
            items = catalog.len(),
            movies = summary.movie_count,
            series = summary.series_count,
            "Generated dashboard data"
        );

        Self {
            generated_at: now,
            catalog,
            viewing,
            demographics: demographics(),
            genres: genre_performance(),
            summary,
            kpis,
        }
    }

    /// Generate using the generator settings of `config`
    pub fn from_config(config: &Config, now: DateTime<Utc>) -> Self {
        let mut rng = match config.generator.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate(config.generator.titles.as_slice(), now, &mut rng)
    }
}

/// Static data plus the live panels at one instant, ready to render
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    #[serde(flatten)]
    pub dashboard: Dashboard,
    pub live: LiveSnapshot,
}

impl DashboardView {
    pub fn new(dashboard: Dashboard, live: LiveSnapshot) -> Self {
        Self { dashboard, live }
    }

    /// Freshly generated dashboard as it looks before any live tick
    pub fn initial(config: &Config, now: DateTime<Utc>) -> Self {
        let dashboard = Dashboard::from_config(config, now);
        let live = initial_snapshot(&config.live, config.generator.seed, now);
        Self::new(dashboard, live)
    }

    /// Pretty-printed JSON snapshot of every panel
    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_with_default_config() {
        let now = Utc::now();
        let view = DashboardView::initial(&Config::default(), now);

        assert_eq!(view.dashboard.catalog.len(), 26);
        assert_eq!(view.dashboard.viewing.len(), 30);
        assert_eq!(view.dashboard.demographics.len(), 5);
        assert_eq!(view.dashboard.genres.len(), 8);
        assert_eq!(view.dashboard.kpis.total_content, 26);
        assert_eq!(view.live.activity.len(), 5);
        assert_eq!(view.live.clock, now);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let mut config = Config::default();
        config.generator.seed = Some(17);
        let now = Utc::now();

        let a = Dashboard::from_config(&config, now);
        let b = Dashboard::from_config(&config, now);
        assert_eq!(a.catalog, b.catalog);
        assert_eq!(a.viewing, b.viewing);
    }

    #[test]
    fn test_custom_titles() {
        let mut config = Config::default();
        config.generator.titles = vec!["X".to_string()];
        let dashboard = Dashboard::from_config(&config, Utc::now());

        assert_eq!(dashboard.catalog.len(), 1);
        assert_eq!(dashboard.catalog[0].id, "show-1");
        assert_eq!(dashboard.summary.top_rated.len(), 1);
    }

    #[test]
    fn test_view_serializes_to_json() {
        let view = DashboardView::initial(&Config::default(), Utc::now());
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();

        assert!(json.get("catalog").is_some());
        assert!(json["live"]["gauges"]["gauges"].as_array().unwrap().len() == 8);
    }
}
