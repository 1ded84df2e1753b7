//! Synthetic Data Layer
//!
//! Everything the dashboard displays is generated here from an explicit
//! random source, so a seeded run is fully reproducible.
//!
//! ## Components
//!
//! - **catalog**: Fictitious content items, one per title
//! - **viewing**: 30-day viewing series ending today
//! - **reference**: Hand-authored demographics, genre and region tables
//! - **summary**: Counts, top-5 rankings and header KPIs

pub mod catalog;
pub mod reference;
pub mod summary;
pub mod types;
pub mod viewing;

pub use catalog::{generate_catalog, CATALOG_GENRES, DEFAULT_TITLES};
pub use reference::{demographics, genre_performance, initial_regions};
pub use summary::{dashboard_kpis, month_ago, summarize, DashboardKpis, TOP_N};
pub use types::{
    round_one_decimal, ActivityEvent, ActivityKind, ContentItem, ContentKind,
    ContentMetricsSummary, DailyViewing, DemographicSegment, GaugeKind, GenrePerformance,
    MapPoint, RealTimeMetric, RegionStat,
};
pub use viewing::{generate_viewing_series, VIEWING_WINDOW_DAYS};
