//! Metrics Aggregator
//!
//! Pure functions over the generated catalog and viewing series: counts by
//! kind, recent additions, top-5 rankings and the header KPI figures.

use chrono::{DateTime, Months, NaiveTime, Utc};
use serde::Serialize;

use super::types::{ContentItem, ContentKind, ContentMetricsSummary, DailyViewing};

/// Length of the top-N rankings
pub const TOP_N: usize = 5;

/// Summarize the catalog as of `now`
pub fn summarize(catalog: &[ContentItem], now: DateTime<Utc>) -> ContentMetricsSummary {
    let movie_count = catalog
        .iter()
        .filter(|item| item.kind == ContentKind::Movie)
        .count();
    let series_count = catalog
        .iter()
        .filter(|item| item.kind == ContentKind::Series)
        .count();

    let cutoff = month_ago(now);
    let new_this_month_count = catalog
        .iter()
        .filter(|item| item.added_date >= cutoff)
        .count();

    ContentMetricsSummary {
        total_content: catalog.len(),
        movie_count,
        series_count,
        new_this_month_count,
        top_rated: top_by(catalog, |item| u64::from(item.user_rating)),
        most_viewed: top_by(catalog, |item| item.view_count),
    }
}

/// Start of the day one calendar month before `now`
///
/// Month subtraction follows chrono's rule: a day past the end of the
/// earlier month clamps to its last day.
pub fn month_ago(now: DateTime<Utc>) -> DateTime<Utc> {
    let today = now.date_naive();
    let date = today.checked_sub_months(Months::new(1)).unwrap_or(today);
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Top `TOP_N` items by a key, descending. Equal keys keep catalog order.
fn top_by<F>(catalog: &[ContentItem], key: F) -> Vec<ContentItem>
where
    F: Fn(&ContentItem) -> u64,
{
    let mut ranked = catalog.to_vec();
    // sort_by is stable
    ranked.sort_by(|a, b| key(b).cmp(&key(a)));
    ranked.truncate(TOP_N);
    ranked
}

/// Change figures printed on the header cards; these are fixed labels
pub const TOTAL_CONTENT_CHANGE: f64 = 8.2;
pub const MONTHLY_VIEWS_CHANGE: f64 = 12.5;
pub const SUBSCRIBERS_CHANGE: f64 = 3.8;
pub const RATING_CHANGE: f64 = 2.1;

/// Global subscriber figure shown on the header card
pub const ACTIVE_SUBSCRIBERS: &str = "247.2M";

/// Key performance indicators shown at the top of the dashboard
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardKpis {
    pub total_content: usize,
    /// Sum of `total_views` across the viewing window
    pub monthly_views: u64,
    pub active_subscribers: String,
    /// Mean `user_rating` across the catalog, 0 for an empty catalog
    pub average_rating: f64,
}

/// Compute the header KPIs
pub fn dashboard_kpis(
    catalog: &[ContentItem],
    viewing: &[DailyViewing],
    summary: &ContentMetricsSummary,
) -> DashboardKpis {
    let monthly_views = viewing.iter().map(|day| day.total_views).sum();
    let average_rating = if catalog.is_empty() {
        0.0
    } else {
        catalog.iter().map(|item| f64::from(item.user_rating)).sum::<f64>() / catalog.len() as f64
    };

    DashboardKpis {
        total_content: summary.total_content,
        monthly_views,
        active_subscribers: ACTIVE_SUBSCRIBERS.to_string(),
        average_rating,
    }
}
