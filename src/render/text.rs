//! Plain-text frame for terminal output

use std::fmt::{self, Write};

use crate::dashboard::DashboardView;
use crate::format::{clock_time, compact, millions, signed_percent};

/// Events shown in the terminal feed
const FEED_LINES: usize = 5;

pub(super) fn write_frame(out: &mut String, view: &DashboardView) -> fmt::Result {
    let live = &view.live;
    let kpis = &view.dashboard.kpis;

    writeln!(out, "== Streaming Analytics == {}", clock_time(live.clock))?;
    writeln!(
        out,
        "content {}  monthly views {}  subscribers {}  rating {:.1}",
        kpis.total_content,
        millions(kpis.monthly_views as f64),
        kpis.active_subscribers,
        kpis.average_rating
    )?;

    writeln!(out)?;
    writeln!(out, "-- Real-Time Metrics (updated {})", clock_time(live.gauges.last_update()))?;
    for gauge in live.gauges.gauges() {
        writeln!(
            out,
            "{} {:<22} {:>16} {:>8}",
            if gauge.is_animating { '*' } else { ' ' },
            gauge.label,
            compact(gauge.value, &gauge.unit),
            signed_percent(gauge.change_percent)
        )?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "-- Regions (total {})",
        millions(live.total_region_viewers as f64)
    )?;
    for region in &live.regions {
        writeln!(
            out,
            "  {:<16} {:>8} {:>8}  {}",
            region.country,
            millions(region.viewer_count as f64),
            signed_percent(region.growth_percent),
            region.top_show_title
        )?;
    }

    writeln!(out)?;
    writeln!(out, "-- Activity")?;
    for event in live.activity.iter().take(FEED_LINES) {
        writeln!(
            out,
            "  {} [{}] {} ({})",
            clock_time(event.timestamp),
            event.kind,
            event.description,
            event.location
        )?;
    }
    Ok(())
}
