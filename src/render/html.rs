//! Full-screen HTML document
//!
//! Self-contained markup with inline styles; no scripts and no external
//! assets. Each panel is written by its own function.

use std::fmt::{self, Write};

use crate::chart::{genre_bars, map_markers, pie_slices, viewing_bars, GrowthTier};
use crate::dashboard::DashboardView;
use crate::data::summary::{
    MONTHLY_VIEWS_CHANGE, RATING_CHANGE, SUBSCRIBERS_CHANGE, TOTAL_CONTENT_CHANGE,
};
use crate::data::{ActivityKind, ContentItem};
use crate::format::{clock_time, compact, grouped, millions, signed_percent};

const PALETTE: [&str; 8] = [
    "#3b82f6", "#22c55e", "#a855f7", "#ef4444", "#eab308", "#6366f1", "#ec4899", "#f97316",
];

const STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; font-family: system-ui, sans-serif; background: #f9fafb; color: #111827; }
header { background: #000; color: #fff; padding: 24px; display: flex; justify-content: space-between; align-items: center; }
header h1 { margin: 0; font-size: 24px; }
header .clock { font-family: monospace; font-size: 18px; text-align: right; }
main { max-width: 1280px; margin: 0 auto; padding: 24px; }
h2 { font-size: 24px; margin: 32px 0 16px; }
h3 { font-size: 18px; margin: 0 0 16px; }
.grid { display: grid; gap: 24px; }
.cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }
.card { background: #fff; border: 1px solid #e5e7eb; border-radius: 12px; padding: 24px; }
.kpi .value { font-size: 30px; font-weight: 700; }
.kpi .title { color: #4b5563; font-size: 14px; }
.up { color: #16a34a; } .down { color: #dc2626; } .flat { color: #4b5563; }
.muted { color: #6b7280; font-size: 12px; }
.gauge { padding: 16px; border-radius: 8px; background: #f9fafb; border: 1px solid #f3f4f6; }
.gauge.animating { background: #eff6ff; }
.gauge .value { font-size: 24px; font-weight: 700; }
.bar-track { background: #e5e7eb; border-radius: 999px; height: 8px; overflow: hidden; }
.bar-fill { height: 100%; border-radius: 999px; }
.bars { display: flex; align-items: flex-end; height: 200px; gap: 4px; }
.bars .col { flex: 1; display: flex; flex-direction: column; justify-content: flex-end; height: 100%; text-align: center; }
.feed-item { padding: 12px; border-radius: 8px; margin-bottom: 8px; }
.feed-item.newest { background: #eff6ff; border: 1px solid #bfdbfe; }
.badge { font-size: 12px; padding: 2px 8px; border-radius: 999px; }
.tier-high { background: #dcfce7; color: #166534; }
.tier-medium { background: #fef9c3; color: #854d0e; }
.tier-normal { background: #f3f4f6; color: #1f2937; }
ol.ranking { list-style: none; padding: 0; margin: 0; }
ol.ranking li { display: flex; justify-content: space-between; padding: 12px 0; border-bottom: 1px solid #f3f4f6; }
footer { text-align: center; padding: 32px 0; color: #6b7280; border-top: 1px solid #e5e7eb; margin-top: 32px; }
"#;

pub(super) fn write_document(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(out, "<title>Streaming Analytics</title>")?;
    writeln!(out, "<style>{}</style>", STYLE)?;
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;

    write_header(out, view)?;
    writeln!(out, "<main>")?;
    write_kpis(out, view)?;
    write_content_overview(out, view)?;

    writeln!(out, "<section class=\"grid cols-2\">")?;
    write_gauges(out, view)?;
    write_activity(out, view)?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section class=\"grid cols-2\" style=\"margin-top:32px\">")?;
    write_viewing_chart(out, view)?;
    write_region_map(out, view)?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section class=\"grid cols-2\" style=\"margin-top:32px\">")?;
    write_genre_chart(out, view)?;
    write_demographics(out, view)?;
    writeln!(out, "</section>")?;

    writeln!(out, "<section class=\"grid cols-2\" style=\"margin-top:32px\">")?;
    write_ranking(out, "Top Rated Content", &view.dashboard.summary.top_rated, Metric::Rating)?;
    write_ranking(out, "Most Watched Content", &view.dashboard.summary.most_viewed, Metric::Views)?;
    writeln!(out, "</section>")?;

    write_footer(out, view)?;
    writeln!(out, "</main>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

fn write_header(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(
        out,
        "<header><h1>&#9654; Streaming Analytics</h1>\
         <div class=\"clock\"><div class=\"muted\">Last Updated</div>{}</div></header>",
        clock_time(view.live.clock)
    )
}

fn write_kpis(out: &mut String, view: &DashboardView) -> fmt::Result {
    let kpis = &view.dashboard.kpis;
    writeln!(out, "<h2>Key Performance Indicators</h2>")?;
    writeln!(out, "<section class=\"grid cols-4\">")?;
    write_kpi_card(
        out,
        "Total Content",
        &grouped(kpis.total_content as u64),
        Some((TOTAL_CONTENT_CHANGE, "vs last month")),
    )?;
    write_kpi_card(
        out,
        "Monthly Views",
        &millions(kpis.monthly_views as f64),
        Some((MONTHLY_VIEWS_CHANGE, "vs last month")),
    )?;
    write_kpi_card(
        out,
        "Active Subscribers",
        &kpis.active_subscribers,
        Some((SUBSCRIBERS_CHANGE, "global subscribers")),
    )?;
    write_kpi_card(
        out,
        "Avg Rating",
        &format!("{:.1}", kpis.average_rating),
        Some((RATING_CHANGE, "user satisfaction")),
    )?;
    writeln!(out, "</section>")
}

fn write_content_overview(out: &mut String, view: &DashboardView) -> fmt::Result {
    let summary = &view.dashboard.summary;
    writeln!(out, "<h2>Content Overview</h2>")?;
    writeln!(out, "<section class=\"grid cols-3\" style=\"margin-bottom:32px\">")?;
    write_kpi_card(out, "Movies", &summary.movie_count.to_string(), None)?;
    write_kpi_card(out, "TV Shows", &summary.series_count.to_string(), None)?;
    write_kpi_card(out, "New This Month", &summary.new_this_month_count.to_string(), None)?;
    writeln!(out, "</section>")
}

fn write_kpi_card(
    out: &mut String,
    title: &str,
    value: &str,
    change: Option<(f64, &str)>,
) -> fmt::Result {
    write!(
        out,
        "<div class=\"card kpi\"><div class=\"title\">{}</div><div class=\"value\">{}</div>",
        escape(title),
        escape(value)
    )?;
    if let Some((percent, label)) = change {
        let class = if percent >= 0.0 { "up" } else { "down" };
        write!(
            out,
            "<div class=\"{}\">{}</div><div class=\"muted\">{}</div>",
            class,
            signed_percent(percent),
            escape(label)
        )?;
    }
    writeln!(out, "</div>")
}

fn write_gauges(out: &mut String, view: &DashboardView) -> fmt::Result {
    let board = &view.live.gauges;
    writeln!(out, "<div class=\"card\">")?;
    writeln!(
        out,
        "<h3>Real-Time Metrics <span class=\"muted\">Live &middot; Updated: {}</span></h3>",
        clock_time(board.last_update())
    )?;
    writeln!(out, "<div class=\"grid cols-4\" style=\"gap:16px\">")?;

    for (index, gauge) in board.gauges().iter().enumerate() {
        let trend = trend_class(gauge.change_percent);
        write!(
            out,
            "<div class=\"gauge{}\"><span class=\"badge {}\">{}</span>\
             <div class=\"value\">{}</div><div class=\"muted\">{}</div>",
            if gauge.is_animating { " animating" } else { "" },
            trend,
            signed_percent(gauge.change_percent),
            escape(&compact(gauge.value, &gauge.unit)),
            escape(&gauge.label)
        )?;
        if gauge.is_percentage() {
            write!(
                out,
                "<div class=\"bar-track\"><div class=\"bar-fill\" style=\"width:{:.1}%;background:{}\"></div></div>",
                gauge.value,
                PALETTE[index % PALETTE.len()]
            )?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</div>")?;

    let summary = board.summary();
    writeln!(
        out,
        "<div class=\"grid cols-3\" style=\"margin-top:24px;text-align:center\">\
         <div><div class=\"value\">{}</div><div class=\"muted\">Total Viewers</div></div>\
         <div><div class=\"value\">{}</div><div class=\"muted\">Hourly Activity</div></div>\
         <div><div class=\"value\">{:.1}%</div><div class=\"muted\">Avg Engagement</div></div></div>",
        compact(summary.total_viewers, ""),
        compact(summary.hourly_activity, ""),
        summary.avg_engagement
    )?;
    writeln!(out, "</div>")
}

fn write_activity(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(out, "<div class=\"card\">")?;
    writeln!(out, "<h3>Live Activity Feed <span class=\"muted\">Live Updates</span></h3>")?;
    for (index, event) in view.live.activity.iter().enumerate() {
        writeln!(
            out,
            "<div class=\"feed-item{}\"><span class=\"badge\" style=\"color:{}\">{}</span> \
             <strong>{}</strong> <span class=\"muted\">{}</span><div>{}</div>\
             <div class=\"muted\">{}</div></div>",
            if index == 0 { " newest" } else { "" },
            activity_color(event.kind),
            activity_symbol(event.kind),
            escape(&event.title),
            clock_time(event.timestamp),
            escape(&event.description),
            escape(&event.location)
        )?;
    }
    writeln!(out, "</div>")
}

fn write_viewing_chart(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(out, "<div class=\"card\">")?;
    writeln!(
        out,
        "<h3>Daily Viewing Trends <span class=\"muted\">Views (Millions) &middot; Last 30 Days</span></h3>"
    )?;
    writeln!(out, "<div class=\"bars\">")?;
    for bar in viewing_bars(&view.dashboard.viewing) {
        let color = if bar.is_weekend { "#ef4444" } else { "#3b82f6" };
        writeln!(
            out,
            "<div class=\"col\" title=\"{} views\"><div style=\"height:{:.1}%;background:{};border-radius:6px 6px 0 0\"></div>\
             <div class=\"muted\">{}</div></div>",
            millions(bar.total_views as f64),
            bar.height_percent,
            color,
            bar.label
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(
        out,
        "<div class=\"muted\"><span style=\"color:#3b82f6\">&#9632;</span> Weekdays \
         <span style=\"color:#ef4444\">&#9632;</span> Weekends</div>"
    )?;
    writeln!(out, "</div>")
}

fn write_region_map(out: &mut String, view: &DashboardView) -> fmt::Result {
    let live = &view.live;
    writeln!(out, "<div class=\"card\">")?;
    writeln!(
        out,
        "<h3>Global Viewer Distribution <span class=\"muted\">Total: {} viewers</span></h3>",
        millions(live.total_region_viewers as f64)
    )?;
    writeln!(
        out,
        "<svg viewBox=\"0 0 100 100\" style=\"width:100%;height:300px;background:#eff6ff;border-radius:8px\">"
    )?;
    writeln!(
        out,
        "<path d=\"M10,20 Q20,15 30,20 L40,25 Q50,20 60,25 L70,30 Q80,25 90,30 L90,60 Q80,65 70,60 \
         L60,55 Q50,60 40,55 L30,50 Q20,55 10,50 Z\" fill=\"none\" stroke=\"#e5e7eb\" stroke-width=\"0.5\"/>"
    )?;
    for marker in map_markers(&live.regions) {
        writeln!(
            out,
            "<g><circle cx=\"{}\" cy=\"{}\" r=\"{:.2}\" fill=\"#3b82f6\"/>\
             <text x=\"{}\" y=\"{}\" text-anchor=\"middle\" style=\"font-size:3px\">{}</text></g>",
            marker.x,
            marker.y,
            marker.radius,
            marker.x,
            marker.y - 4.0,
            escape(&marker.country)
        )?;
    }
    writeln!(out, "</svg>")?;

    writeln!(out, "<div class=\"grid cols-3\" style=\"gap:16px;margin-top:16px\">")?;
    for region in &live.regions {
        writeln!(
            out,
            "<div class=\"gauge\"><strong>{}</strong><div class=\"muted\">Viewers {}</div>\
             <div class=\"{}\">Growth {}</div><div class=\"muted\">{}</div></div>",
            escape(&region.country),
            millions(region.viewer_count as f64),
            if region.growth_percent > 0.0 { "up" } else { "down" },
            signed_percent(region.growth_percent),
            escape(&region.top_show_title)
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}

fn write_genre_chart(out: &mut String, view: &DashboardView) -> fmt::Result {
    let genres = &view.dashboard.genres;
    writeln!(out, "<div class=\"card\">")?;
    writeln!(out, "<h3>Genre Performance</h3>")?;
    for (index, (genre, bar)) in genres.iter().zip(genre_bars(genres)).enumerate() {
        let tier = match bar.tier {
            GrowthTier::High => "tier-high",
            GrowthTier::Medium => "tier-medium",
            GrowthTier::Normal => "tier-normal",
        };
        writeln!(
            out,
            "<div style=\"margin-bottom:16px\"><div style=\"display:flex;justify-content:space-between\">\
             <strong>{}</strong><span class=\"muted\">{} views &middot; &#9733; {} \
             <span class=\"badge {}\">+{}%</span></span></div>\
             <div class=\"bar-track\"><div class=\"bar-fill\" style=\"width:{:.1}%;background:{}\"></div></div>\
             <div class=\"muted\">{} titles</div></div>",
            escape(&genre.genre),
            millions(genre.total_views as f64),
            genre.average_rating,
            tier,
            genre.growth_rate_percent,
            bar.width_percent,
            PALETTE[index % PALETTE.len()],
            genre.content_count
        )?;
    }
    writeln!(out, "</div>")
}

fn write_demographics(out: &mut String, view: &DashboardView) -> fmt::Result {
    let segments = &view.dashboard.demographics;
    writeln!(out, "<div class=\"card\">")?;
    writeln!(out, "<h3>User Demographics</h3>")?;
    writeln!(
        out,
        "<svg viewBox=\"0 0 100 100\" style=\"width:192px;height:192px;display:block;margin:0 auto 24px;transform:rotate(-90deg)\">"
    )?;
    for (index, slice) in pie_slices(segments).iter().enumerate() {
        writeln!(
            out,
            "<path d=\"{}\" fill=\"{}\" stroke=\"white\" stroke-width=\"1\"/>",
            slice.path,
            PALETTE[index % PALETTE.len()]
        )?;
    }
    writeln!(out, "</svg>")?;
    for (index, segment) in segments.iter().enumerate() {
        writeln!(
            out,
            "<div style=\"display:flex;justify-content:space-between;margin-bottom:8px\">\
             <span><span style=\"color:{}\">&#9679;</span> {}</span>\
             <span>{}% <span class=\"muted\">{}h avg</span></span></div>",
            PALETTE[index % PALETTE.len()],
            escape(&segment.age_band),
            segment.percentage_share,
            segment.average_watch_time_hours
        )?;
    }
    writeln!(out, "</div>")
}

#[derive(Clone, Copy)]
enum Metric {
    Rating,
    Views,
}

fn write_ranking(out: &mut String, title: &str, items: &[ContentItem], metric: Metric) -> fmt::Result {
    writeln!(out, "<div class=\"card\">")?;
    writeln!(out, "<h3>{}</h3>", escape(title))?;
    writeln!(out, "<ol class=\"ranking\">")?;
    for (rank, item) in items.iter().enumerate() {
        let figure = match metric {
            Metric::Rating => format!("&#9733; {}%", item.user_rating),
            Metric::Views => millions(item.view_count as f64),
        };
        writeln!(
            out,
            "<li><span><strong>{}. {}</strong> <span class=\"muted\">{} &middot; {} &middot; {} &middot; {}</span></span>\
             <span>{} <span class=\"muted\">{}% completion</span></span></li>",
            rank + 1,
            escape(&item.title),
            item.kind,
            item.release_year,
            escape(&item.genres.join(", ")),
            escape(&item.duration),
            figure,
            item.completion_rate
        )?;
    }
    writeln!(out, "</ol>")?;
    writeln!(out, "</div>")
}

fn write_footer(out: &mut String, view: &DashboardView) -> fmt::Result {
    writeln!(
        out,
        "<footer><p>Streaming Analytics Dashboard - Real-time insights into content performance and user engagement</p>\
         <p class=\"muted\">Data refreshes every 30 seconds &middot; Last sync: {}</p></footer>",
        view.live.clock.format("%Y-%m-%d %H:%M:%S")
    )
}

fn trend_class(change: f64) -> &'static str {
    if change > 0.0 {
        "up"
    } else if change < 0.0 {
        "down"
    } else {
        "flat"
    }
}

fn activity_symbol(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::StreamStart => "&#9654;",
        ActivityKind::Download => "&#8681;",
        ActivityKind::Rating => "&#9733;",
        ActivityKind::Milestone => "&#9873;",
    }
}

fn activity_color(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::StreamStart => "#16a34a",
        ActivityKind::Download => "#2563eb",
        ActivityKind::Rating => "#ca8a04",
        ActivityKind::Milestone => "#9333ea",
    }
}

/// Escape text for HTML content and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
