//! Rendering
//!
//! Turns a [`DashboardView`] into a standalone HTML document or a compact
//! text frame for the terminal.

mod html;
mod text;

use std::io::Write;
use std::path::Path;

use chrono::Utc;

use crate::config::Config;
use crate::dashboard::DashboardView;
use crate::error::DashboardResult;

pub use html::escape;

/// Render the full dashboard page
pub fn render_document(view: &DashboardView) -> String {
    let mut out = String::with_capacity(64 * 1024);
    html::write_document(&mut out, view)
        .map(|_| out)
        .unwrap_or_default()
}

/// Render a freshly generated dashboard with default settings
pub fn render_default() -> String {
    render_document(&DashboardView::initial(&Config::default(), Utc::now()))
}

/// Render the live panels as plain text
pub fn render_text_frame(view: &DashboardView) -> String {
    let mut out = String::with_capacity(4 * 1024);
    text::write_frame(&mut out, view)
        .map(|_| out)
        .unwrap_or_default()
}

/// Write rendered output to `path`, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> DashboardResult<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)?;
            tracing::info!(path = %path.display(), bytes = contents.len(), "Wrote output");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{ActivityEvent, ActivityKind};

    fn seeded_view() -> DashboardView {
        let mut config = Config::default();
        config.generator.seed = Some(99);
        DashboardView::initial(&config, Utc::now())
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Tom & \"Jerry\" <3"), "Tom &amp; &quot;Jerry&quot; &lt;3");
        assert_eq!(escape("The Queen's Gambit"), "The Queen&#39;s Gambit");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_document_has_every_panel() {
        let view = seeded_view();
        let html = render_document(&view);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        for heading in [
            "Key Performance Indicators",
            "Content Overview",
            "Real-Time Metrics",
            "Live Activity Feed",
            "Daily Viewing Trends",
            "Global Viewer Distribution",
            "Genre Performance",
            "User Demographics",
            "Top Rated Content",
            "Most Watched Content",
        ] {
            assert!(html.contains(heading), "missing {}", heading);
        }
        assert!(html.contains("+8.2%"));
        assert!(html.contains("247.2M"));
        assert!(html.contains("Total: 243.0M viewers"));
        assert_eq!(html.matches("class=\"col\"").count(), 14);
        assert_eq!(html.matches("<circle").count(), 6);
    }

    #[test]
    fn test_document_escapes_titles() {
        let mut config = Config::default();
        config.generator.titles = vec!["<script>alert(1)</script>".to_string()];
        let html = render_document(&DashboardView::initial(&config, Utc::now()));

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_feed_still_renders() {
        let mut view = seeded_view();
        view.live.activity.clear();
        let html = render_document(&view);
        assert!(html.contains("Live Activity Feed"));
        assert!(!html.contains("class=\"feed-item"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dashboard.html");
        let html = render_document(&seeded_view());

        write_output(Some(&path), &html).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
    }

    #[test]
    fn test_write_output_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");
        let err = write_output(Some(&path), "x").unwrap_err();
        assert!(matches!(err, crate::error::DashboardError::Io(_)));
    }

    #[test]
    fn test_render_default() {
        let html = render_default();
        assert!(html.contains("Streaming Analytics"));
    }

    #[test]
    fn test_text_frame() {
        let mut view = seeded_view();
        view.live.activity.insert(
            0,
            ActivityEvent {
                id: "activity-1-1".to_string(),
                kind: ActivityKind::Milestone,
                title: "Viewership Milestone".to_string(),
                description: "Dark reached 1M views".to_string(),
                timestamp: view.live.clock,
                location: "Global".to_string(),
            },
        );
        let frame = render_text_frame(&view);

        assert!(frame.starts_with("== Streaming Analytics =="));
        assert!(frame.contains("Active Viewers"));
        assert!(frame.contains("United States"));
        assert!(frame.contains("[milestone] Dark reached 1M views (Global)"));
    }
}
