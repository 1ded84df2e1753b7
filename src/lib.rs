//! # Streamdash
//!
//! Streaming Analytics Dashboard - synthetic streaming-service metrics with
//! simulated live telemetry, rendered as a standalone HTML page or a terminal
//! frame.
//!
//! ## Modules
//!
//! - [`data`]: Catalog, viewing series, reference tables and aggregation
//! - [`live`]: Periodic mutation loops and their schedulers
//! - [`chart`]: Geometry for bars, pie slices and map markers
//! - [`render`]: HTML document and text frame output
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::Utc;
//! use streamdash::config::Config;
//! use streamdash::dashboard::DashboardView;
//! use streamdash::render::render_document;
//!
//! let mut config = Config::default();
//! config.generator.seed = Some(42);
//!
//! let view = DashboardView::initial(&config, Utc::now());
//! assert_eq!(view.dashboard.catalog.len(), 26);
//!
//! let html = render_document(&view);
//! assert!(html.contains("Streaming Analytics"));
//! ```

pub mod chart;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod format;
pub mod live;
pub mod render;

pub use config::Config;
pub use dashboard::{Dashboard, DashboardView};
pub use error::{DashboardError, DashboardResult};
pub use render::{render_default, render_document, render_text_frame};
