//! Terminal UI layer for publish-stat.
//!
//! Provides themes, the header component, the summary table, bar charts, the
//! date × hour heat map, the plain-text report, and the application event
//! loop built on top of [`ratatui`].

pub mod app;
pub mod chart_view;
pub mod components;
pub mod heatmap_view;
pub mod table_view;
pub mod text_report;
pub mod themes;

pub use stat_core as core;
