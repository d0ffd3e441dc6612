//! Data ingestion and aggregation layer for publish-stat.
//!
//! Responsible for scanning scope directories, reading and parsing release
//! logs, building per-directory distributions and merging them into the
//! grid-wide report.

pub mod aggregator;
pub mod analysis;
pub mod cross_scope;
pub mod reader;
pub mod record;
pub mod scanner;

pub use stat_core as core;
