//! Shared domain types for publish-stat.
//!
//! Holds the reporting grid configuration, CLI settings, the record and
//! statistics models, compact date parsing and number formatting used by
//! the data, UI and binary crates.

pub mod config;
pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
pub mod time_utils;

pub use error::{Result, StatError};
