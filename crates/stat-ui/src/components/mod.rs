//! Reusable widgets shared by the views.

pub mod header;

pub use header::Header;
