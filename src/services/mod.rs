//! Service layer for migration-dash.
//!
//! This module contains:
//! - DatasetService: loads the application list from the built-in sample or a JSON file

pub mod dataset;

pub use dataset::{DataSource, DatasetService};
