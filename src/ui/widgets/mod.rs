//! Reusable UI widgets for migration-dash.

pub mod application_list;
pub mod help;
pub mod progress_bar;
pub mod stats;
pub mod status_badge;
