//! migration-dash: terminal dashboard for application migration progress
//!
//! This crate classifies migration statuses, aggregates environment
//! completion, summarizes applications by workstream and renders the
//! result as a keyboard-driven TUI with expandable applications and phases.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::App;
pub use config::DashboardConfig;
pub use error::{AppError, Result};
