//! Domain entities and pure logic for migration-dash.
//!
//! This module contains:
//! - Application: applications, phases, environments and components
//! - Status: status labels and their severity
//! - Progress: completion counts over status-bearing collections
//! - Workstream: per-workstream summaries and the list filter
//! - Disclosure: expand/collapse state for the application tree

mod application;
mod disclosure;
mod progress;
pub mod sample;
mod status;
mod workstream;

pub use application::{Application, Component, ComponentType, Environment, Phase, Workstream};
pub use disclosure::{DisclosureState, NodeId};
pub use progress::{aggregate, HasStatus, Progress};
pub use status::{classify, Severity, Status};
pub use workstream::{summarize, OverviewTotals, WorkstreamFilter, WorkstreamStats};
