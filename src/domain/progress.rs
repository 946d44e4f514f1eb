//! Completion progress over any collection of status-bearing items.

use super::application::{Application, Component, Environment};
use super::status::Status;

/// Anything that carries a migration status
pub trait HasStatus {
    fn status(&self) -> &Status;
}

impl HasStatus for Status {
    fn status(&self) -> &Status {
        self
    }
}

impl HasStatus for Environment {
    fn status(&self) -> &Status {
        &self.status
    }
}

impl HasStatus for Component {
    fn status(&self) -> &Status {
        &self.status
    }
}

/// Applications report their current stage
impl HasStatus for Application {
    fn status(&self) -> &Status {
        &self.current_stage
    }
}

/// Completed count, total count and rounded percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl Progress {
    /// Build progress from raw counts. An empty total reports 0%.
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    /// Fraction in `0.0..=1.0` for gauge widgets
    pub fn ratio(&self) -> f64 {
        f64::from(self.percentage) / 100.0
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Count items whose status is literally `Completed`.
///
/// Only the exact `Completed` label counts, not the wider `Done` severity.
pub fn aggregate<'a, T, I>(items: I) -> Progress
where
    T: HasStatus + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (completed, total) = items.into_iter().fold((0, 0), |(done, total), item| {
        let done = if item.status().is_completed() {
            done + 1
        } else {
            done
        };
        (done, total + 1)
    });
    Progress::from_counts(completed, total)
}

/// Rounded percentage with halves rounding up; 0 when `total` is 0
fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let rounded = (completed * 200 + total) / (2 * total);
    rounded.min(100) as u8
}
