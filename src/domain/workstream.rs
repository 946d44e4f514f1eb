//! Workstream summaries and the workstream filter.

use super::application::{Application, Workstream};
use super::progress::Progress;
use super::status::Status;

/// Per-workstream application counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkstreamStats {
    pub workstream: Workstream,
    pub total_apps: usize,
    pub completed_apps: usize,
    pub in_progress_apps: usize,
    pub not_started_apps: usize,
}

impl WorkstreamStats {
    fn empty(workstream: Workstream) -> Self {
        Self {
            workstream,
            total_apps: 0,
            completed_apps: 0,
            in_progress_apps: 0,
            not_started_apps: 0,
        }
    }

    /// Display name of the workstream
    pub fn name(&self) -> &str {
        self.workstream.name()
    }

    fn record(&mut self, stage: &Status) {
        self.total_apps += 1;
        if stage.is_completed() {
            self.completed_apps += 1;
        } else if *stage == Status::NotStarted {
            self.not_started_apps += 1;
        } else if stage.severity().is_underway() {
            self.in_progress_apps += 1;
        }
    }

    /// Completed applications over total applications
    pub fn progress(&self) -> Progress {
        Progress::from_counts(self.completed_apps, self.total_apps)
    }
}

/// Summarise applications per workstream.
///
/// Always yields the three fixed workstreams first, in dashboard order, even
/// when a workstream has no applications. Unrecognised workstreams follow in
/// first-seen order.
pub fn summarize(applications: &[Application]) -> Vec<WorkstreamStats> {
    let mut stats: Vec<WorkstreamStats> = Workstream::ALL
        .iter()
        .cloned()
        .map(WorkstreamStats::empty)
        .collect();

    for app in applications {
        let index = match stats.iter().position(|s| s.workstream == app.workstream) {
            Some(index) => index,
            None => {
                tracing::debug!("Unrecognised workstream {:?} on {}", app.workstream.name(), app.id);
                stats.push(WorkstreamStats::empty(app.workstream.clone()));
                stats.len() - 1
            }
        };
        stats[index].record(&app.current_stage);
    }

    stats
}

/// Headline figures across every workstream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewTotals {
    pub total_apps: usize,
    pub completed_apps: usize,
    pub in_progress_apps: usize,
    pub not_started_apps: usize,
}

impl OverviewTotals {
    /// Sum workstream stats into overall totals
    pub fn from_stats(stats: &[WorkstreamStats]) -> Self {
        stats.iter().fold(Self::default(), |acc, s| Self {
            total_apps: acc.total_apps + s.total_apps,
            completed_apps: acc.completed_apps + s.completed_apps,
            in_progress_apps: acc.in_progress_apps + s.in_progress_apps,
            not_started_apps: acc.not_started_apps + s.not_started_apps,
        })
    }

    /// Completed applications over all applications
    pub fn completion(&self) -> Progress {
        Progress::from_counts(self.completed_apps, self.total_apps)
    }
}

/// Which applications the list shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkstreamFilter {
    #[default]
    All,
    Only(Workstream),
}

impl WorkstreamFilter {
    /// All tab choices in display order
    pub fn choices() -> Vec<WorkstreamFilter> {
        std::iter::once(Self::All)
            .chain(Workstream::ALL.iter().cloned().map(Self::Only))
            .collect()
    }

    /// Tab label
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All Applications",
            Self::Only(ws) => ws.name(),
        }
    }

    /// Position within [`WorkstreamFilter::choices`]
    pub fn index(&self) -> usize {
        Self::choices()
            .iter()
            .position(|c| c == self)
            .unwrap_or(0)
    }

    /// Choice at a tab index, if any
    pub fn from_index(index: usize) -> Option<Self> {
        Self::choices().into_iter().nth(index)
    }

    /// Next tab, wrapping around
    pub fn next(&self) -> Self {
        let choices = Self::choices();
        let next = (self.index() + 1) % choices.len();
        choices[next].clone()
    }

    /// Previous tab, wrapping around
    pub fn previous(&self) -> Self {
        let choices = Self::choices();
        let prev = (self.index() + choices.len() - 1) % choices.len();
        choices[prev].clone()
    }

    /// Whether an application passes this filter
    pub fn matches(&self, app: &Application) -> bool {
        match self {
            Self::All => true,
            Self::Only(ws) => app.workstream == *ws,
        }
    }

    /// Applications passing the filter, in dataset order
    pub fn apply<'a>(&self, applications: &'a [Application]) -> Vec<&'a Application> {
        applications.iter().filter(|a| self.matches(a)).collect()
    }
}
