//! Application state and main event loop.

use crate::config::DashboardConfig;
use crate::domain::{
    summarize, Application, DisclosureState, NodeId, OverviewTotals, WorkstreamFilter,
    WorkstreamStats,
};
use crate::error::{AppError, Result};
use crate::ui::input::{Action, InputHandler};
use crate::ui::widgets::help::HelpViewState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::prelude::*;
use std::time::{Duration, Instant};

/// Rows moved by PageUp/PageDown
const PAGE_SIZE: usize = 5;

/// Application view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppView {
    /// Stats, workstream progress and the application tree
    #[default]
    Dashboard,
    /// Help overlay showing keybindings
    Help,
}

/// Main application state
pub struct App {
    /// Loaded configuration
    pub config: DashboardConfig,
    /// Where the dataset came from, shown in the header
    pub source_label: String,
    /// Loaded applications, never mutated after construction
    pub applications: Vec<Application>,
    /// Per-workstream summary computed from `applications`
    pub workstream_stats: Vec<WorkstreamStats>,
    /// Headline totals across all workstreams
    pub totals: OverviewTotals,

    // UI State
    /// Current view
    pub view: AppView,
    /// Selected workstream tab
    pub filter: WorkstreamFilter,
    /// Expanded applications and phases
    pub disclosure: DisclosureState,
    /// Index into [`App::visible_nodes`]
    pub selected_index: usize,
    /// Error message to display
    pub error_message: Option<String>,
    /// State for help view (scroll position)
    pub help_view_state: HelpViewState,

    // Input handler
    input_handler: InputHandler,

    /// Should quit the application
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance over a loaded dataset
    pub fn new(
        config: DashboardConfig,
        source_label: impl Into<String>,
        applications: Vec<Application>,
    ) -> Self {
        let workstream_stats = summarize(&applications);
        let totals = OverviewTotals::from_stats(&workstream_stats);
        let input_handler = InputHandler::new(config.ui.vim_navigation);

        Self {
            config,
            source_label: source_label.into(),
            applications,
            workstream_stats,
            totals,
            view: AppView::Dashboard,
            filter: WorkstreamFilter::All,
            disclosure: DisclosureState::new(),
            selected_index: 0,
            error_message: None,
            help_view_state: HelpViewState::new(),
            input_handler,
            should_quit: false,
        }
    }

    /// Applications passing the current workstream filter
    pub fn filtered_applications(&self) -> Vec<&Application> {
        self.filter.apply(&self.applications)
    }

    /// Toggleable rows currently on screen, in display order
    pub fn visible_nodes(&self) -> Vec<NodeId> {
        let mut nodes = Vec::new();
        for app in self.filtered_applications() {
            let app_node = NodeId::application(&app.id);
            let expanded = self.disclosure.is_expanded(&app_node);
            nodes.push(app_node);
            if expanded {
                nodes.extend(app.phases.iter().map(|p| NodeId::phase(&app.id, &p.id)));
            }
        }
        nodes
    }

    /// Get the currently selected row
    pub fn selected_node(&self) -> Option<NodeId> {
        self.visible_nodes().into_iter().nth(self.selected_index)
    }

    /// Point the cursor at `node` if it is visible, otherwise keep the index in range
    fn reselect(&mut self, node: Option<NodeId>) {
        let nodes = self.visible_nodes();
        self.selected_index = node
            .and_then(|n| nodes.iter().position(|v| *v == n))
            .unwrap_or_else(|| self.selected_index.min(nodes.len().saturating_sub(1)));
    }

    /// Select previous row
    pub fn select_previous(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    /// Select next row
    pub fn select_next(&mut self) {
        let len = self.visible_nodes().len();
        if self.selected_index < len.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected_index = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_index = self.visible_nodes().len().saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self) {
        let last = self.visible_nodes().len().saturating_sub(1);
        self.selected_index = (self.selected_index + PAGE_SIZE).min(last);
    }

    /// Expand or collapse the selected row
    pub fn toggle_selected(&mut self) {
        if let Some(node) = self.selected_node() {
            let expanded = self.disclosure.toggle(&node);
            tracing::debug!("Toggled {:?} -> expanded={}", node, expanded);
            self.reselect(Some(node));
        }
    }

    /// Expand the selected row
    pub fn expand_selected(&mut self) {
        if let Some(node) = self.selected_node() {
            self.disclosure.expand(&node);
            self.reselect(Some(node));
        }
    }

    /// Collapse the selected row, or move to its parent when already collapsed
    pub fn collapse_selected(&mut self) {
        let Some(node) = self.selected_node() else {
            return;
        };
        if self.disclosure.is_expanded(&node) {
            self.disclosure.collapse(&node);
            self.reselect(Some(node));
        } else if let Some(parent) = node.parent() {
            self.reselect(Some(parent));
        }
    }

    /// Collapse every application and phase
    pub fn collapse_all(&mut self) {
        let target = self.selected_node().map(|n| n.parent().unwrap_or(n));
        self.disclosure.collapse_all();
        self.reselect(target);
    }

    /// Switch workstream tab
    pub fn set_filter(&mut self, filter: WorkstreamFilter) {
        if filter != self.filter {
            tracing::debug!("Workstream filter: {}", filter.label());
            self.filter = filter;
            self.selected_index = 0;
        }
    }

    /// Open help view
    pub fn open_help(&mut self) {
        self.help_view_state.scroll_offset = 0;
        self.view = AppView::Help;
    }

    /// Close help view
    pub fn close_help(&mut self) {
        self.view = AppView::Dashboard;
    }

    /// Handle keyboard input and return true if should quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // A visible error swallows the key that dismisses it
        if self.error_message.take().is_some() {
            return false;
        }

        if self.view == AppView::Help {
            return self.handle_help_key(key);
        }

        if let Some(action) = self.input_handler.handle_key(key) {
            match action {
                Action::MoveUp => self.select_previous(),
                Action::MoveDown => self.select_next(),
                Action::PageUp => self.page_up(),
                Action::PageDown => self.page_down(),
                Action::Home => self.select_first(),
                Action::End => self.select_last(),
                Action::Toggle => self.toggle_selected(),
                Action::Expand => self.expand_selected(),
                Action::Collapse => self.collapse_selected(),
                Action::CollapseAll => self.collapse_all(),
                Action::NextFilter => self.set_filter(self.filter.next()),
                Action::PreviousFilter => self.set_filter(self.filter.previous()),
                Action::SelectFilter(index) => {
                    if let Some(filter) = WorkstreamFilter::from_index(index) {
                        self.set_filter(filter);
                    }
                }
                Action::Help => self.open_help(),
                Action::Back | Action::Quit => return true,
            }
        }

        false
    }

    /// Handle keys in help view
    fn handle_help_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
                self.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.help_view_state.scroll_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.help_view_state.scroll_down(1);
            }
            KeyCode::PageUp | KeyCode::Char('b') => {
                self.help_view_state.page_up();
            }
            KeyCode::PageDown | KeyCode::Char('f') => {
                self.help_view_state.page_down();
            }
            _ => {}
        }
        false
    }

    /// Main event loop reading from the terminal
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.run_with(terminal, |timeout| {
            if event::poll(timeout).map_err(|e| AppError::Terminal(e.to_string()))? {
                event::read()
                    .map(Some)
                    .map_err(|e| AppError::Terminal(e.to_string()))
            } else {
                Ok(None)
            }
        })
        .await
    }

    /// Event loop over an arbitrary event source.
    ///
    /// `next_event` waits at most the given timeout and returns `None` when
    /// nothing arrived. Yields to the runtime once per iteration.
    pub async fn run_with<B, F>(&mut self, terminal: &mut Terminal<B>, mut next_event: F) -> Result<()>
    where
        B: Backend,
        F: FnMut(Duration) -> Result<Option<Event>>,
    {
        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);
        let mut last_tick = Instant::now();

        loop {
            let size = terminal.size()?;
            let help_area = crate::ui::layout::help_area(Rect::new(0, 0, size.width, size.height));
            self.help_view_state
                .set_visible_height(help_area.height.saturating_sub(2) as usize);

            // Draw UI
            terminal.draw(|f| crate::ui::layout::draw(f, self))?;

            let timeout = tick_rate.saturating_sub(last_tick.elapsed());

            // Wait for event with timeout
            match next_event(timeout)? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        self.should_quit = true;
                    }
                }
                Some(Event::Resize(width, height)) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                }
                _ => {}
            }

            if self.should_quit {
                break;
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }

            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
