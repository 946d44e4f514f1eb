//! Help view widget showing all keybindings.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

/// Help categories
const HELP_SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("↑/k", "Move up"),
            ("↓/j", "Move down"),
            ("g/Home", "Go to first application"),
            ("G/End", "Go to last row"),
            ("PgUp/PgDn", "Move by a page"),
        ],
    ),
    (
        "Application Tree",
        &[
            ("Enter/Space", "Expand / collapse selected row"),
            ("→/l", "Expand selected row"),
            ("←/h", "Collapse row / jump to parent"),
            ("c", "Collapse everything"),
        ],
    ),
    (
        "Workstreams",
        &[
            ("Tab", "Next workstream tab"),
            ("Shift+Tab", "Previous workstream tab"),
            ("0", "All applications"),
            ("1-3", "Jump to a workstream"),
        ],
    ),
    (
        "General",
        &[("?", "Toggle this help"), ("Esc", "Close overlay / quit"), ("q", "Quit")],
    ),
];

/// State for the help view
#[derive(Debug, Default, Clone)]
pub struct HelpViewState {
    /// Current scroll offset (in lines)
    pub scroll_offset: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Visible height
    pub visible_height: usize,
}

impl HelpViewState {
    /// Create a new help view state sized for the help text
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: HelpWidget::line_count(),
            visible_height: 0,
        }
    }

    /// Scroll up by n lines
    pub fn scroll_up(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
    }

    /// Scroll down by n lines
    pub fn scroll_down(&mut self, n: usize) {
        let max_offset = self.total_lines.saturating_sub(self.visible_height);
        self.scroll_offset = (self.scroll_offset + n).min(max_offset);
    }

    /// Page up
    pub fn page_up(&mut self) {
        self.scroll_up(self.visible_height.saturating_sub(2));
    }

    /// Page down
    pub fn page_down(&mut self) {
        self.scroll_down(self.visible_height.saturating_sub(2));
    }

    /// Record the inner height of the help area
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
        let max_offset = self.total_lines.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

/// Help view widget
pub struct HelpWidget<'a> {
    state: &'a HelpViewState,
}

impl<'a> HelpWidget<'a> {
    /// Create a new help widget
    pub fn new(state: &'a HelpViewState) -> Self {
        Self { state }
    }

    /// Number of lines in the help text
    pub fn line_count() -> usize {
        Self::build_lines().len()
    }

    /// Build help text lines
    fn build_lines() -> Vec<Line<'static>> {
        // Header
        let mut lines = vec![
            Line::from(vec![Span::styled(
                "  migration-dash Help  ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(Span::styled(
                "Migration progress by workstream, application and phase.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        // Build sections
        for (section_name, bindings) in HELP_SECTIONS {
            // Section header
            lines.push(Line::from(Span::styled(
                format!("─── {} ───", section_name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));

            // Bindings
            for (key, description) in *bindings {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {:12}", key), Style::default().fg(Color::Green)),
                    Span::raw(*description),
                ]));
            }
            lines.push(Line::from(""));
        }

        // Footer
        lines.push(Line::from(Span::styled(
            "─────────────────────────────",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("Esc", Style::default().fg(Color::Green)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Green)),
            Span::styled(" to close help", Style::default().fg(Color::DarkGray)),
        ]));

        lines
    }
}

impl Widget for HelpWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Clear the area
        Clear.render(area, buf);

        // Build the help content
        let lines = Self::build_lines();
        let lines_len = lines.len();

        // Create block
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Help (?) ");

        let inner = block.inner(area);
        block.render(area, buf);

        // Skip lines based on scroll offset
        let visible_lines: Vec<Line> = lines
            .into_iter()
            .skip(self.state.scroll_offset)
            .take(inner.height as usize)
            .collect();

        // Render text
        let paragraph = Paragraph::new(visible_lines);
        paragraph.render(inner, buf);

        // Render scrollbar if content exceeds view
        if lines_len > inner.height as usize {
            let mut scrollbar_state =
                ScrollbarState::new(lines_len).position(self.state.scroll_offset);

            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("▲"))
                .end_symbol(Some("▼"));

            let scrollbar_area = Rect {
                x: area.x + area.width.saturating_sub(1),
                y: area.y + 1,
                width: 1,
                height: area.height.saturating_sub(2),
            };

            scrollbar.render(scrollbar_area, buf, &mut scrollbar_state);
        }
    }
}
