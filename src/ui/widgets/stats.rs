//! Headline stat cards and the workstream progress panel.

use crate::domain::{OverviewTotals, WorkstreamStats};
use crate::ui::widgets::progress_bar::bar_spans;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Four stat cards: total, completed, in progress, not started
pub struct StatCardsWidget {
    totals: OverviewTotals,
}

impl StatCardsWidget {
    pub fn new(totals: OverviewTotals) -> Self {
        Self { totals }
    }

    /// (title, value, subtitle, subtitle colour) for each card
    fn cards(&self) -> [(&'static str, usize, String, Color); 4] {
        let completion = self.totals.completion();
        [
            (
                "Total Applications",
                self.totals.total_apps,
                "Across all workstreams".to_string(),
                Color::DarkGray,
            ),
            (
                "Completed",
                self.totals.completed_apps,
                format!("{}% complete", completion.percentage),
                Color::Green,
            ),
            (
                "In Progress",
                self.totals.in_progress_apps,
                "Active migrations".to_string(),
                Color::DarkGray,
            ),
            (
                "Not Started",
                self.totals.not_started_apps,
                "Pending migration".to_string(),
                Color::Red,
            ),
        ]
    }
}

impl Widget for StatCardsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(area);

        for ((title, value, subtitle, color), chunk) in self.cards().into_iter().zip(chunks.iter()) {
            let lines = vec![
                Line::from(Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(subtitle, Style::default().fg(color))),
            ];
            Paragraph::new(lines)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray))
                        .title(format!(" {} ", title)),
                )
                .render(*chunk, buf);
        }
    }
}

/// One column per workstream with a bar and counts
pub struct WorkstreamProgressWidget<'a> {
    stats: &'a [WorkstreamStats],
}

impl<'a> WorkstreamProgressWidget<'a> {
    pub fn new(stats: &'a [WorkstreamStats]) -> Self {
        Self { stats }
    }

    fn column_lines(stats: &WorkstreamStats, width: usize) -> Vec<Line<'static>> {
        // Leave room for the " 100%" suffix
        let bar_width = width.saturating_sub(6).max(1);
        vec![
            Line::from(Span::styled(
                stats.name().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(bar_spans(stats.progress(), bar_width)),
            Line::from(Span::styled(
                format!(
                    "{} completed, {} in progress, {} not started",
                    stats.completed_apps, stats.in_progress_apps, stats.not_started_apps
                ),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    }
}

impl Widget for WorkstreamProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Workstream Progress Overview ");
        let inner = block.inner(area);
        block.render(area, buf);

        if self.stats.is_empty() {
            return;
        }

        let count = self.stats.len() as u32;
        let constraints: Vec<Constraint> = (0..count).map(|_| Constraint::Ratio(1, count)).collect();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(inner);

        for (stats, column) in self.stats.iter().zip(columns.iter()) {
            let padded = Rect {
                x: column.x + 1,
                width: column.width.saturating_sub(2),
                ..*column
            };
            Paragraph::new(Self::column_lines(stats, padded.width as usize)).render(padded, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{sample, summarize};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_stat_cards_render_totals() {
        let stats = summarize(&sample::applications());
        let totals = OverviewTotals::from_stats(&stats);

        let mut terminal = Terminal::new(TestBackend::new(120, 4)).unwrap();
        terminal
            .draw(|f| f.render_widget(StatCardsWidget::new(totals), f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Total Applications"));
        assert!(text.contains("24"));
        assert!(text.contains("21% complete"));
        assert!(text.contains("Pending migration"));
    }

    #[test]
    fn test_stat_cards_empty_dataset() {
        let totals = OverviewTotals::default();
        let cards = StatCardsWidget::new(totals).cards();
        assert_eq!(cards[1].2, "0% complete");
    }

    #[test]
    fn test_workstream_panel_renders_each_workstream() {
        let stats = summarize(&sample::applications());

        let mut terminal = Terminal::new(TestBackend::new(150, 5)).unwrap();
        terminal
            .draw(|f| f.render_widget(WorkstreamProgressWidget::new(&stats), f.area()))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());

        assert!(text.contains("Business Apps"));
        assert!(text.contains("Data & Analytics"));
        assert!(text.contains("Research & Modelling"));
        assert!(text.contains("4 completed, 11 in progress, 0 not started"));
        assert!(text.contains("50%"));
    }
}
