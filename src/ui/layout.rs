//! Main layout rendering for the TUI.

use crate::app::{App, AppView};
use crate::domain::WorkstreamFilter;
use crate::ui::widgets::application_list::ApplicationListWidget;
use crate::ui::widgets::help::HelpWidget;
use crate::ui::widgets::stats::{StatCardsWidget, WorkstreamProgressWidget};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

/// Draw the main application UI
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    draw_dashboard(frame, app, area);

    if app.view == AppView::Help {
        draw_help(frame, app, area);
    }

    // Draw error message overlay if present
    if let Some(ref error) = app.error_message {
        draw_error_overlay(frame, error, area);
    }
}

/// Area the help overlay occupies within `area`
pub fn help_area(area: Rect) -> Rect {
    centered_rect(70, 80, area)
}

/// Draw stats, workstream progress, tabs and the application tree
fn draw_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Stat cards
            Constraint::Length(5), // Workstream progress
            Constraint::Length(3), // Workstream tabs
            Constraint::Min(0),    // Application tree
            Constraint::Length(3), // Footer
        ])
        .split(area);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            app.config.ui.title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({})", app.source_label),
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    frame.render_widget(StatCardsWidget::new(app.totals), chunks[1]);
    frame.render_widget(WorkstreamProgressWidget::new(&app.workstream_stats), chunks[2]);

    draw_tabs(frame, app, chunks[3]);

    // Main content - application tree
    let applications = app.filtered_applications();
    if applications.is_empty() {
        let empty_msg = Paragraph::new("No applications to show.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Applications "))
            .alignment(Alignment::Center);
        frame.render_widget(empty_msg, chunks[4]);
    } else {
        let selected = app.selected_node();
        let list = ApplicationListWidget::new(&applications, &app.disclosure, selected.as_ref())
            .title(format!(
                " {} ({}) ",
                app.filter.label(),
                applications.len()
            ));
        frame.render_widget(list, chunks[4]);
    }

    // Footer with keybindings
    let footer_text =
        " j/k: Navigate | Enter: Expand/Collapse | Tab: Workstream | c: Collapse all | q: Quit | ?: Help ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, chunks[5]);
}

/// Draw the workstream filter tabs
fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = WorkstreamFilter::choices()
        .iter()
        .map(|f| format!("[{}] {}", f.index(), f.label()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.filter.index())
        .block(Block::default().borders(Borders::ALL).title(" Workstreams "))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, area);
}

/// Draw help view showing all keybindings
fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_widget = HelpWidget::new(&app.help_view_state);
    frame.render_widget(help_widget, help_area(area));
}

/// Draw error overlay
fn draw_error_overlay(frame: &mut Frame, error: &str, area: Rect) {
    // Create a centered popup area
    let popup_area = centered_rect(60, 20, area);

    // Clear the area
    frame.render_widget(Clear, popup_area);

    let error_widget = Paragraph::new(error)
        .style(Style::default().fg(Color::Red))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Error"),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(error_widget, popup_area);
}

/// Create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::domain::sample;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app() -> App {
        App::new(DashboardConfig::default(), "sample data", sample::applications())
    }

    #[test]
    fn test_dashboard_sections() {
        let text = render(&app());
        assert!(text.contains("Migration Dashboard"));
        assert!(text.contains("(sample data)"));
        assert!(text.contains("Total Applications"));
        assert!(text.contains("Workstream Progress Overview"));
        assert!(text.contains("[0] All Applications"));
        assert!(text.contains("[3] Research & Modelling"));
        assert!(text.contains("All Applications (24)"));
        assert!(text.contains("Claims Management"));
    }

    #[test]
    fn test_filtered_title() {
        let mut app = app();
        app.set_filter(WorkstreamFilter::from_index(3).unwrap());
        let text = render(&app);
        assert!(text.contains("Research & Modelling (2)"));
        assert!(!text.contains("Claims Management"));
    }

    #[test]
    fn test_empty_dataset_message() {
        let app = App::new(DashboardConfig::default(), "empty.json", Vec::new());
        let text = render(&app);
        assert!(text.contains("No applications to show."));
        assert!(text.contains("0% complete"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.open_help();
        let text = render(&app);
        assert!(text.contains("migration-dash Help"));
        assert!(text.contains("Application Tree"));
    }

    #[test]
    fn test_error_overlay() {
        let mut app = app();
        app.error_message = Some("Dataset not found".to_string());
        let text = render(&app);
        assert!(text.contains("Error"));
        assert!(text.contains("Dataset not found"));
    }

    #[test]
    fn test_help_area_is_centered() {
        let area = help_area(Rect::new(0, 0, 100, 50));
        assert_eq!(area.width, 70);
        assert_eq!(area.height, 40);
        assert_eq!(area.x, 15);
    }
}
