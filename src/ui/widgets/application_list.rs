//! Collapsible application tree: applications, their phases and details.

use crate::domain::{aggregate, Application, Component, DisclosureState, NodeId, Phase};
use crate::ui::widgets::progress_bar::{bar_spans, count_label};
use crate::ui::widgets::status_badge::{environment_pills, status_pill};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

const APP_BAR_WIDTH: usize = 16;
const PHASE_BAR_WIDTH: usize = 10;

/// Colour for a technology label; unknown technologies use the default
pub fn tech_color(tech: &str) -> Color {
    match tech {
        "React" => Color::Blue,
        "TypeScript" => Color::LightBlue,
        ".NET Core" => Color::Magenta,
        "Java Spring" => Color::Green,
        "Python" => Color::Yellow,
        "SQL Server" => Color::Red,
        "PostgreSQL" => Color::LightMagenta,
        "Angular" => Color::LightRed,
        _ => Color::Gray,
    }
}

fn chevron(expanded: bool) -> &'static str {
    if expanded {
        "▾"
    } else {
        "▸"
    }
}

/// A rendered block in the list; `node` is set for toggleable rows
struct Entry<'a> {
    node: Option<NodeId>,
    item: ListItem<'a>,
}

/// Widget for the application tree
pub struct ApplicationListWidget<'a> {
    applications: &'a [&'a Application],
    disclosure: &'a DisclosureState,
    selected: Option<&'a NodeId>,
    title: String,
}

impl<'a> ApplicationListWidget<'a> {
    /// Create a new application list widget
    pub fn new(
        applications: &'a [&'a Application],
        disclosure: &'a DisclosureState,
        selected: Option<&'a NodeId>,
    ) -> Self {
        Self {
            applications,
            disclosure,
            selected,
            title: " Applications ".to_string(),
        }
    }

    /// Set the block title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    fn application_header(&self, app: &Application, expanded: bool) -> Vec<Line<'static>> {
        let progress = aggregate(&app.environments);

        let mut detail = vec![Span::raw("    ")];
        detail.extend(bar_spans(progress, APP_BAR_WIDTH));
        detail.push(Span::styled(
            format!("  {}", count_label(progress, Some("envs"))),
            Style::default().fg(Color::DarkGray),
        ));
        detail.push(Span::styled(
            format!("  Updated {}", app.last_updated),
            Style::default().fg(Color::DarkGray),
        ));

        vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", chevron(expanded)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    app.name.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}  ", app.workstream),
                    Style::default().fg(Color::DarkGray),
                ),
                status_pill(&app.current_stage),
            ]),
            Line::from(detail),
        ]
    }

    fn phase_lines(&self, phase: &Phase, expanded: bool) -> Vec<Line<'static>> {
        let progress = aggregate(&phase.environments);

        let mut header = vec![
            Span::styled(
                format!("    {} ", chevron(expanded)),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                phase.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        if let Some(ref description) = phase.description {
            header.push(Span::styled(
                format!(" - {}", description),
                Style::default().fg(Color::DarkGray),
            ));
        }
        header.push(Span::raw("  "));
        header.extend(bar_spans(progress, PHASE_BAR_WIDTH));
        header.push(Span::styled(
            format!("  {}", count_label(progress, None)),
            Style::default().fg(Color::DarkGray),
        ));

        let mut lines = vec![Line::from(header)];
        if expanded {
            if !phase.environments.is_empty() {
                let mut envs = vec![Span::raw("        ")];
                envs.extend(environment_pills(&phase.environments));
                lines.push(Line::from(envs));
            }
            for component in &phase.components {
                lines.extend(component_lines(component, "        "));
            }
        }
        lines
    }

    fn detail_lines(&self, app: &Application) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if !app.components.is_empty() {
            lines.push(section_heading("Components"));
            for component in &app.components {
                lines.extend(component_lines(component, "      "));
            }
        }

        lines.push(section_heading("Overall Environment Progress"));
        let mut envs = vec![Span::raw("      ")];
        if app.environments.is_empty() {
            envs.push(Span::styled(
                "No environments",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            envs.extend(environment_pills(&app.environments));
        }
        lines.push(Line::from(envs));

        if let Some(ref milestone) = app.next_milestone {
            lines.push(Line::from(Span::styled(
                format!("    Next: {}", milestone),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        lines.push(Line::from(""));
        lines
    }

    fn build_entries(&self) -> Vec<Entry<'static>> {
        let mut entries = Vec::new();

        for app in self.applications {
            let app_node = NodeId::application(&app.id);
            let expanded = self.disclosure.is_expanded(&app_node);

            entries.push(Entry {
                item: ListItem::new(self.application_header(app, expanded)),
                node: Some(app_node),
            });

            if !expanded {
                continue;
            }

            if !app.phases.is_empty() {
                entries.push(Entry {
                    node: None,
                    item: ListItem::new(section_heading("Phases")),
                });
                for phase in &app.phases {
                    let phase_node = NodeId::phase(&app.id, &phase.id);
                    let phase_expanded = self.disclosure.is_expanded(&phase_node);
                    entries.push(Entry {
                        item: ListItem::new(self.phase_lines(phase, phase_expanded)),
                        node: Some(phase_node),
                    });
                }
            }

            entries.push(Entry {
                node: None,
                item: ListItem::new(self.detail_lines(app)),
            });
        }

        entries
    }
}

fn section_heading(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("    {}", title),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Name, status, tech stack, endpoints and links for one component
fn component_lines(component: &Component, indent: &str) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::raw(format!("{}■ ", indent)),
        Span::styled(
            component.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})  ", component.kind.label()),
            Style::default().fg(Color::DarkGray),
        ),
        status_pill(&component.status),
    ])];

    if !component.tech_stack.is_empty() {
        let mut tech = vec![Span::raw(format!("{}  ", indent))];
        for (idx, label) in component.tech_stack.iter().enumerate() {
            if idx > 0 {
                tech.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            tech.push(Span::styled(label.clone(), Style::default().fg(tech_color(label))));
        }
        lines.push(Line::from(tech));
    }

    for endpoint in &component.endpoints {
        lines.push(link_line(indent, "Endpoint", endpoint));
    }
    for (label, url) in component.links() {
        lines.push(link_line(indent, label, url));
    }

    lines
}

fn link_line(indent: &str, label: &str, url: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{}  ", indent)),
        Span::styled(
            format!("{:<9}", label),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            url.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ])
}

impl Widget for ApplicationListWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let entries = self.build_entries();

        let selected_index = self.selected.and_then(|selected| {
            entries
                .iter()
                .position(|e| e.node.as_ref() == Some(selected))
        });

        let items: Vec<ListItem> = entries.into_iter().map(|e| e.item).collect();

        let mut state = ListState::default();
        state.select(selected_index);

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .highlight_style(Style::default().bg(Color::Rgb(30, 40, 60)))
            .highlight_symbol("> ");

        // Use StatefulWidget render
        StatefulWidget::render(list, area, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(apps: &[&Application], disclosure: &DisclosureState, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, height)).unwrap();
        terminal
            .draw(|f| {
                let widget = ApplicationListWidget::new(apps, disclosure, None);
                f.render_widget(widget, f.area());
            })
            .unwrap();

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

    fn claims() -> Application {
        sample::applications()
            .into_iter()
            .find(|a| a.id == "ba-2")
            .unwrap()
    }

    #[test]
    fn test_collapsed_application_shows_summary_only() {
        let app = claims();
        let apps = vec![&app];
        let text = render(&apps, &DisclosureState::new(), 10);

        assert!(text.contains("▸ Claims Management"));
        assert!(text.contains("[◐ UAT]"));
        assert!(text.contains("3/5 envs"));
        assert!(text.contains("60%"));
        assert!(!text.contains("Phase 1"));
        assert!(!text.contains("Claims API"));
    }

    #[test]
    fn test_expanded_application_shows_phases_and_components() {
        let app = claims();
        let apps = vec![&app];
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&NodeId::application("ba-2"));
        let text = render(&apps, &disclosure, 30);

        assert!(text.contains("▾ Claims Management"));
        assert!(text.contains("Phase 1 - Core claims intake"));
        assert!(text.contains("3/3"));
        assert!(text.contains("Claims API (Web API)"));
        assert!(text.contains("Java Spring"));
        assert!(text.contains("https://github.com/example/claims-api"));
        assert!(text.contains("Next: Production deployment - Aug 25"));
        // Phase contents stay hidden until the phase itself is expanded
        assert!(!text.contains("Intake Service"));
    }

    #[test]
    fn test_expanded_phase_shows_its_components() {
        let app = claims();
        let apps = vec![&app];
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&NodeId::application("ba-2"));
        disclosure.toggle(&NodeId::phase("ba-2", "cm-phase-1"));
        let text = render(&apps, &disclosure, 40);

        assert!(text.contains("Intake Service"));
        assert!(!text.contains("Workbench UI"));
    }

    #[test]
    fn test_entries_mark_toggleable_nodes() {
        let app = claims();
        let apps = vec![&app];
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&NodeId::application("ba-2"));
        let widget = ApplicationListWidget::new(&apps, &disclosure, None);

        let nodes: Vec<Option<NodeId>> = widget.build_entries().into_iter().map(|e| e.node).collect();
        assert_eq!(
            nodes,
            vec![
                Some(NodeId::application("ba-2")),
                None,
                Some(NodeId::phase("ba-2", "cm-phase-1")),
                Some(NodeId::phase("ba-2", "cm-phase-2")),
                None,
            ]
        );
    }

    #[test]
    fn test_application_without_environments() {
        let mut app = claims();
        app.environments.clear();
        let apps = vec![&app];
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&NodeId::application("ba-2"));
        let text = render(&apps, &disclosure, 30);

        assert!(text.contains("0/0 envs"));
        assert!(text.contains("No environments"));
    }

    #[test]
    fn test_tech_color_fallback() {
        assert_eq!(tech_color("React"), Color::Blue);
        assert_eq!(tech_color("COBOL"), Color::Gray);
    }
}
