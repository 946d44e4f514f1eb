//! Status pills coloured by severity.

use crate::domain::{Environment, Severity, Status};
use ratatui::prelude::*;

/// Colour for a severity
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Done => Color::Green,
        Severity::Active => Color::Blue,
        Severity::Pending => Color::Yellow,
        Severity::Failed => Color::Red,
        Severity::Unknown => Color::DarkGray,
    }
}

/// Severity indicator character
pub fn severity_indicator(severity: Severity) -> &'static str {
    match severity {
        Severity::Done => "✓",
        Severity::Active => "▶",
        Severity::Pending => "◐",
        Severity::Failed => "✗",
        Severity::Unknown => "○",
    }
}

/// A labelled pill for a status, e.g. `[✓ Completed]`
pub fn status_pill(status: &Status) -> Span<'static> {
    let severity = status.severity();
    Span::styled(
        format!("[{} {}]", severity_indicator(severity), status.label()),
        Style::default()
            .fg(severity_color(severity))
            .add_modifier(Modifier::BOLD),
    )
}

/// One line of `NAME [pill]` pairs for a list of environments
pub fn environment_pills(environments: &[Environment]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(environments.len() * 3);
    for (idx, env) in environments.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            format!("{} ", env.name),
            Style::default().fg(Color::Gray),
        ));
        spans.push(status_pill(&env.status));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_text_and_color() {
        let pill = status_pill(&Status::Completed);
        assert_eq!(pill.content, "[✓ Completed]");
        assert_eq!(pill.style.fg, Some(Color::Green));

        let unknown = status_pill(&Status::Other("Paused".into()));
        assert_eq!(unknown.content, "[○ Paused]");
        assert_eq!(unknown.style.fg, Some(Color::DarkGray));
    }

    #[test]
    fn test_not_started_uses_neutral_style() {
        let pill = status_pill(&Status::NotStarted);
        assert_eq!(pill.style.fg, Some(severity_color(Severity::Unknown)));
    }

    #[test]
    fn test_environment_pills() {
        let envs = vec![
            Environment::new("DEV", Status::Completed),
            Environment::new("QA", Status::Failed),
        ];
        let text: String = environment_pills(&envs)
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(text, "DEV [✓ Completed]  QA [✗ Failed]");
    }

    #[test]
    fn test_environment_pills_empty() {
        assert!(environment_pills(&[]).is_empty());
    }
}
