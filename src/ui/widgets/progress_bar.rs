//! Inline percentage bars.

use crate::domain::Progress;
use ratatui::prelude::*;

const FILLED: &str = "█";
const EMPTY: &str = "░";

/// Number of filled cells for a bar of `width` cells, never more than `width`
pub fn filled_cells(progress: Progress, width: usize) -> usize {
    ((width * usize::from(progress.percentage) + 50) / 100).min(width)
}

/// Bar spans followed by the percentage, e.g. `█████░░░░░  50%`
pub fn bar_spans(progress: Progress, width: usize) -> Vec<Span<'static>> {
    let filled = filled_cells(progress, width);
    let color = if progress.percentage == 100 {
        Color::Green
    } else {
        Color::Cyan
    };

    vec![
        Span::styled(FILLED.repeat(filled), Style::default().fg(color)),
        Span::styled(
            EMPTY.repeat(width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {:>3}%", progress.percentage),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]
}

/// `completed/total` label with an optional unit
pub fn count_label(progress: Progress, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{}/{} {}", progress.completed, progress.total, unit),
        None => format!("{}/{}", progress.completed, progress.total),
    }
}
