//! Three-step progress indicator

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::WizardStep;

/// Build the indicator line: completed steps are checked, the current one
/// highlighted
pub fn indicator_line(current: WizardStep) -> Line<'static> {
    let mut spans = Vec::new();

    for (i, step) in WizardStep::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ──── ", Style::default().fg(Color::DarkGray)));
        }

        let (marker, style) = if step < current {
            ("✓".to_string(), Style::default().fg(Color::Green))
        } else if step == current {
            (
                step.number().to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (step.number().to_string(), Style::default().fg(Color::DarkGray))
        };

        spans.push(Span::styled(format!("({}) {}", marker, step.title()), style));
    }

    Line::from(spans)
}

pub fn render(frame: &mut Frame, area: Rect, current: WizardStep) {
    let paragraph = Paragraph::new(indicator_line(current)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
