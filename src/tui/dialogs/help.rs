//! Help dialog
//!
//! Shows the keyboard shortcuts for the current step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::WizardStep;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext, KEYBINDINGS};
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, step: WizardStep) {
    let help_lines = get_help_lines(step);
    let height = help_lines.len() as u16 + 2;
    let area = centered_rect_fixed(60, height, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for the given step
pub fn get_help_lines(step: WizardStep) -> Vec<Line<'static>> {
    let context = KeyContext::for_step(step);
    let mut lines = vec![heading(KeyContext::Global.title()), Line::from("")];

    lines.extend(
        KEYBINDINGS
            .iter()
            .filter(|kb| kb.context == KeyContext::Global)
            .map(|kb| key_line(&format_keybinding(kb), kb.description)),
    );
    lines.push(Line::from(""));
    lines.push(heading(context.title()));
    lines.push(Line::from(""));
    lines.extend(
        get_keybindings(context)
            .into_iter()
            .filter(|kb| kb.context == context)
            .map(|kb| key_line(&format_keybinding(kb), kb.description)),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press Esc, q or F1 to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_help_is_contextual() {
        let phone = text(&get_help_lines(WizardStep::PhoneVerification));
        assert!(phone.contains("Back to personal info"));
        assert!(phone.contains("Ctrl+C"));
        assert!(!phone.contains("Verify another identity"));

        let success = text(&get_help_lines(WizardStep::Success));
        assert!(success.contains("Verify another identity"));
    }
}
