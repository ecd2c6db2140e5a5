//! Status bar view
//!
//! Shows key hints for the current step and the session id

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};

/// Key hints for a context, e.g. `Tab:Next field  Enter:Next step`
pub fn hint_text(context: KeyContext) -> String {
    get_keybindings(context)
        .into_iter()
        .filter(|kb| kb.hint)
        .map(|kb| format!("{}:{}", format_keybinding(kb), kb.description))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let context = if app.has_dialog() {
        KeyContext::Help
    } else {
        KeyContext::for_step(app.wizard.step())
    };

    let session = format!(" {} ", app.wizard.session_id());
    let hints = format!(" {} ", hint_text(context));

    let used = session.chars().count() + hints.chars().count();
    let padding = " ".repeat((area.width as usize).saturating_sub(used).max(1));

    let line = Line::from(vec![
        Span::styled(hints, Style::default().fg(Color::White)),
        Span::raw(padding),
        Span::styled(session, Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}
