//! TUI Views module
//!
//! Frame chrome (header, step indicator, footer, status bar) around the
//! mounted step view, plus overlays.

pub mod status_bar;
pub mod step_indicator;

use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_area, AppLayout};
use super::steps::{self, StepView};
use super::widgets::notification::NotificationWidget;

pub const PRODUCT_NAME: &str = "Secure Verify";

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_header(frame, layout.header);
    step_indicator::render(frame, layout.indicator, app.wizard.step());

    match &app.view {
        StepView::PersonalInfo(view) => {
            steps::personal_info::render(frame, layout.body, view, app.wizard.form());
        }
        StepView::PhoneVerification(view) => {
            steps::phone_verification::render(frame, layout.body, view);
        }
        StepView::Success(view) => {
            steps::success::render(frame, layout.body, view);
        }
    }

    render_footer(frame, layout.footer);
    status_bar::render(frame, app, layout.status_bar);

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(NotificationWidget::new(notification), toast_area(frame.area()));
    }

    if app.active_dialog == ActiveDialog::Help {
        dialogs::help::render(frame, app.wizard.step());
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            PRODUCT_NAME,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  identity verification", Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(title, area);
}

/// Copyright line for the current year
pub fn footer_text(year: i32) -> String {
    format!("© {} {}", year, PRODUCT_NAME)
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(Span::styled(
        footer_text(year),
        Style::default().fg(Color::DarkGray),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}
