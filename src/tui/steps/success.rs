//! Success step
//!
//! Read-only summary of the verified identity. The phone number is shown
//! masked.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{mask_phone, FormData, FormField};
use crate::wizard::WizardController;

/// One label/value line of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Build the summary shown on the success screen
pub fn summary_rows(form: &FormData) -> Vec<SummaryRow> {
    let gender = form
        .gender
        .map(|g| g.label().to_string())
        .unwrap_or_else(|| "-".to_string());

    vec![
        SummaryRow {
            label: FormField::FullName.label(),
            value: form.full_name.clone(),
        },
        SummaryRow {
            label: FormField::Gender.label(),
            value: gender,
        },
        SummaryRow {
            label: FormField::IdType.label(),
            value: form.id_type.label().to_string(),
        },
        SummaryRow {
            label: FormField::IdNumber.label(),
            value: form.id_number.clone(),
        },
        SummaryRow {
            label: FormField::PhoneNumber.label(),
            value: mask_phone(&form.phone_number),
        },
    ]
}

/// View-local state of the success step
#[derive(Debug, Clone)]
pub struct SuccessView {
    pub rows: Vec<SummaryRow>,
}

impl SuccessView {
    pub fn new(form: &FormData) -> Self {
        Self {
            rows: summary_rows(form),
        }
    }

    /// Enter or `r` starts a new verification
    pub fn handle_key(&mut self, key: KeyEvent, wizard: &mut WizardController) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                wizard.restart();
                true
            }
            _ => false,
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &SuccessView) {
    let block = Block::default()
        .title(" Verification complete ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(view.rows.len() as u16 + 1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "✓ Your identity has been verified.",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))),
        chunks[0],
    );

    let lines: Vec<Line> = view
        .rows
        .iter()
        .map(|row| {
            Line::from(vec![
                Span::styled(
                    format!("{:>12}: ", row.label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(row.value.clone(), Style::default().fg(Color::White)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[1]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Verify another  "),
        Span::styled("[q]", Style::default().fg(Color::Yellow)),
        Span::raw(" Quit"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormPatch, Gender, IdType, WizardStep};
    use crossterm::event::KeyModifiers;

    fn completed_form() -> FormData {
        let mut form = FormData::new();
        form.merge(
            FormPatch::new()
                .full_name("Li Wei")
                .id_type(IdType::Passport)
                .id_number("E12345678")
                .birthday("1990-01-01")
                .gender(Gender::Female)
                .phone_number("13812345678")
                .verification_code("123456"),
        );
        form
    }

    #[test]
    fn test_summary_masks_phone() {
        let rows = summary_rows(&completed_form());
        let phone = rows.iter().find(|r| r.label == "Phone").unwrap();
        assert_eq!(phone.value, "138****5678");
        assert!(!rows.iter().any(|r| r.value.contains("13812345678")));
    }

    #[test]
    fn test_summary_uses_labels() {
        let rows = summary_rows(&completed_form());
        let values: Vec<&str> = rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["Li Wei", "Female", "passport", "E12345678", "138****5678"]
        );
    }

    #[test]
    fn test_summary_without_gender() {
        let rows = summary_rows(&FormData::new());
        let gender = rows.iter().find(|r| r.label == "Gender").unwrap();
        assert_eq!(gender.value, "-");
    }

    #[test]
    fn test_enter_restarts() {
        let mut wizard = WizardController::new();
        wizard.merge_form_data(FormPatch::new().full_name("Li Wei"));
        wizard.advance().unwrap();
        wizard.advance().unwrap();
        let old_session = wizard.session_id();

        let mut view = SuccessView::new(wizard.form());
        assert!(!view.handle_key(
            KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE),
            &mut wizard
        ));
        assert!(view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), &mut wizard));
        assert_eq!(wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(wizard.form(), &FormData::new());
        assert_ne!(wizard.session_id(), old_session);
    }
}
