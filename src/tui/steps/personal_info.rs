//! Personal information step
//!
//! Collects name, ID document, birthday and gender. Inputs are controlled:
//! every edit is merged into the wizard's form right away, and the step only
//! keeps its own cursor, focus and error map.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use super::{edit_input, render_error, InputEdit};
use crate::models::{FormData, FormField, FormPatch, Gender, IdType};
use crate::tui::widgets::input::TextInput;
use crate::wizard::validator::{validate_personal_info, FieldErrors};
use crate::wizard::WizardController;

/// Which control is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonalField {
    #[default]
    FullName,
    IdType,
    IdNumber,
    Birthday,
    Gender,
}

impl PersonalField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::FullName => Self::IdType,
            Self::IdType => Self::IdNumber,
            Self::IdNumber => Self::Birthday,
            Self::Birthday => Self::Gender,
            Self::Gender => Self::FullName,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::FullName => Self::Gender,
            Self::IdType => Self::FullName,
            Self::IdNumber => Self::IdType,
            Self::Birthday => Self::IdNumber,
            Self::Gender => Self::Birthday,
        }
    }

    pub fn form_field(self) -> FormField {
        match self {
            Self::FullName => FormField::FullName,
            Self::IdType => FormField::IdType,
            Self::IdNumber => FormField::IdNumber,
            Self::Birthday => FormField::Birthday,
            Self::Gender => FormField::Gender,
        }
    }
}

/// View-local state of the personal info step
#[derive(Debug, Clone)]
pub struct PersonalInfoView {
    pub focused_field: PersonalField,
    pub name_input: TextInput,
    pub id_number_input: TextInput,
    pub birthday_input: TextInput,
    /// Errors from the last submit attempt
    pub errors: FieldErrors,
}

impl PersonalInfoView {
    /// Mount the step, seeding inputs from the current form
    pub fn new(form: &FormData) -> Self {
        let mut view = Self {
            focused_field: PersonalField::default(),
            name_input: TextInput::new()
                .label(FormField::FullName.label())
                .placeholder("Your legal name")
                .content(&form.full_name),
            id_number_input: TextInput::new()
                .label(FormField::IdNumber.label())
                .placeholder("Document number")
                .content(&form.id_number),
            birthday_input: TextInput::new()
                .label(FormField::Birthday.label())
                .placeholder("YYYY-MM-DD")
                .max_len(10)
                .content(&form.birthday),
            errors: FieldErrors::new(),
        };
        view.update_focus();
        view
    }

    pub fn next_field(&mut self) {
        self.set_focus(self.focused_field.next());
    }

    pub fn prev_field(&mut self) {
        self.set_focus(self.focused_field.prev());
    }

    pub fn set_focus(&mut self, field: PersonalField) {
        self.focused_field = field;
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == PersonalField::FullName;
        self.id_number_input.focused = self.focused_field == PersonalField::IdNumber;
        self.birthday_input.focused = self.focused_field == PersonalField::Birthday;
    }

    /// The focused text input, if the focused control is one
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            PersonalField::FullName => Some(&mut self.name_input),
            PersonalField::IdNumber => Some(&mut self.id_number_input),
            PersonalField::Birthday => Some(&mut self.birthday_input),
            PersonalField::IdType | PersonalField::Gender => None,
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Validate the form and advance when it is complete
    ///
    /// Returns `true` if the wizard moved on.
    pub fn submit(&mut self, wizard: &mut WizardController) -> bool {
        self.errors = validate_personal_info(wizard.form());
        if !self.errors.is_empty() {
            debug!(fields = ?self.errors.keys().collect::<Vec<_>>(), "Personal info incomplete");
            if let Some(first) = self.first_invalid_field() {
                self.set_focus(first);
            }
            return false;
        }
        wizard.advance().is_ok()
    }

    fn first_invalid_field(&self) -> Option<PersonalField> {
        let mut field = PersonalField::FullName;
        loop {
            if self.errors.contains_key(&field.form_field()) {
                return Some(field);
            }
            field = field.next();
            if field == PersonalField::FullName {
                return None;
            }
        }
    }

    /// Handle a key press; returns `true` if it was consumed
    pub fn handle_key(&mut self, key: KeyEvent, wizard: &mut WizardController) -> bool {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next_field();
                return true;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.prev_field();
                return true;
            }
            KeyCode::Enter => {
                self.submit(wizard);
                return true;
            }
            _ => {}
        }

        match self.focused_field {
            PersonalField::IdType => handle_id_type_key(key, wizard),
            PersonalField::Gender => handle_gender_key(key, wizard),
            field => {
                let form_field = field.form_field();
                let Some(input) = self.focused_input() else {
                    return false;
                };
                match edit_input(input, key) {
                    InputEdit::Changed => {
                        let value = input.value().to_string();
                        wizard.merge_form_data(FormPatch::text(form_field, value));
                        true
                    }
                    InputEdit::Moved => true,
                    InputEdit::Ignored => false,
                }
            }
        }
    }
}

fn handle_id_type_key(key: KeyEvent, wizard: &mut WizardController) -> bool {
    let current = wizard.form().id_type;
    let next = match key.code {
        KeyCode::Left => current.cycle_prev(),
        KeyCode::Right | KeyCode::Char(' ') => current.cycle_next(),
        _ => return false,
    };
    wizard.merge_form_data(FormPatch::new().id_type(next));
    true
}

fn handle_gender_key(key: KeyEvent, wizard: &mut WizardController) -> bool {
    let current = wizard.form().gender;
    let chosen = match key.code {
        KeyCode::Char('m') | KeyCode::Char('M') => Gender::Male,
        KeyCode::Char('f') | KeyCode::Char('F') => Gender::Female,
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => match current {
            Some(gender) => gender.toggle(),
            None => Gender::Male,
        },
        _ => return false,
    };
    wizard.merge_form_data(FormPatch::new().gender(chosen));
    true
}

/// Render the personal info step
pub fn render(frame: &mut Frame, area: Rect, view: &PersonalInfoView, form: &FormData) {
    let block = Block::default()
        .title(" Personal information ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Full name
            Constraint::Length(1),
            Constraint::Length(1), // ID type
            Constraint::Length(1),
            Constraint::Length(1), // ID number
            Constraint::Length(1),
            Constraint::Length(1), // Birthday
            Constraint::Length(1),
            Constraint::Length(1), // Gender
            Constraint::Length(1),
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let mut name_input = view.name_input.clone();
    name_input.invalid = view.error(FormField::FullName).is_some();
    frame.render_widget(name_input, chunks[0]);
    render_error(frame, chunks[1], view.error(FormField::FullName));

    render_id_type(
        frame,
        chunks[2],
        form.id_type,
        view.focused_field == PersonalField::IdType,
    );

    let mut id_input = view.id_number_input.clone();
    id_input.invalid = view.error(FormField::IdNumber).is_some();
    frame.render_widget(id_input, chunks[4]);
    render_error(frame, chunks[5], view.error(FormField::IdNumber));

    let mut birthday_input = view.birthday_input.clone();
    birthday_input.invalid = view.error(FormField::Birthday).is_some();
    frame.render_widget(birthday_input, chunks[6]);
    render_error(frame, chunks[7], view.error(FormField::Birthday));

    render_gender(
        frame,
        chunks[8],
        form.gender,
        view.focused_field == PersonalField::Gender,
        view.error(FormField::Gender).is_some(),
    );
    render_error(frame, chunks[9], view.error(FormField::Gender));

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next field  "),
        Span::styled("[←/→]", Style::default().fg(Color::Yellow)),
        Span::raw(" Change selection  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Next step"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[11]);
}

fn label_span(label: &str, focused: bool, invalid: bool) -> Span<'static> {
    let color = if invalid { Color::Red } else { Color::Cyan };
    let mut style = Style::default().fg(color);
    if focused {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(format!("{:>12}: ", label), style)
}

fn render_id_type(frame: &mut Frame, area: Rect, id_type: IdType, focused: bool) {
    let value_style = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let line = Line::from(vec![
        label_span(FormField::IdType.label(), focused, false),
        Span::styled(format!("< {} >", id_type.label()), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_gender(
    frame: &mut Frame,
    area: Rect,
    gender: Option<Gender>,
    focused: bool,
    invalid: bool,
) {
    let mut spans = vec![label_span(FormField::Gender.label(), focused, invalid)];
    for option in [Gender::Male, Gender::Female] {
        let selected = gender == Some(option);
        let marker = if selected { "(•)" } else { "( )" };
        let style = if selected && focused {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if selected {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("{} {}", marker, option.label()), style));
        spans.push(Span::raw("   "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
