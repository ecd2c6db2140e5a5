//! Event handler for the TUI
//!
//! Routes keyboard events to the help overlay or the mounted step view,
//! then remounts the view if the wizard moved.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::event::Event;
use super::steps::StepView;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event, now: Instant) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key, now),
        Event::Tick => {
            app.on_tick(now);
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent, now: Instant) -> Result<()> {
    // Held keys repeat; releases are reported on some platforms
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return Ok(());
    }

    // Global keys (work everywhere)
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }
        KeyCode::F(1) => {
            app.toggle_help();
            return Ok(());
        }
        _ => {}
    }

    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    let consumed = match &mut app.view {
        StepView::PersonalInfo(view) => view.handle_key(key, &mut app.wizard),
        StepView::PhoneVerification(view) => {
            view.handle_key(key, &mut app.wizard, app.service.as_mut(), now)
        }
        StepView::Success(view) => view.handle_key(key, &mut app.wizard),
    };

    if !consumed {
        handle_unconsumed_key(app, key);
    }

    app.sync_view();
    Ok(())
}

/// Handle keys while the help overlay is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?')) {
        app.toggle_help();
    }
    Ok(())
}

/// Keys the step view did not use
fn handle_unconsumed_key(app: &mut App, key: KeyEvent) {
    // Text fields swallow these on the form steps
    if !app.wizard.step().is_terminal() {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.toggle_help(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::WizardStep;
    use crate::tui::app::ActiveDialog;
    use crate::tui::steps::personal_info::PersonalField;
    use std::time::Duration;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        handle_event(app, Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), now).unwrap();
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    #[test]
    fn test_full_wizard_flow() {
        let mut app = App::new(Settings::default());
        let t0 = Instant::now();

        // Personal info: name, skip id type, id number, birthday, gender
        type_text(&mut app, "Li Wei", t0);
        press(&mut app, KeyCode::Tab, t0);
        press(&mut app, KeyCode::Tab, t0);
        type_text(&mut app, "110101199001011234", t0);
        press(&mut app, KeyCode::Tab, t0);
        type_text(&mut app, "1990-01-01", t0);
        press(&mut app, KeyCode::Tab, t0);
        type_text(&mut app, "m", t0);
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.wizard.step(), WizardStep::PhoneVerification);
        assert_eq!(app.view.step(), WizardStep::PhoneVerification);

        // Phone step: send the code and read it from the toast
        type_text(&mut app, "13812345678", t0);
        press(&mut app, KeyCode::Tab, t0);
        press(&mut app, KeyCode::Tab, t0);
        press(&mut app, KeyCode::Enter, t0);
        handle_event(&mut app, Event::Tick, t0 + Duration::from_secs(1)).unwrap();
        assert!(app.notifications.current().unwrap().message.contains("123456"));

        press(&mut app, KeyCode::BackTab, t0);
        type_text(&mut app, "123456", t0);
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.wizard.step(), WizardStep::Success);
        assert_eq!(app.view.step(), WizardStep::Success);

        // Success: restart
        press(&mut app, KeyCode::Enter, t0);
        assert_eq!(app.wizard.step(), WizardStep::PersonalInfo);
        assert_eq!(app.wizard.form().full_name, "");
    }

    #[test]
    fn test_ctrl_c_quits_from_anywhere() {
        let mut app = App::new(Settings::default());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        handle_event(&mut app, Event::Key(ctrl_c), Instant::now()).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_is_typed_on_form_steps() {
        let mut app = App::new(Settings::default());
        press(&mut app, KeyCode::Char('q'), Instant::now());
        assert!(!app.should_quit);
        assert_eq!(app.wizard.form().full_name, "q");
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut app = App::new(Settings::default());
        let now = Instant::now();
        press(&mut app, KeyCode::F(1), now);
        assert_eq!(app.active_dialog, ActiveDialog::Help);

        press(&mut app, KeyCode::Char('x'), now);
        assert_eq!(app.wizard.form().full_name, "");

        press(&mut app, KeyCode::Esc, now);
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::new(Settings::default());
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_event(&mut app, Event::Key(key), Instant::now()).unwrap();
        assert_eq!(app.wizard.form().full_name, "");
    }

    #[test]
    fn test_held_keys_repeat() {
        let mut app = App::new(Settings::default());
        let now = Instant::now();
        type_text(&mut app, "Li Weii", now);

        let mut backspace = KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE);
        backspace.kind = KeyEventKind::Repeat;
        handle_event(&mut app, Event::Key(backspace), now).unwrap();
        assert_eq!(app.wizard.form().full_name, "Li Wei");

        let mut tab = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        tab.kind = KeyEventKind::Repeat;
        handle_event(&mut app, Event::Key(tab), now).unwrap();
        match &app.view {
            StepView::PersonalInfo(view) => assert_eq!(view.focused_field, PersonalField::IdType),
            other => panic!("unexpected view {:?}", other.step()),
        }
    }

    #[test]
    fn test_q_closes_help() {
        let mut app = App::new(Settings::default());
        let now = Instant::now();
        press(&mut app, KeyCode::F(1), now);
        press(&mut app, KeyCode::Char('q'), now);
        assert!(!app.has_dialog());
        assert!(!app.should_quit);
        assert_eq!(app.wizard.form().full_name, "");
    }
}
