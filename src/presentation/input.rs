use crate::application::{App, View};
use crate::domain::FormField;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.should_quit = true;
            return;
        }

        if app.alert.is_some() {
            if matches!(key, KeyCode::Enter | KeyCode::Esc) {
                app.dismiss_alert();
            }
            return;
        }

        // Only Back is meaningful while a title lookup is pending.
        if app.workflow.session().is_resolving() {
            if key == KeyCode::Esc {
                app.back();
            }
            return;
        }

        match app.view() {
            View::Scan => Self::handle_scan(app, key),
            View::ManualIsbnEntry => Self::handle_manual_entry(app, key),
            View::LiveScanner => Self::handle_live_scanner(app, key),
            View::PriceEntry => Self::handle_price_entry(app, key),
        }
    }

    fn handle_scan(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char('s') | KeyCode::Enter => app.start_live_scan(),
            KeyCode::Char('m') => app.start_manual_entry(),
            KeyCode::Char('q') => app.should_quit = true,
            _ => {}
        }
    }

    fn handle_manual_entry(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter => app.submit_manual_isbn(),
            KeyCode::Esc => app.back(),
            other => Self::handle_text_editing(app, other),
        }
    }

    // A keyboard-wedge scanner types the decoded digits followed by Enter.
    fn handle_live_scanner(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => app.back(),
            KeyCode::Enter => app.scanner_enter(),
            KeyCode::Char(c) => app.scanner_input(c),
            _ => {}
        }
    }

    fn handle_price_entry(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc => app.back(),
            KeyCode::Enter => app.submit_save(),
            KeyCode::Tab | KeyCode::Down => app.focus_next(),
            KeyCode::BackTab | KeyCode::Up => app.focus_previous(),
            other => match app.focus {
                FormField::Location => match other {
                    KeyCode::Left => app.cycle_location(false),
                    KeyCode::Right | KeyCode::Char(' ') => app.cycle_location(true),
                    _ => {}
                },
                FormField::Quantity if other == KeyCode::Char('+') => app.step_quantity(true),
                FormField::Quantity if other == KeyCode::Char('-') => app.step_quantity(false),
                _ => Self::handle_text_editing(app, other),
            },
        }
    }

    fn handle_text_editing(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Backspace => app.delete_before_cursor(),
            KeyCode::Delete => app.delete_at_cursor(),
            KeyCode::Left => app.cursor_left(),
            KeyCode::Right => app.cursor_right(),
            KeyCode::Home => app.cursor_home(),
            KeyCode::End => app.cursor_end(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    }
}
