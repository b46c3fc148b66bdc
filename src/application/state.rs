//! Application state for the intake terminal.
//!
//! [`App`] wraps the [`Workflow`] with the state that only matters to the
//! terminal: which form field has focus, where the text cursor sits, the
//! blocking alert, and the keyboard-wedge scan buffer.

use super::session::View;
use super::workflow::{Dispatch, Intent, Step, Workflow};
use crate::domain::{step_quantity, FormField, Location};
use tracing::debug;

/// Main application state.
///
/// # Examples
///
/// ```
/// use shelfscan::application::{App, Command, Dispatch, View};
///
/// struct Discard;
/// impl Dispatch for Discard {
///     fn dispatch(&self, _command: Command) {}
/// }
///
/// let mut app = App::new(Box::new(Discard));
/// app.start_manual_entry();
/// assert_eq!(app.view(), View::ManualIsbnEntry);
/// ```
pub struct App {
    /// The view state machine and its session
    pub workflow: Workflow,
    /// Focused field on the price entry form
    pub focus: FormField,
    /// Cursor position (in characters) within the focused text field
    pub cursor_position: usize,
    /// Blocking prompt; while set, all other input is held back
    pub alert: Option<String>,
    /// Characters typed by a keyboard-wedge scanner since the last decode
    pub scan_buffer: String,
    /// Set when the user asks to leave the application
    pub should_quit: bool,
    dispatcher: Box<dyn Dispatch>,
}

impl App {
    pub fn new(dispatcher: Box<dyn Dispatch>) -> Self {
        Self {
            workflow: Workflow::new(),
            focus: FormField::Price,
            cursor_position: 0,
            alert: None,
            scan_buffer: String::new(),
            should_quit: false,
            dispatcher,
        }
    }

    pub fn view(&self) -> View {
        self.workflow.view()
    }

    /// Feeds one event to the state machine and carries out what it asks for.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let settles_lookup = matches!(intent, Intent::LookupSettled { .. });
        let is_back = matches!(intent, Intent::Back);

        match self.workflow.handle(intent) {
            Step::Applied => {
                if is_back {
                    self.reset_ui();
                } else if settles_lookup {
                    self.focus = self.first_field();
                    self.cursor_position = self.focused_text().chars().count();
                }
                true
            }
            Step::Issue(command) => {
                self.dispatcher.dispatch(command);
                true
            }
            Step::Rejected(error) => {
                self.alert = Some(error.prompt().to_string());
                false
            }
            Step::Ignored => false,
        }
    }

    fn reset_ui(&mut self) {
        self.focus = FormField::Price;
        self.cursor_position = 0;
        self.alert = None;
        self.scan_buffer.clear();
    }

    pub fn start_live_scan(&mut self) {
        self.scan_buffer.clear();
        self.apply(Intent::StartLiveScan);
    }

    pub fn start_manual_entry(&mut self) {
        self.cursor_position = 0;
        self.apply(Intent::StartManualEntry);
    }

    pub fn back(&mut self) {
        self.apply(Intent::Back);
    }

    pub fn submit_manual_isbn(&mut self) {
        let draft = self.workflow.session().manual_isbn_draft().to_string();
        self.apply(Intent::SubmitManualIsbn(draft));
    }

    pub fn submit_save(&mut self) {
        self.apply(Intent::SubmitSave);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Detection callback handed to the scanner: one call per decoded read.
    pub fn on_detected(&mut self, code: String) {
        if !self.apply(Intent::Detected(code)) {
            debug!("scanner delivery had no effect");
        }
    }

    /// Collects one character from a keyboard-wedge scanner.
    pub fn scanner_input(&mut self, c: char) {
        self.scan_buffer.push(c);
    }

    /// Terminates the current wedge read and delivers it if non-empty.
    pub fn scanner_enter(&mut self) {
        let code = std::mem::take(&mut self.scan_buffer);
        if !code.is_empty() {
            self.on_detected(code);
        }
    }

    /// Fields the user can move between, in display order.
    pub fn form_fields(&self) -> Vec<FormField> {
        let mut fields = Vec::with_capacity(4);
        if self.workflow.session().title_entry_required() {
            fields.push(FormField::Title);
        }
        fields.extend([FormField::Price, FormField::Quantity, FormField::Location]);
        fields
    }

    fn first_field(&self) -> FormField {
        self.form_fields()[0]
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_previous(&mut self) {
        let len = self.form_fields().len();
        self.move_focus(len - 1);
    }

    fn move_focus(&mut self, offset: usize) {
        let fields = self.form_fields();
        let index = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(index + offset) % fields.len()];
        self.cursor_position = self.focused_text().chars().count();
    }

    /// Text of whatever field is being typed into, if any.
    pub fn focused_text(&self) -> String {
        let session = self.workflow.session();
        match session.view() {
            View::ManualIsbnEntry => session.manual_isbn_draft().to_string(),
            View::PriceEntry => match self.focus {
                FormField::Title => session.manual_title_draft().to_string(),
                FormField::Price => session.price().to_string(),
                FormField::Quantity => session.quantity().to_string(),
                FormField::Location => String::new(),
            },
            View::Scan | View::LiveScanner => String::new(),
        }
    }

    fn edits_text(&self) -> bool {
        match self.view() {
            View::ManualIsbnEntry => true,
            View::PriceEntry => self.focus != FormField::Location,
            View::Scan | View::LiveScanner => false,
        }
    }

    fn replace_focused_text(&mut self, text: String) -> bool {
        let intent = match self.view() {
            View::ManualIsbnEntry => Intent::EditManualIsbn(text),
            View::PriceEntry => Intent::EditField(self.focus, text),
            View::Scan | View::LiveScanner => return false,
        };
        self.apply(intent)
    }

    fn clamp_cursor(&mut self) {
        let len = self.focused_text().chars().count();
        self.cursor_position = self.cursor_position.min(len);
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.edits_text() {
            return;
        }
        self.clamp_cursor();
        let mut text: Vec<char> = self.focused_text().chars().collect();
        text.insert(self.cursor_position, c);
        if self.replace_focused_text(text.into_iter().collect()) {
            self.cursor_position += 1;
        }
    }

    pub fn delete_before_cursor(&mut self) {
        if !self.edits_text() {
            return;
        }
        self.clamp_cursor();
        if self.cursor_position == 0 {
            return;
        }
        let mut text: Vec<char> = self.focused_text().chars().collect();
        text.remove(self.cursor_position - 1);
        if self.replace_focused_text(text.into_iter().collect()) {
            self.cursor_position -= 1;
        }
    }

    pub fn delete_at_cursor(&mut self) {
        if !self.edits_text() {
            return;
        }
        self.clamp_cursor();
        let mut text: Vec<char> = self.focused_text().chars().collect();
        if self.cursor_position < text.len() {
            text.remove(self.cursor_position);
            self.replace_focused_text(text.into_iter().collect());
        }
    }

    pub fn cursor_left(&mut self) {
        self.clamp_cursor();
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let len = self.focused_text().chars().count();
        if self.cursor_position < len {
            self.cursor_position += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_position = self.focused_text().chars().count();
    }

    pub fn cycle_location(&mut self, forward: bool) {
        let current = self.workflow.session().location();
        self.apply(Intent::SelectLocation(Location::cycle(current, forward)));
    }

    pub fn step_quantity(&mut self, up: bool) {
        let next = step_quantity(self.workflow.session().quantity(), up);
        if self.apply(Intent::EditField(FormField::Quantity, next)) && self.focus == FormField::Quantity {
            self.cursor_end();
        }
    }
}
