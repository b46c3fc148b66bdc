//! The single in-progress intake record.
//!
//! The session is a tagged variant: each view carries only the data that
//! makes sense in it, so combinations like "saving while on the scan
//! screen" cannot be expressed. The flat accessors on [`Session`] expose
//! the familiar field-by-field view of the same data.

use crate::domain::{Location, Ticket};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Scan,
    ManualIsbnEntry,
    LiveScanner,
    PriceEntry,
}

/// A lookup that has been issued but not yet settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: Ticket,
    pub isbn: String,
}

/// Where the title shown on the price entry form came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleEntry {
    /// The lookup returned a title; no manual entry needed.
    Resolved(String),
    /// The lookup came back empty; the user must type one.
    Manual(String),
}

/// Progress of the save action on the price entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Idle,
    Saving(Ticket),
    Saved,
}

/// Data behind the price entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceForm {
    pub isbn: String,
    pub title: TitleEntry,
    pub price: String,
    pub quantity: String,
    pub location: Option<Location>,
    pub save: SaveState,
    pub save_message: String,
}

pub const DEFAULT_QUANTITY: &str = "1";

impl PriceForm {
    pub fn new(isbn: String, title: TitleEntry) -> Self {
        Self {
            isbn,
            title,
            price: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            location: None,
            save: SaveState::Idle,
            save_message: String::new(),
        }
    }

    /// The title that would be saved: resolved if present, else the draft.
    pub fn effective_title(&self) -> &str {
        match &self.title {
            TitleEntry::Resolved(title) => title,
            TitleEntry::Manual(draft) => draft,
        }
    }

    /// Fields can change only while no save is in flight and nothing has
    /// been saved yet.
    pub fn is_editable(&self) -> bool {
        matches!(self.save, SaveState::Idle)
    }
}

/// Current screen together with its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Scan,
    ManualIsbnEntry {
        draft: String,
        pending: Option<PendingLookup>,
    },
    LiveScanner {
        pending: Option<PendingLookup>,
    },
    PriceEntry(PriceForm),
}

/// The mutable record of one scan, entry, and save cycle.
///
/// # Examples
///
/// ```
/// use shelfscan::application::{Session, View};
///
/// let session = Session::default();
/// assert_eq!(session.view(), View::Scan);
/// assert!(!session.is_resolving());
/// assert_eq!(session.quantity(), "1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub screen: Screen,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Scan,
        }
    }
}

impl Session {
    pub fn view(&self) -> View {
        match self.screen {
            Screen::Scan => View::Scan,
            Screen::ManualIsbnEntry { .. } => View::ManualIsbnEntry,
            Screen::LiveScanner { .. } => View::LiveScanner,
            Screen::PriceEntry(_) => View::PriceEntry,
        }
    }

    pub fn form(&self) -> Option<&PriceForm> {
        match &self.screen {
            Screen::PriceEntry(form) => Some(form),
            _ => None,
        }
    }

    pub fn pending(&self) -> Option<&PendingLookup> {
        match &self.screen {
            Screen::ManualIsbnEntry { pending, .. } | Screen::LiveScanner { pending } => {
                pending.as_ref()
            }
            _ => None,
        }
    }

    /// The confirmed ISBN. Empty outside the price entry view.
    pub fn isbn(&self) -> &str {
        self.form().map_or("", |form| form.isbn.as_str())
    }

    /// The ISBN a pending lookup was issued for, if one is in flight.
    pub fn pending_isbn(&self) -> Option<&str> {
        self.pending().map(|p| p.isbn.as_str())
    }

    pub fn manual_isbn_draft(&self) -> &str {
        match &self.screen {
            Screen::ManualIsbnEntry { draft, .. } => draft,
            _ => "",
        }
    }

    pub fn resolved_title(&self) -> &str {
        match self.form().map(|form| &form.title) {
            Some(TitleEntry::Resolved(title)) => title,
            _ => "",
        }
    }

    pub fn manual_title_draft(&self) -> &str {
        match self.form().map(|form| &form.title) {
            Some(TitleEntry::Manual(draft)) => draft,
            _ => "",
        }
    }

    pub fn title_entry_required(&self) -> bool {
        matches!(self.form().map(|form| &form.title), Some(TitleEntry::Manual(_)))
    }

    pub fn price(&self) -> &str {
        self.form().map_or("", |form| form.price.as_str())
    }

    /// The entered quantity. Reads as the default before a form exists.
    pub fn quantity(&self) -> &str {
        self.form().map_or(DEFAULT_QUANTITY, |form| form.quantity.as_str())
    }

    pub fn location(&self) -> Option<Location> {
        self.form().and_then(|form| form.location)
    }

    pub fn is_resolving(&self) -> bool {
        self.pending().is_some()
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.form().map(|form| form.save), Some(SaveState::Saving(_)))
    }

    pub fn is_saved(&self) -> bool {
        matches!(self.form().map(|form| form.save), Some(SaveState::Saved))
    }

    pub fn save_message(&self) -> &str {
        self.form().map_or("", |form| form.save_message.as_str())
    }
}
