use serde::{Deserialize, Serialize};
use std::fmt;

/// A storage location a book can be shelved at.
///
/// The set is closed: the backend only accepts these codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "DLF")]
    Dlf,
    #[serde(rename = "GRANDMALL")]
    GrandMall,
    #[serde(rename = "MARINAMALL")]
    MarinaMall,
    #[serde(rename = "SKYWALK")]
    Skywalk,
    #[serde(rename = "WAREHOUS")]
    Warehouse,
    #[serde(rename = "GARUDA-BNGLR")]
    GarudaBangalore,
}

impl Location {
    /// Every location, in the order the selector lists them.
    pub const ALL: [Location; 6] = [
        Location::Dlf,
        Location::GrandMall,
        Location::MarinaMall,
        Location::Skywalk,
        Location::Warehouse,
        Location::GarudaBangalore,
    ];

    /// The wire code sent to the save endpoint.
    pub fn code(self) -> &'static str {
        match self {
            Location::Dlf => "DLF",
            Location::GrandMall => "GRANDMALL",
            Location::MarinaMall => "MARINAMALL",
            Location::Skywalk => "SKYWALK",
            Location::Warehouse => "WAREHOUS",
            Location::GarudaBangalore => "GARUDA-BNGLR",
        }
    }

    /// The human readable name shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Location::Dlf => "DLF",
            Location::GrandMall => "GRAND MALL",
            Location::MarinaMall => "MARINA MALL",
            Location::Skywalk => "SKYWALK",
            Location::Warehouse => "WAREHOUSE",
            Location::GarudaBangalore => "Garuda-Bnglr",
        }
    }

    pub fn from_code(code: &str) -> Option<Location> {
        Self::ALL.into_iter().find(|loc| loc.code() == code)
    }

    /// Steps through the selector, treating "unset" as the slot before the
    /// first location. Wraps at both ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfscan::domain::Location;
    ///
    /// assert_eq!(Location::cycle(None, true), Some(Location::Dlf));
    /// assert_eq!(Location::cycle(Some(Location::GarudaBangalore), true), None);
    /// assert_eq!(Location::cycle(None, false), Some(Location::GarudaBangalore));
    /// ```
    pub fn cycle(current: Option<Location>, forward: bool) -> Option<Location> {
        let slots = Self::ALL.len() + 1;
        let index = match current {
            None => 0,
            Some(loc) => Self::ALL.iter().position(|l| *l == loc).map_or(0, |i| i + 1),
        };
        let next = if forward {
            (index + 1) % slots
        } else {
            (index + slots - 1) % slots
        };
        if next == 0 { None } else { Some(Self::ALL[next - 1]) }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A fully validated record, ready to be persisted.
///
/// Field names follow the save endpoint's payload; the title travels as
/// `b_title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub isbn: String,
    #[serde(rename = "b_title")]
    pub title: String,
    pub price: String,
    pub quantity: String,
    pub location: Location,
}

/// Terminal outcome of a title lookup. Absence of a title is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    Unresolved,
}

impl Resolution {
    pub fn title(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(title) => Some(title),
            Resolution::Unresolved => None,
        }
    }
}

/// Generation token attached to every issued lookup or save.
///
/// A settlement is only applied while the session still holds the ticket
/// it was issued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Editable fields of the price entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Price,
    Quantity,
    Location,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Price => "Price",
            FormField::Quantity => "Quantity",
            FormField::Location => "Location",
        }
    }
}
