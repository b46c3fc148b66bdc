//! Backend seams and the rules applied to user input.
//!
//! Nothing here performs I/O. The traits are implemented by the HTTP
//! client in the infrastructure layer and by fakes in tests.

use super::errors::{LookupError, SaveError, ValidationError, ValidationResult};
use super::models::{BookRecord, FormField, Location, Resolution};

/// Remote source of book titles keyed by ISBN.
pub trait TitleLookup: Send + Sync {
    /// Returns the title the source knows for `isbn`, or `None` when the
    /// source answered without one.
    fn lookup(&self, isbn: &str) -> Result<Option<String>, LookupError>;
}

/// Remote sink for completed records.
pub trait RecordStore: Send + Sync {
    fn persist(&self, record: &BookRecord) -> Result<(), SaveError>;
}

impl Resolution {
    /// Folds any lookup outcome into one of the two terminal results.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelfscan::domain::Resolution;
    ///
    /// let found = Resolution::from_lookup(Ok(Some("The Odyssey".to_string())));
    /// assert_eq!(found, Resolution::Resolved("The Odyssey".to_string()));
    ///
    /// assert_eq!(Resolution::from_lookup(Ok(Some("  ".to_string()))), Resolution::Unresolved);
    /// assert_eq!(Resolution::from_lookup(Ok(None)), Resolution::Unresolved);
    /// ```
    pub fn from_lookup(outcome: Result<Option<String>, LookupError>) -> Resolution {
        match outcome {
            Ok(Some(title)) if !title.trim().is_empty() => Resolution::Resolved(title),
            Ok(_) | Err(_) => Resolution::Unresolved,
        }
    }
}

/// Checks the required fields and assembles the persist payload.
///
/// `title` is the effective title: the resolved one if present, otherwise
/// whatever the user typed. Fields are checked in form order so the first
/// missing one is reported. A price without any digit or a quantity below 1
/// counts as missing.
pub fn validate_record(
    isbn: &str,
    title: &str,
    price: &str,
    quantity: &str,
    location: Option<Location>,
) -> ValidationResult<BookRecord> {
    if isbn.is_empty() {
        return Err(ValidationError::MissingIsbn);
    }
    if title.trim().is_empty() {
        return Err(ValidationError::MissingField(FormField::Title));
    }
    if !price.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::MissingField(FormField::Price));
    }
    if quantity.parse::<u32>().map_or(true, |n| n == 0) {
        return Err(ValidationError::MissingField(FormField::Quantity));
    }
    let location = location.ok_or(ValidationError::MissingField(FormField::Location))?;

    Ok(BookRecord {
        isbn: isbn.to_string(),
        title: title.to_string(),
        price: price.to_string(),
        quantity: quantity.to_string(),
        location,
    })
}

/// Accepts a price candidate if it is digits with at most one decimal point.
pub fn accept_price(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit() || c == '.')
        && candidate.matches('.').count() <= 1
}

/// Accepts a quantity candidate if it is digits only.
pub fn accept_quantity(candidate: &str) -> bool {
    candidate.chars().all(|c| c.is_ascii_digit())
}

/// Steps a quantity up or down by one, never below 1.
///
/// An empty or unparsable quantity steps from 1.
pub fn step_quantity(quantity: &str, up: bool) -> String {
    let current = quantity.parse::<u32>().unwrap_or(1).max(1);
    let next = if up {
        current.saturating_add(1)
    } else {
        current.saturating_sub(1).max(1)
    };
    next.to_string()
}
