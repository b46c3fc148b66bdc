//! Record validation and persistence.

use super::session::PriceForm;
use crate::domain::{validate_record, BookRecord, RecordStore, ValidationResult};
use std::sync::Arc;
use tracing::{info, warn};

pub const SAVED_MESSAGE: &str = "Saved successfully";
pub const FAILED_MESSAGE: &str = "Error while saving";

/// Outcome of one persist attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveReport {
    Saved,
    Failed { reason: String },
}

impl SaveReport {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveReport::Saved)
    }

    /// Text shown under the form once the attempt settles.
    pub fn message(&self) -> &'static str {
        match self {
            SaveReport::Saved => SAVED_MESSAGE,
            SaveReport::Failed { .. } => FAILED_MESSAGE,
        }
    }
}

/// Validates a completed form and persists it through a [`RecordStore`].
#[derive(Clone)]
pub struct RecordSaver {
    store: Arc<dyn RecordStore>,
}

impl RecordSaver {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Checks every required field before anything touches the network.
    pub fn prepare(form: &PriceForm) -> ValidationResult<BookRecord> {
        validate_record(
            &form.isbn,
            form.effective_title(),
            &form.price,
            &form.quantity,
            form.location,
        )
    }

    /// Blocks until the persist request settles. Never fails; errors come
    /// back as [`SaveReport::Failed`].
    pub fn save(&self, record: &BookRecord) -> SaveReport {
        match self.store.persist(record) {
            Ok(()) => {
                info!(isbn = record.isbn.as_str(), location = %record.location, "record saved");
                SaveReport::Saved
            }
            Err(error) => {
                warn!(isbn = record.isbn.as_str(), %error, "record save failed");
                SaveReport::Failed {
                    reason: error.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::session::TitleEntry;
    use crate::domain::{FormField, Location, SaveError, ValidationError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStore {
        fail_with: Option<u16>,
        saved: Mutex<Vec<BookRecord>>,
    }

    impl RecordStore for RecordingStore {
        fn persist(&self, record: &BookRecord) -> Result<(), SaveError> {
            self.saved.lock().unwrap().push(record.clone());
            match self.fail_with {
                Some(status) => Err(SaveError::Status(status)),
                None => Ok(()),
            }
        }
    }

    fn filled_form() -> PriceForm {
        let mut form = PriceForm::new("123".to_string(), TitleEntry::Resolved("X".to_string()));
        form.price = "10".to_string();
        form.quantity = "2".to_string();
        form.location = Some(Location::Dlf);
        form
    }

    #[test]
    fn test_prepare_uses_effective_title() {
        let mut form = filled_form();
        form.title = TitleEntry::Manual("Typed Title".to_string());
        let record = RecordSaver::prepare(&form).unwrap();
        assert_eq!(record.title, "Typed Title");
    }

    #[test]
    fn test_prepare_rejects_missing_manual_title() {
        let mut form = filled_form();
        form.title = TitleEntry::Manual(String::new());
        assert_eq!(
            RecordSaver::prepare(&form),
            Err(ValidationError::MissingField(FormField::Title))
        );
    }

    #[test]
    fn test_save_success() {
        let store = Arc::new(RecordingStore::default());
        let saver = RecordSaver::new(store.clone());
        let record = RecordSaver::prepare(&filled_form()).unwrap();

        let report = saver.save(&record);

        assert_eq!(report, SaveReport::Saved);
        assert_eq!(report.message(), "Saved successfully");
        assert_eq!(store.saved.lock().unwrap().as_slice(), &[record]);
    }

    #[test]
    fn test_save_failure_reports_reason() {
        let store = Arc::new(RecordingStore {
            fail_with: Some(500),
            ..Default::default()
        });
        let saver = RecordSaver::new(store);
        let record = RecordSaver::prepare(&filled_form()).unwrap();

        let report = saver.save(&record);

        assert!(!report.is_saved());
        assert_eq!(report.message(), "Error while saving");
        assert_eq!(
            report,
            SaveReport::Failed {
                reason: "save rejected with status 500".to_string()
            }
        );
    }
}
