//! The view state machine.
//!
//! [`Workflow`] owns the [`Session`] and is its only writer. It never
//! performs I/O: when an event needs a lookup or a save it hands back a
//! [`Command`] tagged with a fresh [`Ticket`], and the matching
//! settlement event is applied only if the session still holds that
//! ticket. Anything issued before a `Back` is therefore dropped on arrival.

use super::saver::{RecordSaver, SaveReport};
use super::session::{PendingLookup, PriceForm, SaveState, Screen, Session, TitleEntry, View};
use crate::domain::{
    accept_price, accept_quantity, BookRecord, FormField, Location, Resolution, Ticket,
    ValidationError,
};
use tracing::{debug, info};

/// Everything that can happen to the session, from the user, the scanner,
/// or a settling background operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    StartLiveScan,
    StartManualEntry,
    EditManualIsbn(String),
    SubmitManualIsbn(String),
    /// A barcode decode delivered by the scanner.
    Detected(String),
    EditField(FormField, String),
    SelectLocation(Option<Location>),
    SubmitSave,
    Back,
    LookupSettled { ticket: Ticket, resolution: Resolution },
    SaveSettled { ticket: Ticket, report: SaveReport },
}

/// Work the state machine wants performed off the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup { ticket: Ticket, isbn: String },
    Persist { ticket: Ticket, record: BookRecord },
}

impl Command {
    pub fn ticket(&self) -> Ticket {
        match self {
            Command::Lookup { ticket, .. } | Command::Persist { ticket, .. } => *ticket,
        }
    }
}

/// Result of feeding one [`Intent`] to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Step {
    /// The session changed.
    Applied,
    /// The event had no meaning in the current state and was dropped.
    Ignored,
    /// The session changed and the command must be run.
    Issue(Command),
    /// A save was requested with required fields missing. Nothing changed.
    Rejected(ValidationError),
}

/// Executes commands issued by the state machine.
pub trait Dispatch {
    fn dispatch(&self, command: Command);
}

#[derive(Debug, Default)]
pub struct Workflow {
    session: Session,
    last_ticket: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        self.session.view()
    }

    pub fn handle(&mut self, intent: Intent) -> Step {
        match intent {
            Intent::Back => self.back(),
            Intent::StartLiveScan => self.leave_scan(Screen::LiveScanner { pending: None }),
            Intent::StartManualEntry => self.leave_scan(Screen::ManualIsbnEntry {
                draft: String::new(),
                pending: None,
            }),
            Intent::EditManualIsbn(text) => self.edit_manual_isbn(text),
            Intent::SubmitManualIsbn(text) => self.submit_manual_isbn(&text),
            Intent::Detected(code) => self.detected(code),
            Intent::LookupSettled { ticket, resolution } => self.lookup_settled(ticket, resolution),
            Intent::EditField(field, value) => self.edit_field(field, value),
            Intent::SelectLocation(location) => self.select_location(location),
            Intent::SubmitSave => self.submit_save(),
            Intent::SaveSettled { ticket, report } => self.save_settled(ticket, report),
        }
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        Ticket(self.last_ticket)
    }

    fn back(&mut self) -> Step {
        if let Some(pending) = self.session.pending() {
            debug!(ticket = %pending.ticket, "abandoning pending lookup");
        }
        if let Some(SaveState::Saving(ticket)) = self.session.form().map(|form| form.save) {
            debug!(%ticket, "abandoning pending save");
        }
        self.session = Session::default();
        info!("session reset");
        Step::Applied
    }

    fn leave_scan(&mut self, next: Screen) -> Step {
        if !matches!(self.session.screen, Screen::Scan) {
            return Step::Ignored;
        }
        self.session.screen = next;
        info!(view = ?self.session.view(), "view changed");
        Step::Applied
    }

    fn edit_manual_isbn(&mut self, text: String) -> Step {
        match &mut self.session.screen {
            Screen::ManualIsbnEntry { draft, pending: None } => {
                *draft = text;
                Step::Applied
            }
            _ => Step::Ignored,
        }
    }

    fn submit_manual_isbn(&mut self, text: &str) -> Step {
        if !matches!(self.session.screen, Screen::ManualIsbnEntry { pending: None, .. }) {
            return Step::Ignored;
        }
        self.begin_lookup(text.trim().to_string())
    }

    fn detected(&mut self, code: String) -> Step {
        if !matches!(self.session.screen, Screen::LiveScanner { pending: None }) {
            debug!(code = code.as_str(), view = ?self.session.view(), "discarding scanner delivery");
            return Step::Ignored;
        }
        self.begin_lookup(code)
    }

    fn begin_lookup(&mut self, isbn: String) -> Step {
        let ticket = self.next_ticket();
        let slot = match &mut self.session.screen {
            Screen::ManualIsbnEntry { pending, .. } | Screen::LiveScanner { pending } => pending,
            _ => return Step::Ignored,
        };
        *slot = Some(PendingLookup {
            ticket,
            isbn: isbn.clone(),
        });
        info!(%ticket, isbn = isbn.as_str(), "resolving title");
        Step::Issue(Command::Lookup { ticket, isbn })
    }

    fn lookup_settled(&mut self, ticket: Ticket, resolution: Resolution) -> Step {
        let isbn = match &self.session.screen {
            Screen::ManualIsbnEntry {
                pending: Some(pending),
                ..
            }
            | Screen::LiveScanner {
                pending: Some(pending),
            } if pending.ticket == ticket => pending.isbn.clone(),
            _ => {
                debug!(%ticket, "dropping stale lookup result");
                return Step::Ignored;
            }
        };

        let title = match resolution {
            Resolution::Resolved(title) => TitleEntry::Resolved(title),
            Resolution::Unresolved => TitleEntry::Manual(String::new()),
        };
        self.session.screen = Screen::PriceEntry(PriceForm::new(isbn, title));
        info!(
            %ticket,
            title_entry_required = self.session.title_entry_required(),
            "entering price entry"
        );
        Step::Applied
    }

    fn editable_form(&mut self) -> Option<&mut PriceForm> {
        match &mut self.session.screen {
            Screen::PriceEntry(form) if form.is_editable() => Some(form),
            _ => None,
        }
    }

    fn edit_field(&mut self, field: FormField, value: String) -> Step {
        let Some(form) = self.editable_form() else {
            return Step::Ignored;
        };
        let accepted = match field {
            FormField::Title => match &mut form.title {
                TitleEntry::Manual(draft) => {
                    *draft = value;
                    true
                }
                TitleEntry::Resolved(_) => false,
            },
            FormField::Price if accept_price(&value) => {
                form.price = value;
                true
            }
            FormField::Quantity if accept_quantity(&value) => {
                form.quantity = value;
                true
            }
            FormField::Location => match Location::from_code(&value) {
                Some(location) => {
                    form.location = Some(location);
                    true
                }
                None if value.is_empty() => {
                    form.location = None;
                    true
                }
                None => false,
            },
            FormField::Price | FormField::Quantity => false,
        };
        if accepted { Step::Applied } else { Step::Ignored }
    }

    fn select_location(&mut self, location: Option<Location>) -> Step {
        match self.editable_form() {
            Some(form) => {
                form.location = location;
                Step::Applied
            }
            None => Step::Ignored,
        }
    }

    fn submit_save(&mut self) -> Step {
        let record = match &self.session.screen {
            Screen::PriceEntry(form) if form.save != SaveState::Idle => {
                debug!(save = ?form.save, "save already in flight or done");
                return Step::Ignored;
            }
            Screen::PriceEntry(form) => match RecordSaver::prepare(form) {
                Ok(record) => record,
                Err(error) => {
                    info!(%error, "save blocked by validation");
                    return Step::Rejected(error);
                }
            },
            _ => return Step::Ignored,
        };

        let ticket = self.next_ticket();
        if let Screen::PriceEntry(form) = &mut self.session.screen {
            form.save = SaveState::Saving(ticket);
        }
        info!(%ticket, isbn = record.isbn.as_str(), "saving record");
        Step::Issue(Command::Persist { ticket, record })
    }

    fn save_settled(&mut self, ticket: Ticket, report: SaveReport) -> Step {
        match &mut self.session.screen {
            Screen::PriceEntry(form) if form.save == SaveState::Saving(ticket) => {
                form.save = if report.is_saved() {
                    SaveState::Saved
                } else {
                    SaveState::Idle
                };
                form.save_message = report.message().to_string();
                Step::Applied
            }
            _ => {
                debug!(%ticket, "dropping stale save result");
                Step::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_ticket(step: &Step) -> Ticket {
        match step {
            Step::Issue(Command::Lookup { ticket, .. }) => *ticket,
            other => panic!("expected a lookup, got {other:?}"),
        }
    }

    fn persist_ticket(step: &Step) -> Ticket {
        match step {
            Step::Issue(Command::Persist { ticket, .. }) => *ticket,
            other => panic!("expected a persist, got {other:?}"),
        }
    }

    fn manual_lookup(workflow: &mut Workflow, isbn: &str) -> Ticket {
        assert_eq!(workflow.handle(Intent::StartManualEntry), Step::Applied);
        let step = workflow.handle(Intent::SubmitManualIsbn(isbn.to_string()));
        lookup_ticket(&step)
    }

    fn price_entry(resolution: Resolution) -> Workflow {
        let mut workflow = Workflow::new();
        let ticket = manual_lookup(&mut workflow, "123");
        let step = workflow.handle(Intent::LookupSettled { ticket, resolution });
        assert_eq!(step, Step::Applied);
        workflow
    }

    fn filled_price_entry() -> Workflow {
        let mut workflow = price_entry(Resolution::Resolved("X".to_string()));
        let _ = workflow.handle(Intent::EditField(FormField::Price, "10".to_string()));
        let _ = workflow.handle(Intent::EditField(FormField::Quantity, "2".to_string()));
        let _ = workflow.handle(Intent::SelectLocation(Some(Location::Dlf)));
        workflow
    }

    #[test]
    fn test_initial_view_is_scan() {
        let workflow = Workflow::new();
        assert_eq!(workflow.view(), View::Scan);
        assert_eq!(workflow.session(), &Session::default());
    }

    #[test]
    fn test_scan_transitions() {
        let mut workflow = Workflow::new();
        assert_eq!(workflow.handle(Intent::StartLiveScan), Step::Applied);
        assert_eq!(workflow.view(), View::LiveScanner);

        assert_eq!(workflow.handle(Intent::StartManualEntry), Step::Ignored);
        assert_eq!(workflow.view(), View::LiveScanner);

        assert_eq!(workflow.handle(Intent::Back), Step::Applied);
        assert_eq!(workflow.handle(Intent::StartManualEntry), Step::Applied);
        assert_eq!(workflow.view(), View::ManualIsbnEntry);
    }

    #[test]
    fn test_manual_isbn_is_trimmed() {
        let mut workflow = Workflow::new();
        let _ = workflow.handle(Intent::StartManualEntry);
        let step = workflow.handle(Intent::SubmitManualIsbn("  9780140449266 \n".to_string()));
        assert_eq!(
            step,
            Step::Issue(Command::Lookup {
                ticket: Ticket(1),
                isbn: "9780140449266".to_string()
            })
        );
        assert!(workflow.session().is_resolving());
        assert_eq!(workflow.session().pending_isbn(), Some("9780140449266"));
        assert_eq!(workflow.view(), View::ManualIsbnEntry);
    }

    #[test]
    fn test_empty_manual_isbn_still_resolves() {
        let mut workflow = Workflow::new();
        let ticket = manual_lookup(&mut workflow, "   ");
        assert_eq!(workflow.session().pending_isbn(), Some(""));

        let step = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Unresolved,
        });
        assert_eq!(step, Step::Applied);
        assert_eq!(workflow.view(), View::PriceEntry);
        assert_eq!(workflow.session().isbn(), "");
    }

    #[test]
    fn test_resolved_scenario() {
        let mut workflow = Workflow::new();
        let ticket = manual_lookup(&mut workflow, "9780140449266");
        let _ = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Resolved("The Odyssey".to_string()),
        });

        let session = workflow.session();
        assert_eq!(session.view(), View::PriceEntry);
        assert_eq!(session.isbn(), "9780140449266");
        assert_eq!(session.resolved_title(), "The Odyssey");
        assert!(!session.title_entry_required());
        assert!(!session.is_resolving());
        assert_eq!(session.quantity(), "1");
    }

    #[test]
    fn test_unresolved_scenario_requires_manual_title() {
        let mut workflow = Workflow::new();
        let ticket = manual_lookup(&mut workflow, "0000000000");
        let _ = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Unresolved,
        });
        assert_eq!(workflow.view(), View::PriceEntry);
        assert!(workflow.session().title_entry_required());
        assert_eq!(workflow.session().resolved_title(), "");

        let _ = workflow.handle(Intent::EditField(FormField::Price, "5".to_string()));
        let _ = workflow.handle(Intent::SelectLocation(Some(Location::Skywalk)));
        assert_eq!(
            workflow.handle(Intent::SubmitSave),
            Step::Rejected(ValidationError::MissingField(FormField::Title))
        );
        assert!(!workflow.session().is_saving());

        let _ = workflow.handle(Intent::EditField(FormField::Title, "Typed".to_string()));
        assert_eq!(workflow.session().manual_title_draft(), "Typed");
        let step = workflow.handle(Intent::SubmitSave);
        match step {
            Step::Issue(Command::Persist { record, .. }) => {
                assert_eq!(record.isbn, "0000000000");
                assert_eq!(record.title, "Typed");
                assert_eq!(record.location, Location::Skywalk);
            }
            other => panic!("expected a persist, got {other:?}"),
        }
    }

    #[test]
    fn test_resolved_title_is_not_editable() {
        let mut workflow = price_entry(Resolution::Resolved("Dune".to_string()));
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Title, "Other".to_string())),
            Step::Ignored
        );
        assert_eq!(workflow.session().resolved_title(), "Dune");
    }

    #[test]
    fn test_detection_only_counts_in_live_scanner() {
        let mut workflow = Workflow::new();
        assert_eq!(workflow.handle(Intent::Detected("111".to_string())), Step::Ignored);

        let _ = workflow.handle(Intent::StartLiveScan);
        let first = workflow.handle(Intent::Detected("111".to_string()));
        let ticket = lookup_ticket(&first);

        assert_eq!(workflow.handle(Intent::Detected("222".to_string())), Step::Ignored);
        assert_eq!(workflow.session().pending_isbn(), Some("111"));

        let _ = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Unresolved,
        });
        assert_eq!(workflow.view(), View::PriceEntry);
        assert_eq!(workflow.handle(Intent::Detected("333".to_string())), Step::Ignored);
        assert_eq!(workflow.session().isbn(), "111");
    }

    #[test]
    fn test_second_manual_submit_while_resolving_is_ignored() {
        let mut workflow = Workflow::new();
        let _ = manual_lookup(&mut workflow, "111");
        assert_eq!(
            workflow.handle(Intent::SubmitManualIsbn("222".to_string())),
            Step::Ignored
        );
        assert_eq!(
            workflow.handle(Intent::EditManualIsbn("999".to_string())),
            Step::Ignored
        );
        assert_eq!(workflow.session().pending_isbn(), Some("111"));
    }

    #[test]
    fn test_back_mid_resolution_discards_late_result() {
        let mut workflow = Workflow::new();
        let _ = workflow.handle(Intent::StartLiveScan);
        let ticket = lookup_ticket(&workflow.handle(Intent::Detected("111".to_string())));

        let _ = workflow.handle(Intent::Back);
        assert_eq!(workflow.session(), &Session::default());

        let step = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Resolved("Late".to_string()),
        });
        assert_eq!(step, Step::Ignored);
        assert_eq!(workflow.session(), &Session::default());
    }

    #[test]
    fn test_stale_lookup_does_not_land_on_new_lookup() {
        let mut workflow = Workflow::new();
        let _ = workflow.handle(Intent::StartLiveScan);
        let old = lookup_ticket(&workflow.handle(Intent::Detected("111".to_string())));
        let _ = workflow.handle(Intent::Back);
        let _ = workflow.handle(Intent::StartLiveScan);
        let new = lookup_ticket(&workflow.handle(Intent::Detected("222".to_string())));
        assert_ne!(old, new);

        let stale = workflow.handle(Intent::LookupSettled {
            ticket: old,
            resolution: Resolution::Resolved("Wrong".to_string()),
        });
        assert_eq!(stale, Step::Ignored);
        assert!(workflow.session().is_resolving());

        let _ = workflow.handle(Intent::LookupSettled {
            ticket: new,
            resolution: Resolution::Resolved("Right".to_string()),
        });
        assert_eq!(workflow.session().isbn(), "222");
        assert_eq!(workflow.session().resolved_title(), "Right");
    }

    #[test]
    fn test_save_success_scenario() {
        let mut workflow = filled_price_entry();
        let step = workflow.handle(Intent::SubmitSave);
        let ticket = persist_ticket(&step);
        match &step {
            Step::Issue(Command::Persist { record, .. }) => {
                assert_eq!(record.isbn, "123");
                assert_eq!(record.title, "X");
                assert_eq!(record.price, "10");
                assert_eq!(record.quantity, "2");
                assert_eq!(record.location, Location::Dlf);
            }
            other => panic!("expected a persist, got {other:?}"),
        }
        assert!(workflow.session().is_saving());

        let _ = workflow.handle(Intent::SaveSettled {
            ticket,
            report: SaveReport::Saved,
        });
        let session = workflow.session();
        assert!(session.is_saved());
        assert!(!session.is_saving());
        assert_eq!(session.save_message(), "Saved successfully");
        assert_eq!(session.view(), View::PriceEntry);
    }

    #[test]
    fn test_save_while_saving_is_ignored() {
        let mut workflow = filled_price_entry();
        let _ = persist_ticket(&workflow.handle(Intent::SubmitSave));
        assert_eq!(workflow.handle(Intent::SubmitSave), Step::Ignored);
        assert_eq!(workflow.handle(Intent::SubmitSave), Step::Ignored);
    }

    #[test]
    fn test_save_after_saved_is_ignored_and_form_locked() {
        let mut workflow = filled_price_entry();
        let ticket = persist_ticket(&workflow.handle(Intent::SubmitSave));
        let _ = workflow.handle(Intent::SaveSettled {
            ticket,
            report: SaveReport::Saved,
        });

        assert_eq!(workflow.handle(Intent::SubmitSave), Step::Ignored);
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Price, "99".to_string())),
            Step::Ignored
        );
        assert_eq!(workflow.session().price(), "10");
    }

    #[test]
    fn test_save_failure_allows_retry() {
        let mut workflow = filled_price_entry();
        let ticket = persist_ticket(&workflow.handle(Intent::SubmitSave));
        let _ = workflow.handle(Intent::SaveSettled {
            ticket,
            report: SaveReport::Failed {
                reason: "timeout".to_string(),
            },
        });

        assert!(!workflow.session().is_saving());
        assert!(!workflow.session().is_saved());
        assert_eq!(workflow.session().save_message(), "Error while saving");

        let retry = persist_ticket(&workflow.handle(Intent::SubmitSave));
        assert_ne!(retry, ticket);
        assert_eq!(workflow.session().save_message(), "Error while saving");
    }

    #[test]
    fn test_missing_fields_never_issue_persist() {
        let cases: Vec<(FormField, &str)> = vec![
            (FormField::Price, ""),
            (FormField::Quantity, ""),
            (FormField::Location, ""),
        ];
        for (field, value) in cases {
            let mut workflow = filled_price_entry();
            let _ = workflow.handle(Intent::EditField(field, value.to_string()));
            let step = workflow.handle(Intent::SubmitSave);
            assert_eq!(step, Step::Rejected(ValidationError::MissingField(field)));
            assert!(!workflow.session().is_saving());
        }

        let mut workflow = Workflow::new();
        let ticket = manual_lookup(&mut workflow, "");
        let _ = workflow.handle(Intent::LookupSettled {
            ticket,
            resolution: Resolution::Resolved("X".to_string()),
        });
        let _ = workflow.handle(Intent::EditField(FormField::Price, "1".to_string()));
        let _ = workflow.handle(Intent::SelectLocation(Some(Location::Dlf)));
        assert_eq!(
            workflow.handle(Intent::SubmitSave),
            Step::Rejected(ValidationError::MissingIsbn)
        );
    }

    #[test]
    fn test_zero_quantity_and_bare_point_price_are_rejected() {
        let mut workflow = filled_price_entry();
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Quantity, "0".to_string())),
            Step::Applied
        );
        assert_eq!(
            workflow.handle(Intent::SubmitSave),
            Step::Rejected(ValidationError::MissingField(FormField::Quantity))
        );
        assert!(!workflow.session().is_saving());

        let mut workflow = filled_price_entry();
        let _ = workflow.handle(Intent::EditField(FormField::Price, ".".to_string()));
        assert_eq!(
            workflow.handle(Intent::SubmitSave),
            Step::Rejected(ValidationError::MissingField(FormField::Price))
        );
        assert!(!workflow.session().is_saving());
    }

    #[test]
    fn test_back_mid_save_discards_late_result() {
        let mut workflow = filled_price_entry();
        let ticket = persist_ticket(&workflow.handle(Intent::SubmitSave));
        let _ = workflow.handle(Intent::Back);
        assert_eq!(workflow.session(), &Session::default());

        let step = workflow.handle(Intent::SaveSettled {
            ticket,
            report: SaveReport::Saved,
        });
        assert_eq!(step, Step::Ignored);
        assert_eq!(workflow.session(), &Session::default());
    }

    #[test]
    fn test_back_from_every_view_resets() {
        let mut from_manual = Workflow::new();
        let _ = from_manual.handle(Intent::StartManualEntry);
        let _ = from_manual.handle(Intent::EditManualIsbn("978".to_string()));
        let _ = from_manual.handle(Intent::Back);
        assert_eq!(from_manual.session(), &Session::default());

        let mut from_saved = filled_price_entry();
        let ticket = persist_ticket(&from_saved.handle(Intent::SubmitSave));
        let _ = from_saved.handle(Intent::SaveSettled {
            ticket,
            report: SaveReport::Saved,
        });
        let _ = from_saved.handle(Intent::Back);
        assert_eq!(from_saved.session(), &Session::default());

        let mut from_scan = Workflow::new();
        assert_eq!(from_scan.handle(Intent::Back), Step::Applied);
        assert_eq!(from_scan.session(), &Session::default());
    }

    #[test]
    fn test_price_and_quantity_input_constraints() {
        let mut workflow = price_entry(Resolution::Unresolved);
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Price, "12.5".to_string())),
            Step::Applied
        );
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Price, "12.5.".to_string())),
            Step::Ignored
        );
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Quantity, "3a".to_string())),
            Step::Ignored
        );
        assert_eq!(workflow.session().price(), "12.5");
        assert_eq!(workflow.session().quantity(), "1");
    }

    #[test]
    fn test_location_by_code() {
        let mut workflow = price_entry(Resolution::Unresolved);
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Location, "GRANDMALL".to_string())),
            Step::Applied
        );
        assert_eq!(workflow.session().location(), Some(Location::GrandMall));
        assert_eq!(
            workflow.handle(Intent::EditField(FormField::Location, "MOON".to_string())),
            Step::Ignored
        );
        assert_eq!(workflow.session().location(), Some(Location::GrandMall));
    }

    #[test]
    fn test_form_edits_ignored_while_saving() {
        let mut workflow = filled_price_entry();
        let _ = persist_ticket(&workflow.handle(Intent::SubmitSave));
        assert_eq!(
            workflow.handle(Intent::SelectLocation(Some(Location::Warehouse))),
            Step::Ignored
        );
        assert_eq!(workflow.session().location(), Some(Location::Dlf));
    }
}
