//! Runs lookups and saves off the event loop.
//!
//! Each command gets its own named worker thread. Whatever happens on that
//! thread, exactly one settlement intent is posted back to the event queue,
//! so the session can never stay stuck in a resolving or saving phase.

use crate::application::{Command, Dispatch, Intent, MetadataResolver, RecordSaver, SaveReport};
use crate::domain::Resolution;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::thread;
use tracing::{debug, error};

pub struct Dispatcher {
    resolver: MetadataResolver,
    saver: RecordSaver,
    events: Sender<Intent>,
}

impl Dispatcher {
    pub fn new(resolver: MetadataResolver, saver: RecordSaver, events: Sender<Intent>) -> Self {
        Self {
            resolver,
            saver,
            events,
        }
    }

    fn spawn<F>(&self, name: String, work: F, fallback: Intent)
    where
        F: FnOnce() -> Intent + Send + 'static,
    {
        let events = self.events.clone();
        let on_panic = fallback.clone();
        let spawned = thread::Builder::new().name(name).spawn(move || {
            let settled = panic::catch_unwind(AssertUnwindSafe(work)).unwrap_or_else(|_| {
                error!("worker panicked, settling with fallback");
                on_panic
            });
            if events.send(settled).is_err() {
                debug!("event queue closed before settlement");
            }
        });

        if let Err(err) = spawned {
            error!(error = %err, "could not start worker thread");
            if self.events.send(fallback).is_err() {
                debug!("event queue closed before settlement");
            }
        }
    }
}

impl Dispatch for Dispatcher {
    fn dispatch(&self, command: Command) {
        match command {
            Command::Lookup { ticket, isbn } => {
                let resolver = self.resolver.clone();
                self.spawn(
                    format!("lookup-{}", ticket.0),
                    move || Intent::LookupSettled {
                        ticket,
                        resolution: resolver.resolve(&isbn),
                    },
                    Intent::LookupSettled {
                        ticket,
                        resolution: Resolution::Unresolved,
                    },
                );
            }
            Command::Persist { ticket, record } => {
                let saver = self.saver.clone();
                self.spawn(
                    format!("save-{}", ticket.0),
                    move || Intent::SaveSettled {
                        ticket,
                        report: saver.save(&record),
                    },
                    Intent::SaveSettled {
                        ticket,
                        report: SaveReport::Failed {
                            reason: "save worker did not finish".to_string(),
                        },
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, View};
    use crate::domain::{
        BookRecord, FormField, Location, LookupError, RecordStore, SaveError, Ticket, TitleLookup,
    };
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedLookup(Option<&'static str>);

    impl TitleLookup for FixedLookup {
        fn lookup(&self, _isbn: &str) -> Result<Option<String>, LookupError> {
            Ok(self.0.map(str::to_string))
        }
    }

    struct PanickingLookup;

    impl TitleLookup for PanickingLookup {
        fn lookup(&self, _isbn: &str) -> Result<Option<String>, LookupError> {
            panic!("lookup exploded");
        }
    }

    struct FailingStore;

    impl RecordStore for FailingStore {
        fn persist(&self, _record: &BookRecord) -> Result<(), SaveError> {
            Err(SaveError::Transport("connection reset".to_string()))
        }
    }

    fn dispatcher(lookup: Arc<dyn TitleLookup>) -> (Dispatcher, Receiver<Intent>) {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(
            MetadataResolver::new(lookup),
            RecordSaver::new(Arc::new(FailingStore)),
            tx,
        );
        (dispatcher, rx)
    }

    fn next(rx: &Receiver<Intent>) -> Intent {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_lookup_settles_on_queue() {
        let (dispatcher, rx) = dispatcher(Arc::new(FixedLookup(Some("Dune"))));
        dispatcher.dispatch(Command::Lookup {
            ticket: Ticket(7),
            isbn: "978".to_string(),
        });
        assert_eq!(
            next(&rx),
            Intent::LookupSettled {
                ticket: Ticket(7),
                resolution: Resolution::Resolved("Dune".to_string())
            }
        );
    }

    #[test]
    fn test_panicking_lookup_still_settles() {
        let (dispatcher, rx) = dispatcher(Arc::new(PanickingLookup));
        dispatcher.dispatch(Command::Lookup {
            ticket: Ticket(2),
            isbn: "978".to_string(),
        });
        assert_eq!(
            next(&rx),
            Intent::LookupSettled {
                ticket: Ticket(2),
                resolution: Resolution::Unresolved
            }
        );
    }

    #[test]
    fn test_failed_save_settles_with_report() {
        let (dispatcher, rx) = dispatcher(Arc::new(FixedLookup(None)));
        dispatcher.dispatch(Command::Persist {
            ticket: Ticket(4),
            record: BookRecord {
                isbn: "1".to_string(),
                title: "T".to_string(),
                price: "1".to_string(),
                quantity: "1".to_string(),
                location: Location::Skywalk,
            },
        });
        match next(&rx) {
            Intent::SaveSettled { ticket, report } => {
                assert_eq!(ticket, Ticket(4));
                assert!(!report.is_saved());
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn test_end_to_end_through_event_queue() {
        let (dispatcher, rx) = dispatcher(Arc::new(FixedLookup(None)));
        let mut app = App::new(Box::new(dispatcher));

        app.start_live_scan();
        app.on_detected("0000000000".to_string());
        assert!(app.workflow.session().is_resolving());

        app.apply(next(&rx));
        assert_eq!(app.view(), View::PriceEntry);
        assert!(app.workflow.session().title_entry_required());

        for c in "Manual".chars() {
            app.insert_char(c);
        }
        app.focus_next();
        app.insert_char('5');
        app.cycle_location(true);
        app.submit_save();
        assert!(app.workflow.session().is_saving());

        app.apply(next(&rx));
        let session = app.workflow.session();
        assert!(!session.is_saving());
        assert!(!session.is_saved());
        assert_eq!(session.save_message(), "Error while saving");
        assert_eq!(session.price(), "5");
        assert_eq!(app.focus, FormField::Price);
    }
}
