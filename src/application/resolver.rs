//! Title resolution with guaranteed fallback.

use crate::domain::{Resolution, TitleLookup};
use std::sync::Arc;
use tracing::{info, warn};

/// Looks up a title for an ISBN and always produces a usable outcome.
///
/// Lookup failures are logged and reported as [`Resolution::Unresolved`],
/// which sends the user to manual title entry instead of an error.
#[derive(Clone)]
pub struct MetadataResolver {
    lookup: Arc<dyn TitleLookup>,
}

impl MetadataResolver {
    pub fn new(lookup: Arc<dyn TitleLookup>) -> Self {
        Self { lookup }
    }

    /// Blocks until the lookup settles.
    pub fn resolve(&self, isbn: &str) -> Resolution {
        let outcome = self.lookup.lookup(isbn);
        if let Err(error) = &outcome {
            warn!(isbn, %error, "title lookup failed, falling back to manual entry");
        }

        let resolution = Resolution::from_lookup(outcome);
        match &resolution {
            Resolution::Resolved(title) => info!(isbn, title = title.as_str(), "title resolved"),
            Resolution::Unresolved => info!(isbn, "no title found"),
        }
        resolution
    }
}
