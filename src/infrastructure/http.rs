use crate::domain::{BookRecord, LookupError, RecordStore, SaveError, TitleLookup};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// JSON-over-HTTP client for the title lookup and save endpoints.
pub struct HttpCatalog {
    client: Client,
    lookup_url: String,
    save_url: String,
}

#[derive(Debug, Serialize)]
struct LookupRequest<'a> {
    isbn: &'a str,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    title: Option<String>,
}

impl HttpCatalog {
    pub fn new(
        lookup_url: impl Into<String>,
        save_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            lookup_url: lookup_url.into(),
            save_url: save_url.into(),
        })
    }
}

impl TitleLookup for HttpCatalog {
    // The body is read regardless of status; the endpoint answers unknown
    // ISBNs with a body that simply lacks a title.
    fn lookup(&self, isbn: &str) -> Result<Option<String>, LookupError> {
        let response = self
            .client
            .post(&self.lookup_url)
            .json(&LookupRequest { isbn })
            .send()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        debug!(isbn, status = response.status().as_u16(), "lookup response");

        let body = response
            .text()
            .map_err(|e| LookupError::Transport(e.to_string()))?;
        let parsed: LookupResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::Parse(e.to_string()))?;
        Ok(parsed.title)
    }
}

impl RecordStore for HttpCatalog {
    fn persist(&self, record: &BookRecord) -> Result<(), SaveError> {
        let response = self
            .client
            .post(&self.save_url)
            .json(record)
            .send()
            .map_err(|e| SaveError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(isbn = record.isbn.as_str(), status = status.as_u16(), "save response");
        if !status.is_success() {
            return Err(SaveError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SaveError::Transport(e.to_string()))?;
        serde_json::from_str::<serde_json::Value>(&body)
            .map_err(|e| SaveError::Parse(e.to_string()))?;
        Ok(())
    }
}
