//! Single-RUC lookup form.
//!
//! Input is validated before anything is sent; a rejected identifier never
//! reaches the service.

use crate::client::RucService;
use crate::error::{RucError, Result};
use crate::models::{Ruc, RucRecord};
use crate::views::notice::Notice;

pub const SEARCH_ERROR_TITLE: &str = "Error en la consulta";

/// Outcome of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(RucRecord),
    /// Input rejected before any request. Carries the field message.
    Rejected(String),
    /// The request was made and failed.
    Failed(Notice),
}

/// Lookup form state. Holds the last record found, if any.
pub struct SearchForm<'a, S: RucService + ?Sized> {
    service: &'a S,
    result: Option<RucRecord>,
}

impl<'a, S: RucService + ?Sized> SearchForm<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self {
            service,
            result: None,
        }
    }

    pub fn result(&self) -> Option<&RucRecord> {
        self.result.as_ref()
    }

    /// Validate `input` and fetch the record it names.
    pub fn lookup(&self, input: &str) -> Result<RucRecord> {
        let ruc = Ruc::parse(input)?;
        self.service.fetch_one(&ruc)
    }

    /// Submit the form. The previous result is cleared once validation
    /// passes, before the request is made.
    pub fn submit(&mut self, input: &str) -> SearchOutcome {
        let ruc = match Ruc::parse(input) {
            Ok(ruc) => ruc,
            Err(e) => return SearchOutcome::Rejected(e.to_string()),
        };
        self.result = None;
        match self.service.fetch_one(&ruc) {
            Ok(record) => {
                self.result = Some(record.clone());
                SearchOutcome::Found(record)
            }
            Err(err) => SearchOutcome::Failed(search_failed(&err)),
        }
    }
}

fn search_failed(err: &RucError) -> Notice {
    Notice::error(SEARCH_ERROR_TITLE, err)
}
