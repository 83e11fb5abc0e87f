//! HTTP client for the RUC registry service.
//!
//! Translates the four logical operations into requests against a single base
//! URL and folds every failure (transport, HTTP status, undecodable body) into
//! a [`RucError`]. Nothing past this module has to deal with `reqwest` errors
//! directly.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | fetch one | GET    | `/fetch/{ruc}` |
//! | list all  | GET    | `/list` |
//! | delete    | PATCH  | `/delete/{ruc}` |
//! | restore   | PATCH  | `/restore/{ruc}` |

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, warn};

use crate::error::{Operation, RucError, Result};
use crate::models::{Ruc, RucRecord};

// ---------------------------------------------------------------------------
// RucService
// ---------------------------------------------------------------------------

/// The operations the views need from the registry service.
///
/// [`RucClient`] is the HTTP implementation; tests and embedders can supply
/// their own.
pub trait RucService {
    /// Fetch a single record. A missing record is [`RucError::NotFound`].
    fn fetch_one(&self, ruc: &Ruc) -> Result<RucRecord>;

    /// Fetch every stored record, deleted ones included. An empty list is a
    /// valid answer.
    fn list_all(&self) -> Result<Vec<RucRecord>>;

    /// Set the soft-delete flag of a record.
    fn set_deleted(&self, ruc: &str, deleted: bool) -> Result<()>;

    fn soft_delete(&self, ruc: &str) -> Result<()> {
        self.set_deleted(ruc, true)
    }

    fn restore(&self, ruc: &str) -> Result<()> {
        self.set_deleted(ruc, false)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteFlag {
    is_delete: bool,
}

// ---------------------------------------------------------------------------
// RucClient
// ---------------------------------------------------------------------------

/// Blocking HTTP client for the RUC service.
///
/// Requests are never retried. Without a timeout a hung request blocks the
/// caller until the server answers or the connection drops.
#[derive(Debug, Clone)]
pub struct RucClient {
    base_url: Url,
    http: Client,
}

impl RucClient {
    /// Create a client for `base_url` (e.g. `https://host/api/ruc`).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| RucError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(RucError::Config(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RucError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append path segments to the base URL. Segments are percent-encoded,
    /// so an identifier can never escape its path position.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                RucError::Config(format!("base URL {} cannot carry a path", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn send(&self, operation: Operation, request: RequestBuilder) -> Result<Response> {
        request.send().map_err(|source| unreachable(operation, source))
    }
}

fn unreachable(operation: Operation, source: reqwest::Error) -> RucError {
    error!(?operation, error = %source, "RUC service request failed");
    RucError::Unreachable { operation, source }
}

/// Turn a non-2xx response into a [`RucError::Server`], reading the
/// best-effort `{"message": ...}` body.
fn server_error(operation: Operation, resp: Response) -> RucError {
    let status = resp.status().as_u16();
    let reported = resp
        .json::<serde_json::Value>()
        .ok()
        .and_then(|body| {
            body.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        });
    warn!(?operation, status, message = ?reported, "RUC service returned an error status");
    RucError::server(status, reported)
}

impl RucService for RucClient {
    fn fetch_one(&self, ruc: &Ruc) -> Result<RucRecord> {
        let url = self.endpoint(&["fetch", ruc.as_str()])?;
        debug!(%url, "fetching RUC");
        let resp = self.send(Operation::Fetch, self.http.get(url))?;

        if resp.status() == StatusCode::NOT_FOUND {
            warn!(ruc = %ruc, "RUC not found");
            return Err(RucError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(server_error(Operation::Fetch, resp));
        }

        resp.json::<RucRecord>()
            .map_err(|source| unreachable(Operation::Fetch, source))
    }

    fn list_all(&self) -> Result<Vec<RucRecord>> {
        let url = self.endpoint(&["list"])?;
        debug!(%url, "listing RUCs");
        let resp = self.send(Operation::List, self.http.get(url))?;

        if !resp.status().is_success() {
            return Err(server_error(Operation::List, resp));
        }

        resp.json::<Vec<RucRecord>>()
            .map_err(|source| unreachable(Operation::List, source))
    }

    fn set_deleted(&self, ruc: &str, deleted: bool) -> Result<()> {
        let (operation, action) = if deleted {
            (Operation::Delete, "delete")
        } else {
            (Operation::Restore, "restore")
        };
        let url = self.endpoint(&[action, ruc])?;
        debug!(%url, deleted, "updating RUC delete flag");
        let request = self.http.patch(url).json(&DeleteFlag { is_delete: deleted });
        let resp = self.send(operation, request)?;

        if !resp.status().is_success() {
            return Err(server_error(operation, resp));
        }
        Ok(())
    }
}
