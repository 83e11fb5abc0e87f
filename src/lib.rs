//! RUC registry SDK for Rust.
//!
//! Provides a client for a RUC (Peruvian taxpayer registry) lookup service:
//! fetch one record, list every stored record, and soft-delete or restore
//! records. On top of the client sit the view models of a lookup screen and a
//! paginated list screen.
//!
//! # Quick start
//!
//! ```no_run
//! use ruc_sdk::RucSdk;
//!
//! let sdk = RucSdk::builder().from_env().build().unwrap();
//!
//! // Look up one RUC
//! let record = sdk.search().lookup("20131312955").unwrap();
//!
//! // Browse the stored list
//! let mut list = sdk.list();
//! list.load();
//! for row in list.page().rows {
//!     println!("{} {}", row.ruc, row.razon_social);
//! }
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod status;
pub mod views;

#[cfg(feature = "async")]
pub use async_client::AsyncRucSdk;
pub use client::{RucClient, RucService};
pub use error::{Operation, Result, RucError};
pub use models::{Ruc, RucRecord, RucValidationError};

use std::fmt;
use std::time::Duration;

use views::{ListController, SearchForm};

// ---------------------------------------------------------------------------
// RucSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`RucSdk`] instance.
///
/// Use [`RucSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](RucSdkBuilder::build) to create the SDK.
#[derive(Debug, Clone)]
pub struct RucSdkBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl Default for RucSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl RucSdkBuilder {
    /// Set the service base URL. Defaults to [`config::DEFAULT_BASE_URL`].
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a request timeout.
    ///
    /// By default requests have no timeout and wait for the server.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read `RUC_API_BASE_URL` and `RUC_API_TIMEOUT_SECS`, keeping the current
    /// values for variables that are unset.
    pub fn from_env(mut self) -> Self {
        if std::env::var(config::BASE_URL_ENV).is_ok() {
            self.base_url = config::base_url_from_env();
        }
        if let Some(timeout) = config::timeout_from_env() {
            self.timeout = Some(timeout);
        }
        self
    }

    /// Build the SDK. Fails only on an unusable base URL; no request is made.
    pub fn build(self) -> Result<RucSdk> {
        let client = RucClient::new(&self.base_url, self.timeout)?;
        Ok(RucSdk { client })
    }
}

// ---------------------------------------------------------------------------
// RucSdk
// ---------------------------------------------------------------------------

/// The main entry point for the RUC SDK.
///
/// Owns a [`RucClient`] and hands out view models that borrow it.
#[derive(Debug, Clone)]
pub struct RucSdk {
    client: RucClient,
}

impl RucSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> RucSdkBuilder {
        RucSdkBuilder::default()
    }

    /// The underlying HTTP client, for direct calls.
    pub fn client(&self) -> &RucClient {
        &self.client
    }

    /// A fresh lookup form.
    pub fn search(&self) -> SearchForm<'_, RucClient> {
        SearchForm::new(&self.client)
    }

    /// A fresh list controller in its initial loading state. Call
    /// [`ListController::load`] to fetch the collection.
    pub fn list(&self) -> ListController<'_, RucClient> {
        ListController::new(&self.client)
    }
}

impl fmt::Display for RucSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RucSdk(base_url={})", self.client.base_url())
    }
}
