//! Async wrapper around [`RucSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs every request on the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! the blocking HTTP client waits on the network.
//!
//! # Example
//!
//! ```no_run
//! use ruc_sdk::AsyncRucSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncRucSdk::builder().build().await.unwrap();
//!
//!     let records = sdk.list_all().await.unwrap();
//!     if let Some(first) = records.first() {
//!         sdk.soft_delete(&first.ruc).await.unwrap();
//!     }
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::client::RucService;
use crate::error::{Result, RucError};
use crate::models::{Ruc, RucRecord};
use crate::{RucSdk, RucSdkBuilder};

// ---------------------------------------------------------------------------
// AsyncRucSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncRucSdk`] instance.
#[derive(Debug, Clone, Default)]
pub struct AsyncRucSdkBuilder {
    inner: RucSdkBuilder,
}

impl AsyncRucSdkBuilder {
    /// Set the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(url);
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Read configuration from the environment.
    pub fn from_env(mut self) -> Self {
        self.inner = self.inner.from_env();
        self
    }

    /// Build the async SDK.
    ///
    /// The blocking HTTP client is constructed on the blocking thread pool,
    /// since it must not be created inside an async context.
    pub async fn build(self) -> Result<AsyncRucSdk> {
        let sdk = tokio::task::spawn_blocking(move || self.inner.build())
            .await
            .map_err(join_error)??;
        Ok(AsyncRucSdk {
            inner: Arc::new(sdk),
        })
    }
}

fn join_error(e: tokio::task::JoinError) -> RucError {
    RucError::Config(format!("Task join error: {e}"))
}

// ---------------------------------------------------------------------------
// AsyncRucSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`RucSdk`].
///
/// The SDK is shared behind an [`Arc`]; concurrent calls each get their own
/// blocking thread and are not serialized.
#[derive(Debug, Clone)]
pub struct AsyncRucSdk {
    inner: Arc<RucSdk>,
}

impl AsyncRucSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncRucSdkBuilder {
        AsyncRucSdkBuilder::default()
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&RucSdk` and should return a `Result<T>`.
    ///
    /// ```no_run
    /// # use ruc_sdk::AsyncRucSdk;
    /// # async fn example() -> ruc_sdk::Result<()> {
    /// # let sdk = AsyncRucSdk::builder().build().await?;
    /// let page = sdk.run(|s| {
    ///     let mut list = s.list();
    ///     list.load();
    ///     Ok(list.page())
    /// }).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&RucSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&sdk))
            .await
            .map_err(join_error)?
    }

    /// Fetch one record.
    pub async fn fetch_one(&self, ruc: Ruc) -> Result<RucRecord> {
        self.run(move |s| s.client().fetch_one(&ruc)).await
    }

    /// Validate user input, then fetch the record it names.
    pub async fn lookup(&self, input: &str) -> Result<RucRecord> {
        let ruc = Ruc::parse(input)?;
        self.fetch_one(ruc).await
    }

    /// Fetch every stored record.
    pub async fn list_all(&self) -> Result<Vec<RucRecord>> {
        self.run(|s| s.client().list_all()).await
    }

    /// Soft-delete a record.
    pub async fn soft_delete(&self, ruc: &str) -> Result<()> {
        let ruc = ruc.to_string();
        self.run(move |s| s.client().soft_delete(&ruc)).await
    }

    /// Restore a soft-deleted record.
    pub async fn restore(&self, ruc: &str) -> Result<()> {
        let ruc = ruc.to_string();
        self.run(move |s| s.client().restore(&ruc)).await
    }
}
