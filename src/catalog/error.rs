//! Catalog error types
//!
//! Errors that can occur while fetching the service catalog. The view
//! collapses all of them into a single user-facing message; the variants
//! only exist so the logs say what actually went wrong.

use thiserror::Error;

/// Errors that can occur while fetching the remote catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Request could not be sent or the body could not be read
    #[error("Failed to reach service catalog: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog answered with a non-2xx status
    #[error("Service catalog returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, or a placeholder if it could not be read
        body: String,
    },

    /// Body was not a JSON array of service records
    #[error("Failed to parse service catalog response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Fetch task ended without delivering a result
    #[error("Catalog fetch ended without a result")]
    Interrupted,
}
