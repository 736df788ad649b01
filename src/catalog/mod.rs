//! Remote service catalog
//!
//! Record model, error types and the HTTP client for the catalog endpoint.

pub mod client;
pub mod error;
pub mod record;

pub use client::{HttpCatalog, ServiceCatalog};
pub use error::CatalogError;
pub use record::{ServiceId, ServiceRecord, UNCATEGORIZED};
