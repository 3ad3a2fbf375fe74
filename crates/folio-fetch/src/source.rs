//! Source abstraction for section data.

use async_trait::async_trait;
use folio_core::Record;

use crate::Result;

/// Anything that can answer a read request with raw JSON.
///
/// This trait allows swapping the HTTP backend for canned data in tests
/// without changing the loader.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Perform one read and return the decoded body.
    ///
    /// Implementations report non-success statuses and undecodable bodies
    /// as errors; shape validation is left to the caller.
    async fn fetch(&self, request: &ResourceRequest) -> Result<serde_json::Value>;
}

/// A read request for one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRequest {
    /// Endpoint path relative to the API base URL.
    pub path: String,

    /// Plural noun of the collection, for error messages.
    pub noun: &'static str,
}

impl ResourceRequest {
    /// Creates a request for an explicit path.
    pub fn new(path: impl Into<String>, noun: &'static str) -> Self {
        Self {
            path: path.into(),
            noun,
        }
    }

    /// Creates a request for a record type's own endpoint.
    pub fn for_record<T: Record>() -> Self {
        Self::new(T::ENDPOINT, T::NOUN)
    }
}
