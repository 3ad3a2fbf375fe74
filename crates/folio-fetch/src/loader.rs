//! Generic collection loader with a bundled fallback.

use std::sync::Arc;

use folio_core::{LoadOutcome, Record};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::source::{ResourceRequest, ResourceSource};
use crate::{FetchError, Result};

/// Turns a decoded body into a typed collection, or rejects its shape.
pub type ShapeValidator<T> = fn(serde_json::Value) -> Result<Vec<T>>;

/// Accept only a JSON array whose elements decode as `T`.
pub fn expect_sequence<T: DeserializeOwned>(body: serde_json::Value) -> Result<Vec<T>> {
    if !body.is_array() {
        return Err(FetchError::not_a_sequence());
    }
    serde_json::from_value(body).map_err(|e| FetchError::bad_elements(e.to_string()))
}

/// Loads one section's collection, falling back to bundled data.
///
/// Parameterized by the endpoint (via [`ResourceRequest`]), the shape
/// validator, and the fallback collection. The same loader serves every
/// fetched section.
pub struct ResourceLoader<T: Record> {
    source: Arc<dyn ResourceSource>,
    request: ResourceRequest,
    validator: ShapeValidator<T>,
    fallback: Vec<T>,
}

impl<T: Record> ResourceLoader<T> {
    /// Creates a loader for `T`'s own endpoint.
    ///
    /// # Arguments
    ///
    /// * `source` - Where the read goes
    /// * `fallback` - Collection used when the read fails
    pub fn new(source: Arc<dyn ResourceSource>, fallback: Vec<T>) -> Self {
        Self {
            source,
            request: ResourceRequest::for_record::<T>(),
            validator: expect_sequence::<T>,
            fallback,
        }
    }

    /// Read from a different endpoint.
    pub fn with_request(mut self, request: ResourceRequest) -> Self {
        self.request = request;
        self
    }

    /// Replace the shape validator.
    pub fn with_validator(mut self, validator: ShapeValidator<T>) -> Self {
        self.validator = validator;
        self
    }

    /// The request this loader issues.
    pub fn request(&self) -> &ResourceRequest {
        &self.request
    }

    /// Perform the read and validate its shape, without falling back.
    pub async fn try_load(&self) -> Result<Vec<T>> {
        let body = self.source.fetch(&self.request).await?;
        (self.validator)(body)
    }

    /// Perform the read once; never fails.
    ///
    /// Any error is turned into its display message and paired with the
    /// fallback collection.
    pub async fn load(&self) -> LoadOutcome<T> {
        match self.try_load().await {
            Ok(items) => {
                info!(
                    path = %self.request.path,
                    count = items.len(),
                    "loaded {}", T::NOUN
                );
                LoadOutcome::Live(items)
            }
            Err(e) => {
                warn!(
                    path = %self.request.path,
                    error = %e,
                    fallback = self.fallback.len(),
                    "using fallback {}", T::NOUN
                );
                LoadOutcome::Fallback {
                    items: self.fallback.clone(),
                    error: e.to_string(),
                }
            }
        }
    }
}
