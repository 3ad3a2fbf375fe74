//! Folio Fetch: one load per section, with a bundled fallback.
//!
//! A [`ResourceSource`] answers raw JSON for an endpoint path. A
//! [`ResourceLoader`] turns that into a typed collection, substituting the
//! fallback on any failure. A [`MountedSection`] runs the loader once in the
//! background and publishes the section state until it is unmounted.

mod error;
mod http;
mod loader;
mod mock;
mod mount;
mod source;

pub use error::{FetchError, Result};
pub use http::HttpSource;
pub use loader::{ResourceLoader, ShapeValidator, expect_sequence};
pub use mock::MockSource;
pub use mount::MountedSection;
pub use source::{ResourceRequest, ResourceSource};
