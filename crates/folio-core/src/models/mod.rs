//! Record shapes served by the portfolio API and the bundled content.
//!
//! Field names on the wire follow the API (`_id`, `titre`, `organisme`, ...);
//! the Rust side uses English names and serde renames.

mod certificate;
mod education;
mod project;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

pub use certificate::Certificate;
pub use education::{EducationEntry, EducationLevel, EducationStatus, EducationSummary};
pub use project::Project;

/// A record that a section loads from a remote endpoint.
///
/// Implementors name their endpoint and the noun used in status messages,
/// so a single generic loader and renderer can serve every fetched section.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Plural noun used in status text ("certificates", "projects").
    const NOUN: &'static str;

    /// Read endpoint path, relative to the API base URL.
    const ENDPOINT: &'static str;
}

/// Read an explicit `null` as the field's empty value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
