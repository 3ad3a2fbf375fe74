//! Folio Core: records, section state, view mapping, and markup.
//!
//! This crate holds everything about a portfolio section that does not
//! touch the network. It has no internal Folio dependencies.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`models`]: Certificate, project, and education records
//! - [`content`]: Bundled site content (section text and fallback data)
//! - [`selection`]: Validated selection index
//! - [`section`]: Per-section state (loading, error, items, selection)
//! - [`view`]: Pure mapping from section state to a visual state
//! - [`markup`]: HTML fragments for each section
//! - [`traits`]: Configuration provider abstraction

pub mod content;
pub mod error;
pub mod format;
pub mod markup;
pub mod models;
pub mod section;
pub mod selection;
pub mod traits;
pub mod view;

// Re-export key types at crate root for convenience
pub use content::{SectionContent, SiteContent};
pub use error::{Error, Result};
pub use models::{Certificate, EducationEntry, EducationLevel, EducationStatus, Project, Record};
pub use section::{LoadOutcome, SectionState};
pub use selection::Selection;
pub use traits::ConfigProvider;
pub use view::SectionView;
