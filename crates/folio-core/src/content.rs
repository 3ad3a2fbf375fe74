//! Bundled site content: section headings and fallback collections.
//!
//! The document ships inside the binary and can be replaced by a file on
//! disk. It is parsed once at startup and handed to each section; nothing
//! reads it through global state.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Certificate, EducationEntry, Project};
use crate::{Error, Result};

/// Default content bundled at compile time.
const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

/// Heading text and fallback items for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionContent<T> {
    /// Section title.
    #[serde(default)]
    pub title: String,

    /// Line shown under the title.
    #[serde(default)]
    pub subtitle: String,

    /// Fallback collection (the only collection, for config-only sections).
    #[serde(
        default = "Vec::new",
        alias = "certificates",
        alias = "education",
        alias = "projects"
    )]
    pub items: Vec<T>,
}

impl<T> Default for SectionContent<T> {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            items: Vec::new(),
        }
    }
}

/// The whole site content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    /// Certificates section.
    pub certificates: SectionContent<Certificate>,
    /// Education section.
    pub education: SectionContent<EducationEntry>,
    /// Projects section.
    pub projects: SectionContent<Project>,
}

impl SiteContent {
    /// Parse the content bundled with the crate.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// Parse a content document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_data(format!("site content: {e}")))
    }

    /// Read a content document from a file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_json(&text)
    }

    /// Load from `path` when given, otherwise use the bundled document.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => {
                debug!(path = %p.display(), "loading site content from file");
                Self::from_path(p)
            }
            None => Self::bundled(),
        }
    }
}
