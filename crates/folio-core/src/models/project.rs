use serde::{Deserialize, Serialize};

use super::Record;

/// A showcased project.
///
/// Only the title is mandatory: the bundled stand-ins used as fallback data
/// carry far fewer fields than the API records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Record identifier.
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Project title.
    #[serde(rename = "titre")]
    pub title: String,

    /// Short description.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub description: String,

    /// Technology tags.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub technologies: Vec<String>,

    /// Code repository link; may be empty.
    #[serde(rename = "lienCode", default, deserialize_with = "super::null_as_default")]
    pub code_link: String,

    /// Image URLs.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<String>,

    /// Optional demo video URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

impl Project {
    /// The repository link, if it is not blank.
    pub fn code_link(&self) -> Option<&str> {
        let link = self.code_link.trim();
        (!link.is_empty()).then_some(link)
    }

    /// The video link, if present and not blank.
    pub fn video(&self) -> Option<&str> {
        self.video
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

impl Record for Project {
    const NOUN: &'static str = "projects";
    const ENDPOINT: &'static str = "/projets/getProjects";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_project_full_record() {
        let json = r#"{
            "_id": "p1",
            "titre": "Folio",
            "description": "Portfolio site",
            "technologies": ["Rust", "HTML"],
            "lienCode": "https://example.com/folio",
            "images": ["/img/1.png"],
            "video": "https://example.com/demo.mp4"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.technologies, vec!["Rust", "HTML"]);
        assert_eq!(project.code_link(), Some("https://example.com/folio"));
        assert_eq!(project.video(), Some("https://example.com/demo.mp4"));
    }

    #[test]
    fn test_project_nulls_read_as_empty() {
        let json = r#"{
            "_id": "1",
            "titre": "A",
            "description": null,
            "technologies": null,
            "lienCode": null,
            "images": null,
            "video": null
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.description.is_empty());
        assert!(project.technologies.is_empty());
        assert!(project.code_link().is_none());
        assert!(project.images.is_empty());
        assert!(project.video().is_none());
    }

    #[test]
    fn test_project_stand_in_defaults() {
        let project: Project = serde_json::from_str(r#"{"titre": "Stand-in"}"#).unwrap();
        assert_eq!(project.title, "Stand-in");
        assert!(project.id.is_empty());
        assert!(project.technologies.is_empty());
        assert!(project.code_link().is_none());
        assert!(project.video().is_none());
    }
}
