use serde::{Deserialize, Serialize};

use super::Record;

/// A certificate obtained from an issuing organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificate {
    /// Record identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Certificate title.
    #[serde(rename = "titre")]
    pub title: String,

    /// Issuing organization.
    #[serde(rename = "organisme")]
    pub organization: String,

    /// Date obtained, as a timestamp string.
    #[serde(rename = "dateObtention")]
    pub obtained_on: String,

    /// External verification link; may be empty.
    #[serde(rename = "lien", default, deserialize_with = "super::null_as_default")]
    pub link: String,

    /// Image URLs.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub images: Vec<String>,

    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional skill tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
}

impl Certificate {
    /// The external link, if it is not blank.
    pub fn link(&self) -> Option<&str> {
        let link = self.link.trim();
        (!link.is_empty()).then_some(link)
    }

    /// Skill tags, empty when absent.
    pub fn skills(&self) -> &[String] {
        self.skills.as_deref().unwrap_or_default()
    }
}

impl Record for Certificate {
    const NOUN: &'static str = "certificates";
    const ENDPOINT: &'static str = "/certifs/getCertificates";
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_certificate_from_api_shape() {
        let json = r#"{
            "_id": "1",
            "titre": "Cert A",
            "organisme": "Org X",
            "dateObtention": "2023-01-01",
            "lien": "",
            "images": []
        }"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.id, "1");
        assert_eq!(cert.title, "Cert A");
        assert_eq!(cert.organization, "Org X");
        assert_eq!(cert.obtained_on, "2023-01-01");
        assert!(cert.link().is_none());
        assert!(cert.skills().is_empty());
        assert!(cert.description.is_none());
    }

    #[test]
    fn test_certificate_blank_link_is_none() {
        let cert = Certificate {
            id: "1".into(),
            title: "t".into(),
            organization: "o".into(),
            obtained_on: "2023-01-01".into(),
            link: "   ".into(),
            images: vec![],
            description: None,
            skills: None,
        };
        assert!(cert.link().is_none());
    }

    #[test]
    fn test_certificate_link_is_trimmed() {
        let json = r#"{"_id":"2","titre":"B","organisme":"O","dateObtention":"2022-05-01",
            "lien":" https://example.com/c ","images":["a.png"],"skills":["Rust"]}"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert_eq!(cert.link(), Some("https://example.com/c"));
        assert_eq!(cert.skills(), ["Rust".to_string()]);
        assert_eq!(cert.images.len(), 1);
    }

    #[test]
    fn test_certificate_null_link_and_images() {
        let json = r#"{"_id":"4","titre":"C","organisme":"O","dateObtention":"2021-02-03",
            "lien":null,"images":null,"description":null,"skills":null}"#;
        let cert: Certificate = serde_json::from_str(json).unwrap();
        assert!(cert.link().is_none());
        assert!(cert.images.is_empty());
        assert!(cert.skills().is_empty());
    }

    #[test]
    fn test_certificate_missing_required_field_fails() {
        let json = r#"{"_id":"3","organisme":"O","dateObtention":"2022"}"#;
        assert!(serde_json::from_str::<Certificate>(json).is_err());
    }
}
