use serde::{Deserialize, Deserializer, Serialize};

/// A single portfolio project as published in the catalog document.
///
/// Field names on the wire are camelCase (`imageUrl`, `demoUrl`, ...).
/// Everything except `name` is optional in the document and defaults to
/// empty/false so that a sparse record still renders. An explicit `null`
/// is treated the same as a missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// ISO calendar date (`YYYY-MM-DD`). Empty when unknown.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub highlights: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            date: date.into(),
            featured: false,
            image_url: None,
            demo_url: None,
            repo_url: None,
            highlights: Vec::new(),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Lowercased text the search box matches against:
    /// name, description, tags and highlights joined by spaces.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name,
            self.description,
            self.tags.join(" "),
            self.highlights.join(" ")
        )
        .to_lowercase()
    }

    /// Preferred outbound link: demo first, then repository.
    pub fn primary_link(&self) -> Option<&str> {
        self.demo_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.repo_url.as_deref().filter(|u| !u.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_record_deserializes_with_defaults() {
        let json = r#"{ "name": "Tiny" }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Tiny");
        assert!(record.tags.is_empty());
        assert!(!record.featured);
        assert_eq!(record.date, "");
        assert!(record.demo_url.is_none());
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let json = r#"{
            "name": "Nulls",
            "description": null,
            "tags": null,
            "date": null,
            "featured": null,
            "imageUrl": null,
            "highlights": null
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, ProjectRecord::new("Nulls", ""));
    }

    #[test]
    fn test_camel_case_fields() {
        let json = r#"{
            "name": "Site",
            "imageUrl": "img.png",
            "demoUrl": "https://demo",
            "repoUrl": "https://repo",
            "featured": true
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.image_url.as_deref(), Some("img.png"));
        assert_eq!(record.demo_url.as_deref(), Some("https://demo"));
        assert_eq!(record.repo_url.as_deref(), Some("https://repo"));
        assert!(record.featured);
    }

    #[test]
    fn test_search_haystack_is_lowercase_and_complete() {
        let mut record = ProjectRecord::new("Chat App", "2024-01-01");
        record.description = "Realtime".into();
        record.tags = vec!["React".into(), "Node.js".into()];
        record.highlights = vec!["WebSockets".into()];
        assert_eq!(
            record.search_haystack(),
            "chat app realtime react node.js websockets"
        );
    }

    #[test]
    fn test_primary_link_prefers_demo() {
        let mut record = ProjectRecord::new("A", "");
        assert_eq!(record.primary_link(), None);
        record.repo_url = Some("https://repo".into());
        assert_eq!(record.primary_link(), Some("https://repo"));
        record.demo_url = Some("https://demo".into());
        assert_eq!(record.primary_link(), Some("https://demo"));
    }
}
