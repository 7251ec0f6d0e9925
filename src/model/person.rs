use serde::{Deserialize, Serialize};

use super::RelationshipRecord;

/// A person record as exported by the CRM's REST API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    /// Display name; may contain HTML entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// WordPress post title, either plain or `{ "rendered": ... }`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, deserialize_with = "super::lenient")]
    pub acf: PersonFields,
    /// Image URL; WordPress sends `false` when there is none.
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// Custom fields attached to a person. Each field degrades on its own, so
/// an empty (`false`) field never takes its neighbours with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersonFields {
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "super::lenient_list")]
    pub relationships: Vec<RelationshipRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Title {
    Plain(String),
    Rendered { rendered: String },
}

impl Title {
    pub fn as_str(&self) -> &str {
        match self {
            Title::Plain(s) => s,
            Title::Rendered { rendered } => rendered,
        }
    }
}

impl Person {
    /// Create a person with just an ID and a name.
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Raw (still escaped) display name: `name`, then `title`, then empty.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.title.as_ref().map(Title::as_str))
            .unwrap_or("")
    }

    pub fn with_birth_date(mut self, birth_date: impl Into<String>) -> Self {
        self.acf.birth_date = Some(birth_date.into());
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.acf.gender = Some(gender.into());
        self
    }

    pub fn with_relationship(mut self, record: RelationshipRecord) -> Self {
        self.acf.relationships.push(record);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_name() {
        let mut person = Person::new(1, "Ada");
        person.title = Some(Title::Plain("Ignored".to_string()));
        assert_eq!(person.display_name(), "Ada");
    }

    #[test]
    fn test_display_name_falls_back_to_rendered_title() {
        let person: Person =
            serde_json::from_str(r#"{"id": 3, "title": {"rendered": "Jan &amp; Piet"}}"#).unwrap();
        assert_eq!(person.display_name(), "Jan &amp; Piet");
    }

    #[test]
    fn test_display_name_empty_when_missing() {
        let person: Person = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(person.display_name(), "");
    }

    #[test]
    fn test_acf_false_is_empty_fields() {
        let person: Person = serde_json::from_str(r#"{"id": 7, "acf": false}"#).unwrap();
        assert!(person.acf.birth_date.is_none());
        assert!(person.acf.relationships.is_empty());
    }

    #[test]
    fn test_acf_fields_parsed() {
        let json = r#"{
            "id": 7,
            "title": "Marie",
            "thumbnail": "https://example.org/m.jpg",
            "acf": {
                "birth_date": "1990-04-12",
                "gender": "female",
                "relationships": [
                    {"related_person": 8, "relationship_type_slug": "parent"}
                ]
            }
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.acf.birth_date.as_deref(), Some("1990-04-12"));
        assert_eq!(person.acf.gender.as_deref(), Some("female"));
        assert_eq!(person.acf.relationships.len(), 1);
        assert_eq!(person.acf.relationships[0].related_person, Some(8));
        assert_eq!(person.thumbnail.as_deref(), Some("https://example.org/m.jpg"));
    }

    #[test]
    fn test_false_gender_keeps_other_fields() {
        let json = r#"{"id": 7, "acf": {
            "gender": false,
            "birth_date": "2000-01-01",
            "relationships": [{"related_person": 8, "relationship_type_slug": "parent"}]
        }}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.acf.gender.is_none());
        assert_eq!(person.acf.birth_date.as_deref(), Some("2000-01-01"));
        assert_eq!(person.acf.relationships.len(), 1);
    }

    #[test]
    fn test_false_birth_date_is_none() {
        let json = r#"{"id": 7, "acf": {"birth_date": false, "gender": "male"}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert!(person.acf.birth_date.is_none());
        assert_eq!(person.acf.gender.as_deref(), Some("male"));
    }

    #[test]
    fn test_false_thumbnail_is_none() {
        let person: Person = serde_json::from_str(r#"{"id": 1, "name": "A", "thumbnail": false}"#).unwrap();
        assert!(person.thumbnail.is_none());
        assert_eq!(person.display_name(), "A");
    }

    #[test]
    fn test_false_label_keeps_relationship_list() {
        let json = r#"{"id": 7, "acf": {"relationships": [
            {"related_person": 8, "relationship_type_slug": "parent", "relationship_label": false},
            {"related_person": 9, "relationship_type_slug": "child", "relationship_name": "Son"}
        ]}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        let targets: Vec<_> = person.acf.relationships.iter().map(|r| r.related_person).collect();
        assert_eq!(targets, vec![Some(8), Some(9)]);
        assert!(person.acf.relationships[0].relationship_label.is_none());
    }

    #[test]
    fn test_malformed_relationship_entry_dropped_alone() {
        let json = r#"{"id": 7, "acf": {"relationships": [
            "garbage",
            {"related_person": 9, "relationship_type_slug": "child"}
        ]}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.acf.relationships.len(), 1);
        assert_eq!(person.acf.relationships[0].related_person, Some(9));
    }

    #[test]
    fn test_acf_relationships_false_is_empty() {
        let json = r#"{"id": 7, "acf": {"gender": "male", "relationships": false}}"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.acf.gender.as_deref(), Some("male"));
        assert!(person.acf.relationships.is_empty());
    }
}
