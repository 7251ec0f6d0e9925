use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Lookup from person ID to that person's outgoing relationship records.
/// A missing entry means the person has no relationships.
pub type RelationshipIndex = HashMap<i64, Vec<RelationshipRecord>>;

/// One directed relationship (owner --type--> related_person).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    /// Source person; only present in flat relationship lists.
    #[serde(default, deserialize_with = "super::optional_id", skip_serializing_if = "Option::is_none")]
    pub person: Option<i64>,
    #[serde(default, deserialize_with = "super::optional_id", skip_serializing_if = "Option::is_none")]
    pub related_person: Option<i64>,
    /// Relationship type ID, resolved to a slug by enrichment.
    #[serde(default, deserialize_with = "super::optional_id", skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<i64>,
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub relationship_type_slug: Option<String>,
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub relationship_name: Option<String>,
    #[serde(default, deserialize_with = "super::lenient", skip_serializing_if = "Option::is_none")]
    pub relationship_label: Option<String>,
}

impl RelationshipRecord {
    /// Record pointing at `related_person` with an inline type slug.
    pub fn new(related_person: i64, slug: impl Into<String>) -> Self {
        Self {
            related_person: Some(related_person),
            relationship_type_slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Record pointing at `related_person` through a relationship type ID.
    pub fn with_type_id(related_person: i64, type_id: i64) -> Self {
        Self {
            related_person: Some(related_person),
            relationship_type: Some(type_id),
            ..Self::default()
        }
    }

    pub fn from_person(mut self, person: i64) -> Self {
        self.person = Some(person);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.relationship_name = Some(name.into());
        self
    }

    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.relationship_label = Some(label.into());
        self
    }

    /// Type slug, treating an empty string as absent.
    pub fn slug(&self) -> Option<&str> {
        self.relationship_type_slug
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// Display label: `relationship_name`, then `relationship_label`, then empty.
    pub fn display_label(&self) -> &str {
        self.relationship_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.relationship_label.as_deref())
            .unwrap_or("")
    }
}

/// Entry in the relationship-type reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipType {
    pub id: i64,
    pub slug: String,
    #[serde(default)]
    pub name: String,
}
