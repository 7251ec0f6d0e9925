//! Relationship-type enrichment: resolve type IDs to slugs and labels.

use std::collections::HashMap;

use crate::model::{RelationshipIndex, RelationshipType};

/// Fill in slug and name on every record that references a relationship
/// type by ID but carries no slug of its own.
///
/// Records that already have a slug, or whose type ID is not in `types`,
/// are left as they are. Returns the number of records enriched.
pub fn enrich_relationship_types(index: &mut RelationshipIndex, types: &[RelationshipType]) -> usize {
    let by_id: HashMap<i64, &RelationshipType> = types.iter().map(|t| (t.id, t)).collect();
    let mut enriched = 0;

    for record in index.values_mut().flatten() {
        if record.slug().is_some() {
            continue;
        }
        let Some(rel_type) = record.relationship_type.and_then(|id| by_id.get(&id)) else {
            continue;
        };
        record.relationship_type_slug = Some(rel_type.slug.clone());
        if record.relationship_name.as_deref().map_or(true, str::is_empty) {
            record.relationship_name = Some(rel_type.name.clone());
        }
        if record.relationship_label.is_none() {
            record.relationship_label = Some(rel_type.name.clone());
        }
        enriched += 1;
    }

    log::debug!("Enriched {} relationship records with type slugs", enriched);
    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::group_relationships;
    use crate::model::RelationshipRecord;

    fn types() -> Vec<RelationshipType> {
        vec![
            RelationshipType { id: 10, slug: "parent".to_string(), name: "Parent".to_string() },
            RelationshipType { id: 11, slug: "child".to_string(), name: "Child".to_string() },
        ]
    }

    #[test]
    fn test_enrich_resolves_type_ids() {
        let mut index = group_relationships(vec![
            RelationshipRecord::with_type_id(2, 10).from_person(1),
            RelationshipRecord::with_type_id(1, 11).from_person(2),
        ]);
        let count = enrich_relationship_types(&mut index, &types());
        assert_eq!(count, 2);
        let record = &index[&1][0];
        assert_eq!(record.relationship_type_slug.as_deref(), Some("parent"));
        assert_eq!(record.relationship_name.as_deref(), Some("Parent"));
        assert_eq!(record.relationship_label.as_deref(), Some("Parent"));
    }

    #[test]
    fn test_enrich_keeps_existing_slug_and_name() {
        let mut index = group_relationships(vec![
            RelationshipRecord::new(2, "colleague").from_person(1),
            RelationshipRecord::with_type_id(3, 10).named("Mother").from_person(1),
        ]);
        let count = enrich_relationship_types(&mut index, &types());
        assert_eq!(count, 1);
        assert_eq!(index[&1][0].relationship_type_slug.as_deref(), Some("colleague"));
        assert_eq!(index[&1][1].relationship_type_slug.as_deref(), Some("parent"));
        assert_eq!(index[&1][1].relationship_name.as_deref(), Some("Mother"));
    }

    #[test]
    fn test_enrich_unknown_type_untouched() {
        let mut index = group_relationships(vec![RelationshipRecord::with_type_id(2, 99).from_person(1)]);
        let count = enrich_relationship_types(&mut index, &types());
        assert_eq!(count, 0);
        assert!(index[&1][0].relationship_type_slug.is_none());
    }
}
