//! Relationship classification and relationship-index construction.

use crate::model::{Person, RelationshipIndex, RelationshipRecord};

/// Relationship type slugs that make up a family tree.
pub const FAMILY_RELATIONSHIP_TYPES: &[&str] = &["parent", "child"];

/// Case-insensitive check against [`FAMILY_RELATIONSHIP_TYPES`].
pub fn is_family_relationship_type(slug: &str) -> bool {
    FAMILY_RELATIONSHIP_TYPES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(slug))
}

/// Index each person's own relationship records by person ID.
/// People without relationships get no entry. With duplicate person IDs the
/// last record wins, matching how the person lookup is built.
pub fn build_relationship_map(people: &[Person]) -> RelationshipIndex {
    let mut index = RelationshipIndex::new();
    for person in people {
        if person.acf.relationships.is_empty() {
            index.remove(&person.id);
            continue;
        }
        index.insert(person.id, person.acf.relationships.clone());
    }
    index
}

/// Group a flat relationship list by its source person, preserving order.
/// Records without a source person are dropped.
pub fn group_relationships(records: impl IntoIterator<Item = RelationshipRecord>) -> RelationshipIndex {
    let mut index = RelationshipIndex::new();
    let mut orphaned = 0usize;
    for record in records {
        match record.person {
            Some(source) => index.entry(source).or_default().push(record),
            None => orphaned += 1,
        }
    }
    if orphaned > 0 {
        log::debug!("Dropped {} relationship records without a source person", orphaned);
    }
    index
}

/// Append every record of `other` after the existing records of `index`.
pub fn merge_relationship_maps(index: &mut RelationshipIndex, other: RelationshipIndex) {
    for (source, records) in other {
        index.entry(source).or_default().extend(records);
    }
}
