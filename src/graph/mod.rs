//! Family graph module: relationship indexing, type enrichment and BFS
//! graph construction.
//!
//! Pipeline: people (+ flat relationships) -> [`RelationshipIndex`] ->
//! [`enrich_relationship_types`] -> [`build_family_graph`].
//!
//! [`RelationshipIndex`]: crate::model::RelationshipIndex

mod enrichment;
mod node;
mod relationships;
mod traversal;

pub use enrichment::enrich_relationship_types;
pub use node::{age_from_birth_date, materialize_node, parse_birth_date, DAYS_PER_YEAR};
pub use relationships::{
    build_relationship_map, group_relationships, is_family_relationship_type, merge_relationship_maps,
    FAMILY_RELATIONSHIP_TYPES,
};
pub use traversal::{build_family_graph, build_family_graph_with, GraphOptions};
