//! BFS family-graph construction over in-memory people and relationships.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::{DateTime, Utc};

use crate::decode::{EntityDecoder, HtmlDecoder};
use crate::graph::{is_family_relationship_type, materialize_node};
use crate::model::{FamilyGraph, GraphEdge, Person, RelationshipIndex};

/// Knobs for [`build_family_graph_with`].
#[derive(Clone, Copy)]
pub struct GraphOptions<'a> {
    /// Decoder applied to display names.
    pub decoder: &'a dyn HtmlDecoder,
    /// Reference instant for age derivation.
    pub now: DateTime<Utc>,
    /// Stop expanding people this many hops from the start. `None` = no limit.
    pub max_depth: Option<usize>,
}

impl Default for GraphOptions<'static> {
    fn default() -> Self {
        Self {
            decoder: &EntityDecoder,
            now: Utc::now(),
            max_depth: None,
        }
    }
}

/// Build the family graph reachable from `start_id` with default options.
pub fn build_family_graph(start_id: i64, people: &[Person], index: &RelationshipIndex) -> FamilyGraph {
    build_family_graph_with(start_id, people, index, &GraphOptions::default())
}

/// Traverse family relationships breadth-first from `start_id`.
///
/// Only `parent`/`child` records (or records with no type slug at all) are
/// followed. Dangling targets, self-references and unknown people are
/// skipped silently. An edge between two people is recorded once, whichever
/// side it was discovered from. If `start_id` is not among `people` the
/// result is empty.
pub fn build_family_graph_with(
    start_id: i64,
    people: &[Person],
    index: &RelationshipIndex,
    options: &GraphOptions<'_>,
) -> FamilyGraph {
    let lookup: HashMap<i64, &Person> = people.iter().map(|p| (p.id, p)).collect();

    let Some(start) = lookup.get(&start_id) else {
        log::debug!("Start person {} not found; returning empty graph", start_id);
        return FamilyGraph::default();
    };

    let mut graph = FamilyGraph::default();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut seen_nodes = HashSet::new();
    let mut seen_edges = HashSet::new();

    visited.insert(start_id);
    queue.push_back((start_id, 0usize));
    seen_nodes.insert(start_id);
    graph.nodes.push(materialize_node(start, options.decoder, options.now));

    while let Some((id, depth)) = queue.pop_front() {
        if options.max_depth.is_some_and(|max| depth >= max) {
            continue;
        }
        let Some(records) = index.get(&id) else {
            continue;
        };

        for record in records {
            if let Some(slug) = record.slug() {
                if !is_family_relationship_type(slug) {
                    continue;
                }
            }

            let Some(related_id) = record.related_person else {
                continue;
            };
            if related_id == id {
                log::trace!("Skipping self-referencing relationship on {}", id);
                continue;
            }
            let Some(related) = lookup.get(&related_id) else {
                log::trace!("Skipping dangling relationship {} -> {}", id, related_id);
                continue;
            };

            if seen_nodes.insert(related_id) {
                graph.nodes.push(materialize_node(related, options.decoder, options.now));
            }

            if seen_edges.insert(edge_key(id, related_id)) {
                graph.edges.push(GraphEdge {
                    from: id,
                    to: related_id,
                    edge_type: record.slug().map(str::to_string),
                    label: record.display_label().to_string(),
                });
            }

            if visited.insert(related_id) {
                queue.push_back((related_id, depth + 1));
            }
        }
    }

    log::debug!(
        "Built family graph from {}: {} nodes, {} edges",
        start_id,
        graph.nodes.len(),
        graph.edges.len()
    );
    graph
}

/// Canonical key for the unordered pair `{a, b}`.
fn edge_key(a: i64, b: i64) -> (i64, i64) {
    (a.min(b), a.max(b))
}
