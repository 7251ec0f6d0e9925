use serde::{Deserialize, Serialize};

/// A person as drawn in the family tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: i64,
    /// Display name with HTML entities decoded.
    pub name: String,
    pub gender: String,
    pub photo: String,
    /// Whole years since birth; `None` when the birth date is unknown.
    pub age: Option<u32>,
    pub birth_date: Option<String>,
}

/// Relationship between two people in the tree. Edges are undirected for
/// de-duplication purposes; `from`/`to` keep the direction of discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: i64,
    pub to: i64,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,
    pub label: String,
}

impl GraphEdge {
    /// Whether this edge joins `a` and `b`, in either direction.
    pub fn connects(&self, a: i64, b: i64) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Output graph: nodes and edges in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl FamilyGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: i64) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_ids(&self) -> Vec<i64> {
        self.nodes.iter().map(|n| n.id).collect()
    }

    pub fn has_edge(&self, a: i64, b: i64) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }
}
