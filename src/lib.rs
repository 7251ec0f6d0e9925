pub mod config;
pub mod dataset;
pub mod decode;
pub mod error;
pub mod graph;
pub mod model;

pub use config::Config;
pub use dataset::Dataset;
pub use error::{FamtreeError, Result};
pub use graph::{build_family_graph, build_family_graph_with, GraphOptions};
pub use model::{FamilyGraph, GraphEdge, GraphNode, Person, RelationshipIndex, RelationshipRecord, RelationshipType};
