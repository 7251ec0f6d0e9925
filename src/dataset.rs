//! Loading exported people, relationships and relationship types from disk.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::config::DataConfig;
use crate::error::{FamtreeError, Result};
use crate::graph::{
    build_family_graph_with, build_relationship_map, enrich_relationship_types, group_relationships,
    merge_relationship_maps, GraphOptions,
};
use crate::model::{FamilyGraph, Person, RelationshipIndex, RelationshipRecord, RelationshipType};

/// Serialization format of a data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
}

impl DataFormat {
    /// Pick the format from a file extension
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(DataFormat::Json),
            "yaml" | "yml" => Some(DataFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            FamtreeError::InvalidInput(format!(
                "{} has no file extension; expected .json, .yaml or .yml",
                path.display()
            ))
        })?;
        Self::from_extension(extension)
            .ok_or_else(|| FamtreeError::UnsupportedFormat(path.display().to_string()))
    }

    /// Deserialize a list of records
    pub fn parse<T: DeserializeOwned>(self, content: &str) -> Result<Vec<T>> {
        match self {
            DataFormat::Json => Ok(serde_json::from_str(content)?),
            DataFormat::Yaml => Ok(serde_yaml_ng::from_str(content)?),
        }
    }
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = DataFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    let records = format.parse(&content)?;
    log::debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load a people export
pub fn load_people(path: &Path) -> Result<Vec<Person>> {
    load_records(path)
}

/// Load a flat relationship list
pub fn load_relationships(path: &Path) -> Result<Vec<RelationshipRecord>> {
    load_records(path)
}

/// Load the relationship-type reference table
pub fn load_relationship_types(path: &Path) -> Result<Vec<RelationshipType>> {
    load_records(path)
}

/// People plus their enriched relationship index, ready for graph building.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub people: Vec<Person>,
    pub relationships: RelationshipIndex,
}

impl Dataset {
    /// Index relationships embedded in `people`, append the flat list after
    /// them, then resolve type IDs against `types`.
    pub fn new(people: Vec<Person>, flat: Vec<RelationshipRecord>, types: &[RelationshipType]) -> Self {
        let mut relationships = build_relationship_map(&people);
        merge_relationship_maps(&mut relationships, group_relationships(flat));
        if !types.is_empty() {
            enrich_relationship_types(&mut relationships, types);
        }
        Self { people, relationships }
    }

    /// Load every file named in `config`; only `people_path` is required.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let people_path = config
            .people_path
            .as_deref()
            .ok_or_else(|| FamtreeError::Config("data.people_path is not set".to_string()))?;
        let people = load_people(people_path)?;

        let flat = match &config.relationships_path {
            Some(path) => load_relationships(path)?,
            None => Vec::new(),
        };
        let types = match &config.relationship_types_path {
            Some(path) => load_relationship_types(path)?,
            None => Vec::new(),
        };

        log::info!(
            "Loaded {} people, {} flat relationships, {} relationship types",
            people.len(),
            flat.len(),
            types.len()
        );
        Ok(Self::new(people, flat, &types))
    }

    pub fn build_graph(&self, start_id: i64, options: &GraphOptions<'_>) -> FamilyGraph {
        build_family_graph_with(start_id, &self.people, &self.relationships, options)
    }
}
