//! Data model: CRM person exports, relationship records, and the derived
//! family graph handed to visualization code.

mod graph;
mod person;
mod relationship;

pub use graph::{FamilyGraph, GraphEdge, GraphNode};
pub use person::{Person, PersonFields, Title};
pub use relationship::{RelationshipIndex, RelationshipRecord, RelationshipType};

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Reference to another record as the CRM exports it: a bare integer, a
/// numeric string, or a post/term object carrying its ID.
#[derive(Deserialize)]
#[serde(untagged)]
enum IdRef {
    Number(i64),
    Text(String),
    Object {
        #[serde(alias = "ID", alias = "term_id")]
        id: i64,
    },
}

impl IdRef {
    fn into_id(self) -> Option<i64> {
        match self {
            IdRef::Number(n) => Some(n),
            IdRef::Text(s) => s.trim().parse().ok(),
            IdRef::Object { id } => Some(id),
        }
    }
}

/// Deserialize an optional ID from any of the [`IdRef`] forms.
/// Unrecognized shapes become `None` instead of failing the whole record.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Id(IdRef),
        Other(IgnoredAny),
    }

    Ok(match Option::<Repr>::deserialize(deserializer)? {
        Some(Repr::Id(id)) => id.into_id(),
        _ => None,
    })
}

/// ACF returns `false`, `null` or `[]` for empty field groups; treat all of
/// them as the default value.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Value(T),
        Other(IgnoredAny),
    }

    Ok(match Repr::<T>::deserialize(deserializer)? {
        Repr::Value(v) => v,
        Repr::Other(_) => T::default(),
    })
}

/// Like [`lenient`] for lists, but per element: entries that don't parse
/// are dropped and the rest are kept.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Entry<T> {
        Value(T),
        Other(IgnoredAny),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        List(Vec<Entry<T>>),
        Other(IgnoredAny),
    }

    let entries = match Repr::<T>::deserialize(deserializer)? {
        Repr::List(entries) => entries,
        Repr::Other(_) => return Ok(Vec::new()),
    };
    let total = entries.len();
    let kept: Vec<T> = entries
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Value(v) => Some(v),
            Entry::Other(_) => None,
        })
        .collect();
    if kept.len() < total {
        log::debug!("Dropped {} malformed list entries", total - kept.len());
    }
    Ok(kept)
}
