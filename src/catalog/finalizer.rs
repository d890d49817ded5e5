//! Catalog finalization: deduplicate, order, publish.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::entity::{Entity, EntityKind};

/// The published catalog: an FQN-keyed mapping in ascending key order.
/// Read-only after finalization.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: IndexMap<String, Entity>,
}

impl Catalog {
    pub fn get(&self, fqn: &str) -> Option<&Entity> {
        self.entries.get(fqn)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entity)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Drop repeat emissions of the same `(FQN, kind)` pair, keeping the first
/// seen in append order.
pub fn deduplicate(entities: Vec<Entity>) -> Vec<Entity> {
    let mut seen: HashSet<(String, EntityKind)> = HashSet::new();
    entities
        .into_iter()
        .filter(|entity| seen.insert((entity.fully_qualified_name.clone(), entity.kind)))
        .collect()
}

/// Stable ascending sort by FQN; entities sharing an FQN keep their relative
/// append order.
pub fn sort_by_fqn(entities: &mut [Entity]) {
    entities.sort_by(|a, b| a.fully_qualified_name.cmp(&b.fully_qualified_name));
}

/// Build the published FQN-keyed mapping. The key omits the entity kind, so
/// kind-differentiated survivors sharing an FQN collapse to the first one in
/// sorted order.
pub fn publish(entities: Vec<Entity>) -> Catalog {
    let mut entries = IndexMap::with_capacity(entities.len());
    for entity in entities {
        entries
            .entry(entity.fully_qualified_name.clone())
            .or_insert(entity);
    }
    Catalog { entries }
}

pub fn finalize(entities: Vec<Entity>) -> Catalog {
    let mut deduplicated = deduplicate(entities);
    sort_by_fqn(&mut deduplicated);
    publish(deduplicated)
}
