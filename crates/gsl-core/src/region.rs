//! Recovered region contents

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// What the prior output held in a region
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "lines", rename_all = "snake_case")]
pub enum RegionRecord {
    /// Region had a body; lines are stored without terminators
    Preserved(Vec<String>),
    /// Region was self-closing
    PreservedEmpty,
}

impl RegionRecord {
    /// Number of body lines held by the record
    pub fn line_count(&self) -> usize {
        match self {
            RegionRecord::Preserved(lines) => lines.len(),
            RegionRecord::PreservedEmpty => 0,
        }
    }
}

/// Region name to recovered content, in the order regions appeared
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMap {
    records: HashMap<String, RegionRecord>,
    order: Vec<String>,
}

impl RegionMap {
    /// Create an empty map (the first-generation case)
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record; returns false if the name was already present
    pub(crate) fn insert(&mut self, name: String, record: RegionRecord) -> bool {
        if self.records.contains_key(&name) {
            return false;
        }
        self.order.push(name.clone());
        self.records.insert(name, record);
        true
    }

    /// Take a record out of the map
    pub(crate) fn remove(&mut self, name: &str) -> Option<RegionRecord> {
        let record = self.records.remove(name)?;
        self.order.retain(|n| n != name);
        Some(record)
    }

    /// Look up a region by exact name
    pub fn get(&self, name: &str) -> Option<&RegionRecord> {
        self.records.get(name)
    }

    /// Whether a region with this name existed
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of regions
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the map holds no regions
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Region names in file order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Regions in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionRecord)> {
        self.order
            .iter()
            .filter_map(|name| self.records.get(name).map(|r| (name.as_str(), r)))
    }

    pub(crate) fn into_names(self) -> Vec<String> {
        self.order
    }
}

impl Serialize for RegionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, record) in self.iter() {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}
