use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::PointId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressParseError {
    #[error("progress is not valid JSON: {0}")]
    Json(String),

    #[error("progress must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Completion flag per point id.
///
/// Absent ids read as unchecked. Serializes as a flat JSON object of
/// `"<point id>": bool`. Equality compares the set of checked ids, so an
/// explicit `false` equals an absent entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressMap {
    entries: BTreeMap<PointId, bool>,
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `id` and returns the new value.
    pub fn toggle(&mut self, id: &PointId) -> bool {
        let next = !self.is_checked(id);
        self.entries.insert(id.clone(), next);
        next
    }

    #[must_use]
    pub fn is_checked(&self, id: &PointId) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Ids whose flag is `true`.
    pub fn checked_ids(&self) -> impl Iterator<Item = &PointId> {
        self.entries
            .iter()
            .filter_map(|(id, checked)| checked.then_some(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Serializes the full map.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error; not expected for string keys
    /// and boolean values.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parses a persisted map.
    ///
    /// Entries whose value is not a JSON boolean are dropped, so only a literal
    /// `true` counts as checked.
    ///
    /// # Errors
    ///
    /// Returns `ProgressParseError` if the text is not JSON or not an object.
    pub fn from_json(raw: &str) -> Result<Self, ProgressParseError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|err| ProgressParseError::Json(err.to_string()))?;
        let object = match value {
            serde_json::Value::Object(object) => object,
            serde_json::Value::Null => return Err(ProgressParseError::NotAnObject("null")),
            serde_json::Value::Bool(_) => return Err(ProgressParseError::NotAnObject("a boolean")),
            serde_json::Value::Number(_) => return Err(ProgressParseError::NotAnObject("a number")),
            serde_json::Value::String(_) => return Err(ProgressParseError::NotAnObject("a string")),
            serde_json::Value::Array(_) => return Err(ProgressParseError::NotAnObject("an array")),
        };
        let entries = object
            .into_iter()
            .filter_map(|(key, value)| value.as_bool().map(|flag| (PointId::new(key), flag)))
            .collect();
        Ok(Self { entries })
    }
}

impl PartialEq for ProgressMap {
    fn eq(&self, other: &Self) -> bool {
        self.checked_ids().eq(other.checked_ids())
    }
}

impl Eq for ProgressMap {}

impl FromIterator<(PointId, bool)> for ProgressMap {
    fn from_iter<I: IntoIterator<Item = (PointId, bool)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
