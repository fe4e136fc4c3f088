//! Physical key entries and their per-layer assignments.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Stable identity of a key within a matrix.
///
/// Assigned once when the matrix is built and carried through every
/// edit, so a key can be addressed without relying on object identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyId(pub usize);

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a key does on one layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyAssignment {
    /// Key name as known to the locale table (e.g., "ESC", "A", "LSHIFT")
    pub key: String,
    /// Display label resolved from the locale table (e.g., "Esc")
    pub label: String,
    /// Pass-through raw fields of the layer entry
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl KeyAssignment {
    /// Creates a new assignment from a key name and its label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            extra: Map::new(),
        }
    }

    /// Sets a pass-through field.
    #[must_use]
    pub fn with_extra(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }
}

/// A single entry of the key matrix.
///
/// `layers` is keyed by the layer index rendered as a string ("0", "1", ...).
/// Any raw fields that are not modelled here (geometry, LED index, ...)
/// live in `attributes` and are written back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Stable identity within the owning matrix
    pub id: KeyId,
    /// Scan code of the physical switch (e.g., "0x01")
    pub code: String,
    /// Assignment per layer index
    pub layers: BTreeMap<String, KeyAssignment>,
    /// Whether the raw entry carried a `layers` field, so an empty map is
    /// written back only when it was there to begin with
    #[serde(skip)]
    pub layers_declared: bool,
    /// Pass-through raw attributes
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

impl Key {
    /// Creates a key with no layer assignments.
    pub fn new(id: KeyId, code: impl Into<String>) -> Self {
        Self {
            id,
            code: code.into(),
            layers: BTreeMap::new(),
            layers_declared: false,
            attributes: Map::new(),
        }
    }

    /// Sets the assignment for one layer.
    #[must_use]
    pub fn with_layer(mut self, layer: usize, assignment: KeyAssignment) -> Self {
        self.layers.insert(layer.to_string(), assignment);
        self
    }

    /// Sets a pass-through attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Gets the assignment for a layer, if any.
    #[must_use]
    pub fn assignment(&self, layer: usize) -> Option<&KeyAssignment> {
        self.layers.get(&layer.to_string())
    }

    /// Returns a copy of this key whose `layer` entry is replaced.
    ///
    /// Every other layer entry and attribute is carried over as-is.
    #[must_use]
    pub fn reassigned(&self, layer: &str, assignment: KeyAssignment) -> Self {
        let mut layers = self.layers.clone();
        layers.insert(layer.to_string(), assignment);

        Self {
            id: self.id,
            code: self.code.clone(),
            layers,
            layers_declared: self.layers_declared,
            attributes: self.attributes.clone(),
        }
    }
}
