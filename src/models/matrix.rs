//! Ordered key matrix with id lookup.

use crate::models::key::{Key, KeyAssignment, KeyId};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered collection of physical keys.
///
/// Keys are held behind `Arc` so that copying the matrix for an edit only
/// copies pointers. An entry that an edit did not touch stays pointer-equal
/// to its previous version (`Arc::ptr_eq`), which observers can use for
/// cheap change detection.
///
/// # Validation
///
/// - Key ids must be unique; a later duplicate shadows an earlier one in lookups
/// - Order is significant and never changed by edits
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    keys: Vec<Arc<Key>>,
    positions: HashMap<KeyId, usize>,
}

impl Matrix {
    /// Builds a matrix from keys in order.
    pub fn new(keys: Vec<Key>) -> Self {
        Self::from_shared(keys.into_iter().map(Arc::new).collect())
    }

    /// Builds a matrix from already shared keys, keeping their identity.
    pub fn from_shared(keys: Vec<Arc<Key>>) -> Self {
        let positions = keys
            .iter()
            .enumerate()
            .map(|(index, key)| (key.id, index))
            .collect();

        Self { keys, positions }
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the matrix has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates keys in matrix order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Key>> {
        self.keys.iter()
    }

    /// Gets the key with the given id.
    #[must_use]
    pub fn get(&self, id: KeyId) -> Option<&Arc<Key>> {
        self.positions.get(&id).and_then(|&index| self.keys.get(index))
    }

    /// Gets the position of the key with the given id.
    #[must_use]
    pub fn position(&self, id: KeyId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Whether a key with the given id exists.
    #[must_use]
    pub fn contains(&self, id: KeyId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Returns a new matrix in which one key has its `layer` entry replaced.
    ///
    /// Only the targeted entry is rebuilt; every other entry is the same
    /// `Arc` as in `self`. Returns `None` if `id` is not in the matrix.
    #[must_use]
    pub fn with_assignment(
        &self,
        id: KeyId,
        layer: &str,
        assignment: KeyAssignment,
    ) -> Option<(Self, Arc<Key>)> {
        let index = self.position(id)?;
        let replacement = Arc::new(self.keys[index].reassigned(layer, assignment));

        let mut keys = self.keys.clone();
        keys[index] = Arc::clone(&replacement);

        Some((
            Self {
                keys,
                positions: self.positions.clone(),
            },
            replacement,
        ))
    }

    /// Collects every layer index used by any key, in ascending order.
    #[must_use]
    pub fn layer_indices(&self) -> Vec<usize> {
        let mut layers: Vec<usize> = self
            .keys
            .iter()
            .flat_map(|key| key.layers.keys())
            .filter_map(|layer| layer.parse().ok())
            .collect();
        layers.sort_unstable();
        layers.dedup();
        layers
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.keys == other.keys
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.keys.iter().map(|key| &**key))
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Arc<Key>;
    type IntoIter = std::slice::Iter<'a, Arc<Key>>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
