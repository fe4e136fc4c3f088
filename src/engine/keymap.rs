//! Layer-aware key remapping.

use super::{Configurator, IdGenerator};
use crate::format::ConfigFormat;
use crate::models::{Key, KeyAssignment, KeyId};
use crate::store::slots;
use std::sync::Arc;
use tracing::debug;

impl<F: ConfigFormat, G: IdGenerator> Configurator<F, G> {
    /// Replaces one key's assignment on the active layer.
    ///
    /// The targeted key is rebuilt with a new `layers` map in which only the
    /// active layer's entry differs; every other key in the matrix keeps its
    /// identity. Returns the rebuilt key, or `None` if `target` is not in the
    /// matrix, in which case the matrix is written back unchanged.
    pub fn update_keymap(&self, target: KeyId, assignment: KeyAssignment) -> Option<Arc<Key>> {
        let layer = self.layer().to_string();
        let mut replacement = None;

        self.store.update::<slots::Matrix>(|matrix| {
            let matrix = matrix.as_ref()?;
            match matrix.with_assignment(target, &layer, assignment) {
                Some((updated, key)) => {
                    replacement = Some(key);
                    Some(updated)
                }
                None => Some(matrix.clone()),
            }
        });

        if replacement.is_some() {
            debug!("Key {} reassigned on layer {}", target, layer);
        } else {
            debug!("Key {} not in matrix, keymap unchanged", target);
        }

        replacement
    }

    /// Replaces the selected key's assignment on the active layer.
    ///
    /// No-op without a selection. Otherwise the selection moves to the
    /// rebuilt key so it keeps tracking the same physical key.
    pub fn update_selected(&self, assignment: KeyAssignment) -> Option<Arc<Key>> {
        let selected = self.selected()?;
        let updated = self.update_keymap(selected.id, assignment);
        self.store.set::<slots::Selected>(updated.clone());
        updated
    }
}
