//! Animation registry.

use super::{Configurator, IdGenerator};
use crate::format::ConfigFormat;
use crate::models::{AnimationSpec, AnimationUpdate, Animations};
use crate::store::slots;
use tracing::debug;

impl<F: ConfigFormat, G: IdGenerator> Configurator<F, G> {
    /// Current animations by name.
    #[must_use]
    pub fn animations(&self) -> Animations {
        self.store.get::<slots::Animations>().unwrap_or_default()
    }

    /// Inserts an empty animation under `name`.
    ///
    /// An existing animation with the same name is overwritten.
    pub fn add_animation(&self, name: impl Into<String>) {
        let name = name.into();
        debug!("Adding animation {}", name);

        self.store.update::<slots::Animations>(move |animations| {
            let mut animations = animations.clone().unwrap_or_default();
            animations.insert(name, AnimationSpec::default());
            Some(animations)
        });
    }

    /// Merges `update` over the animation under `name`.
    ///
    /// Fields the update leaves unset keep their value. If `name` does not
    /// exist, it is created from the update alone with empty defaults.
    pub fn update_animation(&self, name: &str, update: &AnimationUpdate) {
        debug!("Updating animation {}", name);

        self.store.update::<slots::Animations>(|animations| {
            let mut animations = animations.clone().unwrap_or_default();
            let merged = animations
                .get(name)
                .cloned()
                .unwrap_or_default()
                .merged(update);
            animations.insert(name.to_string(), merged);
            Some(animations)
        });
    }

    /// Moves the animation under `from` to `to`.
    ///
    /// Anything previously stored under `to` is discarded. If `from` does
    /// not exist, `to` ends up absent as well.
    pub fn rename_animation(&self, from: &str, to: impl Into<String>) {
        let to = to.into();
        debug!("Renaming animation {} to {}", from, to);

        self.store.update::<slots::Animations>(move |animations| {
            let mut animations = animations.clone()?;
            let moved = animations.remove(from);
            animations.remove(&to);
            if let Some(spec) = moved {
                animations.insert(to, spec);
            }
            Some(animations)
        });
    }

    /// Removes the animation under `name`. Unknown names are ignored.
    pub fn delete_animation(&self, name: &str) {
        debug!("Deleting animation {}", name);

        self.store.update::<slots::Animations>(|animations| {
            let mut animations = animations.clone()?;
            animations.remove(name);
            Some(animations)
        });
    }
}
