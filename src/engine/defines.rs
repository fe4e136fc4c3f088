//! Define registry.

use super::{Configurator, IdGenerator};
use crate::format::ConfigFormat;
use crate::models::Define;
use crate::store::slots;
use tracing::debug;

impl<F: ConfigFormat, G: IdGenerator> Configurator<F, G> {
    /// Current defines, in order.
    #[must_use]
    pub fn defines(&self) -> Vec<Define> {
        self.store.get::<slots::Defines>().unwrap_or_default()
    }

    /// Appends a new define under a freshly generated id.
    ///
    /// Returns the id so the caller can address the entry later.
    pub fn add_define(&self, name: impl Into<String>, value: impl Into<String>) -> String {
        let id = self.ids.generate();
        let define = Define::new(id.clone(), name, value);
        debug!("Adding define {} ({})", define.name, id);

        self.store.update::<slots::Defines>(move |defines| {
            let mut defines = defines.clone().unwrap_or_default();
            defines.push(define);
            Some(defines)
        });

        id
    }

    /// Replaces name and value of the define with `id`.
    ///
    /// Unknown ids are ignored.
    pub fn update_define(&self, id: &str, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        debug!("Updating define {}", id);

        self.store.update::<slots::Defines>(|defines| {
            defines.as_ref().map(|defines| {
                defines
                    .iter()
                    .map(|define| {
                        if define.id == id {
                            Define::new(id, name.clone(), value.clone())
                        } else {
                            define.clone()
                        }
                    })
                    .collect()
            })
        });
    }

    /// Removes the define with `id`. Unknown ids are ignored.
    pub fn delete_define(&self, id: &str) {
        debug!("Deleting define {}", id);

        self.store.update::<slots::Defines>(|defines| {
            defines.as_ref().map(|defines| {
                defines
                    .iter()
                    .filter(|define| define.id != id)
                    .cloned()
                    .collect()
            })
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::Configurator;
    use crate::models::Define;
    use crate::store::slots;

    #[test]
    fn test_add_define_before_load_creates_list() {
        let configurator = Configurator::new();
        let id = configurator.add_define("ledCount", "64");

        assert_eq!(
            configurator.defines(),
            vec![Define::new(id, "ledCount", "64")]
        );
    }

    #[test]
    fn test_add_define_appends_in_order() {
        let configurator = Configurator::new();
        configurator.add_define("first", "1");
        configurator.add_define("second", "2");
        configurator.add_define("first", "3");

        let names: Vec<_> = configurator
            .defines()
            .into_iter()
            .map(|define| define.name)
            .collect();
        assert_eq!(names, vec!["first", "second", "first"]);
    }

    #[test]
    fn test_update_and_delete_on_unset_slot() {
        let configurator = Configurator::new();
        configurator.update_define("missing", "n", "v");
        configurator.delete_define("missing");
        assert!(configurator.store().get::<slots::Defines>().is_none());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let configurator = Configurator::new();
        let id = configurator.add_define("a", "1");
        configurator.update_define("nope", "b", "2");

        assert_eq!(configurator.defines(), vec![Define::new(id, "a", "1")]);
    }
}
