//! Configuration editing engine.
//!
//! [`Configurator`] owns one [`StateStore`] and implements every structural
//! edit the presentation layer triggers: loading and exporting raw
//! documents, remapping keys on the active layer, and maintaining the
//! define and animation registries, headers, and custom KLL.
//!
//! Each edit reads the current slot value, computes the next value purely,
//! and writes it back in one store update. Targets that do not exist are
//! silent no-ops; callers that need confirmation check membership first.

pub mod animations;
pub mod defines;
pub mod fields;
pub mod ids;
pub mod keymap;

use crate::format::{ConfigFormat, FormatError, JsonFormat, LocaleTable, MangleInput};
use crate::models::{Key, KeyId, RawConfig, UiConstants};
use crate::store::{slots, ConfigureState, SlotName, StateStore};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub use ids::{IdGenerator, UuidGenerator};

/// Slots written by [`Configurator::update_config`].
const LOADED_SLOTS: &[SlotName] = &[
    SlotName::Raw,
    SlotName::Headers,
    SlotName::Matrix,
    SlotName::Defines,
    SlotName::Leds,
    SlotName::Custom,
    SlotName::Animations,
    SlotName::Macros,
];

/// Editing engine for one keyboard configuration.
///
/// # Examples
///
/// ```
/// use lazykll::engine::Configurator;
/// use lazykll::format::LocaleTable;
/// use serde_json::json;
///
/// let configurator = Configurator::new();
/// let raw = json!({ "header": { "Name": "MD1" }, "matrix": [] });
/// configurator
///     .update_config(raw.as_object().unwrap().clone(), &LocaleTable::en_us())
///     .unwrap();
///
/// configurator.update_header("Author", "me");
/// assert_eq!(configurator.current_config()["header"]["Author"], "me");
/// ```
#[derive(Debug)]
pub struct Configurator<F = JsonFormat, G = UuidGenerator> {
    store: Arc<StateStore>,
    format: F,
    ids: G,
}

impl Configurator {
    /// Creates an engine over a fresh store using the JSON format.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Arc::new(StateStore::new()), JsonFormat, UuidGenerator)
    }

    /// Creates an engine over a fresh store with custom display constants.
    #[must_use]
    pub fn with_ui(ui: UiConstants) -> Self {
        Self::with_parts(
            Arc::new(StateStore::with_state(ConfigureState::with_ui(ui))),
            JsonFormat,
            UuidGenerator,
        )
    }
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ConfigFormat, G: IdGenerator> Configurator<F, G> {
    /// Creates an engine from its collaborators.
    pub fn with_parts(store: Arc<StateStore>, format: F, ids: G) -> Self {
        Self { store, format, ids }
    }

    /// The store this engine edits, for reading and subscribing.
    #[must_use]
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    /// Clears the loaded configuration and editing state.
    ///
    /// Display constants and the loading flag are kept.
    pub fn reset(&self) {
        self.store
            .transact(ConfigureState::RESET_SLOTS, ConfigureState::reset);
        debug!("Configuration reset");
    }

    /// Loads a raw document, replacing every model slot.
    ///
    /// The document is normalized before anything is written, so on error
    /// the previously loaded configuration is left intact.
    pub fn update_config(&self, raw: RawConfig, locale: &LocaleTable) -> Result<(), FormatError> {
        let normalized = self.format.normalize(&raw, locale).map_err(|err| {
            warn!("Rejected configuration for locale {}: {}", locale.name, err);
            err
        })?;

        info!(
            "Loaded configuration: {} keys, {} defines, {} animations (locale {})",
            normalized.matrix.len(),
            normalized.defines.len(),
            normalized.animations.len(),
            locale.name
        );

        self.store.transact(LOADED_SLOTS, move |state| {
            state.raw = Some(raw);
            state.headers = Some(normalized.header);
            state.matrix = Some(normalized.matrix);
            state.defines = Some(normalized.defines);
            state.leds = normalized.leds;
            state.custom = Some(normalized.custom);
            state.animations = Some(normalized.animations);
            state.macros = normalized.macros;
        });

        Ok(())
    }

    /// Reassembles a raw document from the current slots.
    ///
    /// Mangled fields override same-named fields of the loaded document;
    /// fields only present in the loaded document are kept.
    #[must_use]
    pub fn current_config(&self) -> RawConfig {
        self.store.read(|state| {
            let mangled = self.format.mangle(MangleInput {
                header: state.headers.as_ref(),
                defines: state.defines.as_deref(),
                matrix: state.matrix.as_ref(),
                leds: state.leds.as_ref(),
                custom: state.custom.as_ref(),
                animations: state.animations.as_ref(),
                macros: state.macros.as_ref(),
            });

            let mut raw = state.raw.clone().unwrap_or_default();
            raw.extend(mangled);
            raw
        })
    }

    /// Active layer index.
    #[must_use]
    pub fn layer(&self) -> usize {
        self.store.get::<slots::Layer>()
    }

    /// Switches the active layer.
    pub fn set_layer(&self, layer: usize) {
        self.store.set::<slots::Layer>(layer);
        debug!("Active layer set to {}", layer);
    }

    /// Key currently selected for editing.
    #[must_use]
    pub fn selected(&self) -> Option<Arc<Key>> {
        self.store.get::<slots::Selected>()
    }

    /// Selects a key by id. Returns the selected key, or `None` (and clears
    /// the selection) if no such key is loaded.
    pub fn select(&self, id: KeyId) -> Option<Arc<Key>> {
        let key = self.store.read(|state| {
            state
                .matrix
                .as_ref()
                .and_then(|matrix| matrix.get(id))
                .cloned()
        });
        self.store.set::<slots::Selected>(key.clone());
        key
    }

    /// Clears the selection.
    pub fn clear_selection(&self) {
        self.store.set::<slots::Selected>(None);
    }

    /// Shows or hides the keyboard view.
    pub fn set_keyboard_hidden(&self, hidden: bool) {
        self.store.set::<slots::KeyboardHidden>(hidden);
    }

    /// Marks whether the host is fetching a configuration.
    pub fn set_loading(&self, loading: bool) {
        self.store.set::<slots::Loading>(loading);
    }

    /// Sets the physical layout variant being edited.
    pub fn set_layout(&self, layout: Option<String>) {
        self.store.set::<slots::Layout>(layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw() -> RawConfig {
        json!({
            "header": { "Name": "Test" },
            "matrix": [
                { "code": "0x01", "layers": { "0": { "key": "A", "label": "A" } } },
                { "code": "0x02", "layers": { "0": { "key": "B", "label": "B" } } }
            ],
            "extra": 1
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn test_current_config_before_load_is_empty() {
        assert!(Configurator::new().current_config().is_empty());
    }

    #[test]
    fn test_current_config_keeps_unmodelled_fields() {
        let configurator = Configurator::new();
        configurator.update_config(raw(), &LocaleTable::en_us()).unwrap();

        let current = configurator.current_config();
        assert_eq!(current.get("extra"), Some(&json!(1)));
        assert_eq!(current["header"]["Name"], "Test");
    }

    #[test]
    fn test_select_and_clear() {
        let configurator = Configurator::new();
        configurator.update_config(raw(), &LocaleTable::en_us()).unwrap();

        let key = configurator.select(KeyId(1)).unwrap();
        assert_eq!(key.code, "0x02");
        assert_eq!(configurator.selected().unwrap().id, KeyId(1));

        configurator.clear_selection();
        assert!(configurator.selected().is_none());

        assert!(configurator.select(KeyId(5)).is_none());
        assert!(configurator.selected().is_none());
    }

    #[test]
    fn test_set_loading_and_layout_notify() {
        let configurator = Configurator::new();
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        configurator.store().subscribe(move |change| {
            sink.lock().unwrap().extend_from_slice(change.slots);
        });

        configurator.set_loading(true);
        configurator.set_layout(Some("ISO".to_string()));

        assert!(configurator.store().get::<slots::Loading>());
        assert_eq!(
            configurator.store().get::<slots::Layout>().as_deref(),
            Some("ISO")
        );
        assert_eq!(
            *seen.lock().unwrap(),
            vec![SlotName::Loading, SlotName::Layout]
        );

        configurator.set_layout(None);
        assert!(configurator.store().get::<slots::Layout>().is_none());
    }

    #[test]
    fn test_with_ui_survives_reset() {
        let ui = UiConstants {
            backdrop_padding: 1,
            size_factor: 2,
            led_factor: 3,
        };
        let configurator = Configurator::with_ui(ui);
        configurator.set_layer(2);
        configurator.reset();

        assert_eq!(configurator.layer(), 0);
        assert_eq!(configurator.store().get::<slots::Ui>(), ui);
    }
}
