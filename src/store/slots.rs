//! Typed addresses for the slots of a [`ConfigureState`].
//!
//! Each marker type names one field and its value type, so store access
//! is checked at compile time: `store.get::<slots::Layer>()` is a `usize`.

use super::ConfigureState;
use crate::models::{self, CustomKll, Define, Key, RawConfig, UiConstants};
use serde_json::Value;
use std::sync::Arc;

/// Runtime name of a slot, used in change notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    /// `loading`
    Loading,
    /// `layout`
    Layout,
    /// `layer`
    Layer,
    /// `raw`
    Raw,
    /// `headers`
    Headers,
    /// `matrix`
    Matrix,
    /// `defines`
    Defines,
    /// `leds`
    Leds,
    /// `custom`
    Custom,
    /// `animations`
    Animations,
    /// `macros`
    Macros,
    /// `selected`
    Selected,
    /// `keyboard_hidden`
    KeyboardHidden,
    /// `ui`
    Ui,
}

/// A typed view onto one field of [`ConfigureState`].
pub trait Slot {
    /// Name reported to observers
    const NAME: SlotName;
    /// Type stored in the slot
    type Value: Clone;

    /// Borrows the slot.
    fn get(state: &ConfigureState) -> &Self::Value;
    /// Mutably borrows the slot.
    fn get_mut(state: &mut ConfigureState) -> &mut Self::Value;
}

macro_rules! slots {
    ($($(#[$meta:meta])* $marker:ident => $field:ident: $ty:ty;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy)]
            pub struct $marker;

            impl Slot for $marker {
                const NAME: SlotName = SlotName::$marker;
                type Value = $ty;

                fn get(state: &ConfigureState) -> &$ty {
                    &state.$field
                }

                fn get_mut(state: &mut ConfigureState) -> &mut $ty {
                    &mut state.$field
                }
            }
        )*
    };
}

slots! {
    /// Host is fetching a configuration.
    Loading => loading: bool;
    /// Physical layout variant.
    Layout => layout: Option<String>;
    /// Active layer index.
    Layer => layer: usize;
    /// Raw document as last loaded.
    Raw => raw: Option<RawConfig>;
    /// Header fields.
    Headers => headers: Option<models::Headers>;
    /// Key matrix.
    Matrix => matrix: Option<models::Matrix>;
    /// Named constants.
    Defines => defines: Option<Vec<Define>>;
    /// LED data.
    Leds => leds: Option<Value>;
    /// Custom KLL per layer.
    Custom => custom: Option<CustomKll>;
    /// Animations by name.
    Animations => animations: Option<models::Animations>;
    /// Macro data.
    Macros => macros: Option<Value>;
    /// Key being edited.
    Selected => selected: Option<Arc<Key>>;
    /// Keyboard view hidden.
    KeyboardHidden => keyboard_hidden: bool;
    /// Display constants.
    Ui => ui: UiConstants;
}
