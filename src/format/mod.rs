//! Conversion between the raw persisted format and normalized slots.
//!
//! The engine treats this conversion as a pair of pure functions behind the
//! [`ConfigFormat`] trait. [`JsonFormat`] is the bundled implementation for
//! the JSON export format; hosts with other formats provide their own.

pub mod json;
pub mod locale;

use crate::models::{Animations, CustomKll, Define, Headers, Matrix, RawConfig};
use serde_json::Value;
use thiserror::Error;

pub use json::JsonFormat;
pub use locale::{LocaleRegistry, LocaleTable};

/// Raw input that cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A required top-level field is absent
    #[error("missing required field '{field}'")]
    MissingField {
        /// Field name
        field: String,
    },

    /// A field has the wrong JSON type
    #[error("field '{field}' must be {expected}")]
    InvalidField {
        /// Path of the offending field (e.g., "matrix[3].layers")
        field: String,
        /// Expected shape
        expected: &'static str,
    },

    /// A layer key is not a non-negative integer
    #[error("invalid layer index '{layer}' in {field}")]
    InvalidLayer {
        /// Path of the owning field
        field: String,
        /// The offending layer key
        layer: String,
    },

    /// A key name is not in the locale table
    #[error("unknown key '{key}' in {field} for locale '{locale}'")]
    UnknownKey {
        /// Path of the offending entry
        field: String,
        /// Key name
        key: String,
        /// Locale used for lookup
        locale: String,
    },
}

/// Normalized slots produced from one raw document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Normalized {
    /// Header fields
    pub header: Headers,
    /// Key matrix
    pub matrix: Matrix,
    /// Named constants
    pub defines: Vec<Define>,
    /// LED data, if present
    pub leds: Option<Value>,
    /// Custom KLL per layer
    pub custom: CustomKll,
    /// Animations by name
    pub animations: Animations,
    /// Macro data, if present
    pub macros: Option<Value>,
}

/// Borrowed view of the slots handed to [`ConfigFormat::mangle`].
///
/// A `None` slot has not been loaded and produces no raw field.
#[derive(Debug, Clone, Copy, Default)]
pub struct MangleInput<'a> {
    /// Header fields
    pub header: Option<&'a Headers>,
    /// Named constants
    pub defines: Option<&'a [Define]>,
    /// Key matrix
    pub matrix: Option<&'a Matrix>,
    /// LED data
    pub leds: Option<&'a Value>,
    /// Custom KLL per layer
    pub custom: Option<&'a CustomKll>,
    /// Animations by name
    pub animations: Option<&'a Animations>,
    /// Macro data
    pub macros: Option<&'a Value>,
}

impl<'a> MangleInput<'a> {
    /// Borrows every slot of a normalized result.
    #[must_use]
    pub fn from_normalized(normalized: &'a Normalized) -> Self {
        Self {
            header: Some(&normalized.header),
            defines: Some(&normalized.defines),
            matrix: Some(&normalized.matrix),
            leds: normalized.leds.as_ref(),
            custom: Some(&normalized.custom),
            animations: Some(&normalized.animations),
            macros: normalized.macros.as_ref(),
        }
    }
}

/// A raw format: how to normalize it on load and mangle it back on save.
///
/// Both directions must be pure and deterministic.
pub trait ConfigFormat {
    /// Converts a raw document into normalized slots.
    fn normalize(&self, raw: &RawConfig, locale: &LocaleTable) -> Result<Normalized, FormatError>;

    /// Converts normalized slots back into raw fields.
    ///
    /// The result holds only the fields this format produces; the caller
    /// merges it over the originally loaded document.
    fn mangle(&self, input: MangleInput<'_>) -> RawConfig;
}
