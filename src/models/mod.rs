//! Data models for keyboard configurations.
//!
//! This module contains the normalized, edit-friendly shapes of a
//! configuration: the key matrix, defines, animations, and the slot types
//! the state container stores. Models are independent of storage and UI.

pub mod animation;
pub mod define;
pub mod key;
pub mod matrix;
pub mod ui;

use serde_json::{Map, Value};
use std::collections::BTreeMap;

// Re-export all model types
pub use animation::{AnimationSpec, AnimationUpdate};
pub use define::Define;
pub use key::{Key, KeyAssignment, KeyId};
pub use matrix::Matrix;
pub use ui::UiConstants;

/// Raw persisted configuration document (top-level JSON object).
pub type RawConfig = Map<String, Value>;

/// Header fields (e.g., "Name", "Layout", "Version").
pub type Headers = BTreeMap<String, String>;

/// Custom KLL text keyed by layer index string.
pub type CustomKll = BTreeMap<String, String>;

/// Animation specs keyed by animation name.
pub type Animations = BTreeMap<String, AnimationSpec>;
