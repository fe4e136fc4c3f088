//! Named constant definitions.

use serde::{Deserialize, Serialize};

/// A named constant usable from custom KLL text.
///
/// # Validation
///
/// - `id` is assigned once at creation and never changes
/// - `name` need not be unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Define {
    /// Unique identifier within the configuration
    pub id: String,
    /// Constant name as written in KLL
    pub name: String,
    /// Constant value
    pub value: String,
}

impl Define {
    /// Creates a new define.
    pub fn new(id: impl Into<String>, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            value: value.into(),
        }
    }
}
