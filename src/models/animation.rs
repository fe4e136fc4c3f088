//! Animation specifications and partial updates.

use serde::{Deserialize, Serialize};

/// Settings and frame script of one named animation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AnimationSpec {
    /// KLL animation settings (e.g., "loop, framedelay:3")
    #[serde(default)]
    pub settings: String,
    /// KLL frame definitions
    #[serde(default)]
    pub frames: String,
}

impl AnimationSpec {
    /// Creates a spec from settings and frames.
    pub fn new(settings: impl Into<String>, frames: impl Into<String>) -> Self {
        Self {
            settings: settings.into(),
            frames: frames.into(),
        }
    }

    /// Applies a partial update, keeping fields the update leaves unset.
    #[must_use]
    pub fn merged(&self, update: &AnimationUpdate) -> Self {
        Self {
            settings: update
                .settings
                .clone()
                .unwrap_or_else(|| self.settings.clone()),
            frames: update.frames.clone().unwrap_or_else(|| self.frames.clone()),
        }
    }
}

/// Field-by-field partial update of an [`AnimationSpec`].
///
/// `None` means "keep the current value".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnimationUpdate {
    /// New settings, if changing
    pub settings: Option<String>,
    /// New frames, if changing
    pub frames: Option<String>,
}

impl AnimationUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the settings field.
    pub fn settings(mut self, settings: impl Into<String>) -> Self {
        self.settings = Some(settings.into());
        self
    }

    /// Sets the frames field.
    pub fn frames(mut self, frames: impl Into<String>) -> Self {
        self.frames = Some(frames.into());
        self
    }

    /// Whether the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_none() && self.frames.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_overrides_only_given_fields() {
        let spec = AnimationSpec::new("loop", "frame1");

        let merged = spec.merged(&AnimationUpdate::new().frames("frame2"));
        assert_eq!(merged, AnimationSpec::new("loop", "frame2"));

        let merged = spec.merged(&AnimationUpdate::new().settings("once"));
        assert_eq!(merged, AnimationSpec::new("once", "frame1"));
    }

    #[test]
    fn test_merged_empty_update_is_identity() {
        let spec = AnimationSpec::new("loop", "frame1");
        assert!(AnimationUpdate::new().is_empty());
        assert_eq!(spec.merged(&AnimationUpdate::new()), spec);
    }

    #[test]
    fn test_merged_over_default() {
        let merged = AnimationSpec::default().merged(&AnimationUpdate::new().settings("loop"));
        assert_eq!(merged, AnimationSpec::new("loop", ""));
    }
}
