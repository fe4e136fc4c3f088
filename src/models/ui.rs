//! Display constants shared with the presentation layer.

use serde::{Deserialize, Serialize};

/// Scaling constants used when drawing the keyboard.
///
/// These are not part of a keyboard configuration and survive a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConstants {
    /// Padding around the keyboard backdrop, in pixels
    pub backdrop_padding: u32,
    /// Pixels per key unit
    pub size_factor: u32,
    /// Pixels per LED unit
    pub led_factor: u32,
}

impl Default for UiConstants {
    fn default() -> Self {
        Self {
            backdrop_padding: 20,
            size_factor: 16,
            led_factor: 17,
        }
    }
}
