//! Header and custom KLL accessors.

use super::{Configurator, IdGenerator};
use crate::format::ConfigFormat;
use crate::store::slots;
use tracing::debug;

impl<F: ConfigFormat, G: IdGenerator> Configurator<F, G> {
    /// Sets one header field, creating it if absent.
    pub fn update_header(&self, name: impl Into<String>, value: impl Into<String>) {
        let (name, value) = (name.into(), value.into());
        debug!("Setting header {} = {}", name, value);

        self.store.update::<slots::Headers>(move |headers| {
            let mut headers = headers.clone().unwrap_or_default();
            headers.insert(name, value);
            Some(headers)
        });
    }

    /// Sets the custom KLL text of the active layer.
    pub fn update_custom_kll(&self, text: impl Into<String>) {
        let layer = self.layer().to_string();
        let text = text.into();
        debug!("Setting custom KLL for layer {} ({} bytes)", layer, text.len());

        self.store.update::<slots::Custom>(move |custom| {
            let mut custom = custom.clone().unwrap_or_default();
            custom.insert(layer, text);
            Some(custom)
        });
    }
}
