//! JSON export format.
//!
//! ```json
//! {
//!   "header": { "Name": "MD1", "Layout": "Standard", "Version": "0.3" },
//!   "matrix": [
//!     { "code": "0x01", "x": 0, "y": 0, "w": 1, "h": 1,
//!       "layers": { "0": { "key": "ESC", "label": "Esc" } } }
//!   ],
//!   "defines": [ { "name": "usbProtocol_define", "value": "1" } ],
//!   "leds": [ ... ],
//!   "custom": { "0": "U\"A\" : U\"B\";" },
//!   "animations": { "lava": { "settings": "loop", "frames": "..." } },
//!   "macros": { ... }
//! }
//! ```
//!
//! `header` and `matrix` are required. `leds` and `macros` are carried
//! through untouched. Key fields other than `code` and `layers` are kept
//! as pass-through attributes.

use super::{ConfigFormat, FormatError, MangleInput, Normalized};
use crate::format::LocaleTable;
use crate::models::{
    AnimationSpec, Animations, CustomKll, Define, Headers, Key, KeyAssignment, KeyId, Matrix,
    RawConfig,
};
use serde_json::{json, Map, Value};

/// The bundled raw format.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl ConfigFormat for JsonFormat {
    fn normalize(&self, raw: &RawConfig, locale: &LocaleTable) -> Result<Normalized, FormatError> {
        Ok(Normalized {
            header: normalize_header(required(raw, "header")?)?,
            matrix: normalize_matrix(required(raw, "matrix")?, locale)?,
            defines: raw.get("defines").map_or(Ok(Vec::new()), normalize_defines)?,
            leds: raw.get("leds").cloned(),
            custom: raw
                .get("custom")
                .map_or(Ok(CustomKll::new()), normalize_custom)?,
            animations: raw
                .get("animations")
                .map_or(Ok(Animations::new()), normalize_animations)?,
            macros: raw.get("macros").cloned(),
        })
    }

    fn mangle(&self, input: MangleInput<'_>) -> RawConfig {
        let mut raw = RawConfig::new();

        if let Some(header) = input.header {
            raw.insert("header".to_string(), string_map(header));
        }
        if let Some(matrix) = input.matrix {
            raw.insert("matrix".to_string(), mangle_matrix(matrix));
        }
        if let Some(defines) = input.defines {
            let defines = defines
                .iter()
                .map(|define| json!({ "name": define.name, "value": define.value }))
                .collect();
            raw.insert("defines".to_string(), Value::Array(defines));
        }
        if let Some(leds) = input.leds {
            raw.insert("leds".to_string(), leds.clone());
        }
        if let Some(custom) = input.custom {
            raw.insert("custom".to_string(), string_map(custom));
        }
        if let Some(animations) = input.animations {
            let animations = animations
                .iter()
                .map(|(name, spec)| {
                    (
                        name.clone(),
                        json!({ "settings": spec.settings, "frames": spec.frames }),
                    )
                })
                .collect();
            raw.insert("animations".to_string(), Value::Object(animations));
        }
        if let Some(macros) = input.macros {
            raw.insert("macros".to_string(), macros.clone());
        }

        raw
    }
}

fn required<'a>(raw: &'a RawConfig, field: &str) -> Result<&'a Value, FormatError> {
    raw.get(field).ok_or_else(|| FormatError::MissingField {
        field: field.to_string(),
    })
}

fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>, FormatError> {
    value.as_object().ok_or_else(|| FormatError::InvalidField {
        field: field.to_string(),
        expected: "an object",
    })
}

fn array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>, FormatError> {
    value.as_array().ok_or_else(|| FormatError::InvalidField {
        field: field.to_string(),
        expected: "an array",
    })
}

fn string(value: &Value, field: &str) -> Result<String, FormatError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| FormatError::InvalidField {
            field: field.to_string(),
            expected: "a string",
        })
}

/// Reads an optional string member, defaulting to empty.
fn optional_string(map: &Map<String, Value>, name: &str, field: &str) -> Result<String, FormatError> {
    map.get(name)
        .map_or(Ok(String::new()), |value| string(value, &format!("{field}.{name}")))
}

fn layer_index(layer: &str, field: &str) -> Result<(), FormatError> {
    layer
        .parse::<usize>()
        .map(|_| ())
        .map_err(|_| FormatError::InvalidLayer {
            field: field.to_string(),
            layer: layer.to_string(),
        })
}

fn normalize_header(value: &Value) -> Result<Headers, FormatError> {
    object(value, "header")?
        .iter()
        .map(|(name, value)| -> Result<_, FormatError> {
            Ok((name.clone(), string(value, &format!("header.{name}"))?))
        })
        .collect()
}

fn normalize_matrix(value: &Value, locale: &LocaleTable) -> Result<Matrix, FormatError> {
    let keys = array(value, "matrix")?
        .iter()
        .enumerate()
        .map(|(index, entry)| normalize_key(index, entry, locale))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Matrix::new(keys))
}

fn normalize_key(index: usize, value: &Value, locale: &LocaleTable) -> Result<Key, FormatError> {
    let field = format!("matrix[{index}]");
    let entry = object(value, &field)?;

    let code = entry
        .get("code")
        .ok_or_else(|| FormatError::InvalidField {
            field: format!("{field}.code"),
            expected: "a string",
        })
        .and_then(|code| string(code, &format!("{field}.code")))?;

    let mut key = Key::new(KeyId(index), code);

    if let Some(layers) = entry.get("layers") {
        key.layers_declared = true;
        let layers_field = format!("{field}.layers");
        for (layer, assignment) in object(layers, &layers_field)? {
            layer_index(layer, &layers_field)?;

            let assignment_field = format!("{layers_field}.{layer}");
            let assignment = object(assignment, &assignment_field)?;
            let name = assignment
                .get("key")
                .ok_or_else(|| FormatError::InvalidField {
                    field: format!("{assignment_field}.key"),
                    expected: "a string",
                })
                .and_then(|name| string(name, &format!("{assignment_field}.key")))?;

            let label = locale.label(&name).ok_or_else(|| FormatError::UnknownKey {
                field: assignment_field.clone(),
                key: name.clone(),
                locale: locale.name.clone(),
            })?;

            let mut normalized = KeyAssignment::new(name, label);
            normalized.extra = assignment
                .iter()
                .filter(|(field, _)| !matches!(field.as_str(), "key" | "label"))
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect();

            key.layers.insert(layer.clone(), normalized);
        }
    }

    key.attributes = entry
        .iter()
        .filter(|(name, _)| !matches!(name.as_str(), "code" | "layers"))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(key)
}

fn normalize_defines(value: &Value) -> Result<Vec<Define>, FormatError> {
    array(value, "defines")?
        .iter()
        .enumerate()
        .map(|(index, entry)| -> Result<_, FormatError> {
            let field = format!("defines[{index}]");
            let entry = object(entry, &field)?;
            Ok(Define {
                // Positional ids are unique within one load and never collide
                // with generated ids
                id: format!("define-{index}"),
                name: optional_string(entry, "name", &field)?,
                value: optional_string(entry, "value", &field)?,
            })
        })
        .collect()
}

fn normalize_custom(value: &Value) -> Result<CustomKll, FormatError> {
    object(value, "custom")?
        .iter()
        .map(|(layer, text)| -> Result<_, FormatError> {
            layer_index(layer, "custom")?;
            Ok((layer.clone(), string(text, &format!("custom.{layer}"))?))
        })
        .collect()
}

fn normalize_animations(value: &Value) -> Result<Animations, FormatError> {
    object(value, "animations")?
        .iter()
        .map(|(name, spec)| -> Result<_, FormatError> {
            let field = format!("animations.{name}");
            let spec = object(spec, &field)?;
            Ok((
                name.clone(),
                AnimationSpec {
                    settings: optional_string(spec, "settings", &field)?,
                    frames: optional_string(spec, "frames", &field)?,
                },
            ))
        })
        .collect()
}

fn string_map<'a>(map: impl IntoIterator<Item = (&'a String, &'a String)>) -> Value {
    Value::Object(
        map.into_iter()
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect(),
    )
}

fn mangle_matrix(matrix: &Matrix) -> Value {
    let keys = matrix
        .iter()
        .map(|key| {
            let mut entry = key.attributes.clone();
            entry.insert("code".to_string(), Value::String(key.code.clone()));

            if key.layers_declared || !key.layers.is_empty() {
                let layers = key
                    .layers
                    .iter()
                    .map(|(layer, assignment)| (layer.clone(), mangle_assignment(assignment)))
                    .collect();
                entry.insert("layers".to_string(), Value::Object(layers));
            }

            Value::Object(entry)
        })
        .collect();

    Value::Array(keys)
}

fn mangle_assignment(assignment: &KeyAssignment) -> Value {
    let mut entry = assignment.extra.clone();
    entry.insert("key".to_string(), Value::String(assignment.key.clone()));
    entry.insert("label".to_string(), Value::String(assignment.label.clone()));
    Value::Object(entry)
}
