//! Keycap label tables.
//!
//! A locale table maps key names used in the raw format to the labels shown
//! on keycaps for one keyboard locale. Tables are plain lookup data: the
//! built-in `en-us` table, plus JSON files of the form
//!
//! ```json
//! { "name": "de-de", "keys": { "Y": "Z", "Z": "Y" } }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the built-in locale.
pub const DEFAULT_LOCALE: &str = "en-us";

/// Key name to keycap label lookup for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleTable {
    /// Locale name (e.g., "en-us")
    pub name: String,
    /// Label per key name
    pub keys: BTreeMap<String, String>,
}

impl LocaleTable {
    /// Creates an empty table.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: BTreeMap::new(),
        }
    }

    /// Adds or replaces a key label.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.keys.insert(key.into(), label.into());
        self
    }

    /// Looks up the label for a key name.
    #[must_use]
    pub fn label(&self, key: &str) -> Option<&str> {
        self.keys.get(key).map(String::as_str)
    }

    /// Whether the table knows the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Loads a table from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read locale table: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse locale table: {}", path.display()))
    }

    /// The built-in US English table.
    #[must_use]
    pub fn en_us() -> Self {
        let mut table = Self::new(DEFAULT_LOCALE);

        for letter in 'A'..='Z' {
            table.keys.insert(letter.to_string(), letter.to_string());
        }
        for digit in 0..=9 {
            table.keys.insert(digit.to_string(), digit.to_string());
        }
        for n in 1..=24 {
            table.keys.insert(format!("F{n}"), format!("F{n}"));
        }

        const NAMED: &[(&str, &str)] = &[
            ("ESC", "Esc"),
            ("TAB", "Tab"),
            ("CAPSLOCK", "Caps"),
            ("LSHIFT", "Shift"),
            ("RSHIFT", "Shift"),
            ("LCTRL", "Ctrl"),
            ("RCTRL", "Ctrl"),
            ("LALT", "Alt"),
            ("RALT", "Alt"),
            ("LGUI", "Gui"),
            ("RGUI", "Gui"),
            ("SPACE", "Space"),
            ("ENTER", "Enter"),
            ("BACKSPACE", "Bksp"),
            ("DELETE", "Del"),
            ("INSERT", "Ins"),
            ("HOME", "Home"),
            ("END", "End"),
            ("PAGEUP", "PgUp"),
            ("PAGEDOWN", "PgDn"),
            ("UP", "↑"),
            ("DOWN", "↓"),
            ("LEFT", "←"),
            ("RIGHT", "→"),
            ("MINUS", "-"),
            ("EQUALS", "="),
            ("LBRACE", "["),
            ("RBRACE", "]"),
            ("BACKSLASH", "\\"),
            ("SEMICOLON", ";"),
            ("QUOTE", "'"),
            ("BACKTICK", "`"),
            ("COMMA", ","),
            ("PERIOD", "."),
            ("SLASH", "/"),
            ("PRINTSCREEN", "PrtSc"),
            ("SCROLLLOCK", "ScrLk"),
            ("PAUSE", "Pause"),
            ("MENU", "Menu"),
            ("FUNCTION1", "Fn1"),
            ("FUNCTION2", "Fn2"),
            ("FUNCTION3", "Fn3"),
            ("LOCK1", "Lock1"),
            ("LOCK2", "Lock2"),
            ("LOCK3", "Lock3"),
            ("NONE", ""),
        ];
        for (key, label) in NAMED {
            table.keys.insert((*key).to_string(), (*label).to_string());
        }

        table
    }
}

/// Resolves locale names to tables.
///
/// Built-in tables are always available; a directory of `<name>.json`
/// files adds or overrides tables.
#[derive(Debug, Clone, Default)]
pub struct LocaleRegistry {
    tables_dir: Option<PathBuf>,
}

impl LocaleRegistry {
    /// Creates a registry with only built-in tables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that also reads tables from `dir`.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            tables_dir: Some(dir.into()),
        }
    }

    /// Resolves a table by name, preferring files over built-ins.
    pub fn resolve(&self, name: &str) -> Result<LocaleTable> {
        if let Some(dir) = &self.tables_dir {
            let path = dir.join(format!("{name}.json"));
            if path.exists() {
                return LocaleTable::load(&path);
            }
        }

        match name {
            DEFAULT_LOCALE => Ok(LocaleTable::en_us()),
            _ => anyhow::bail!("Unknown locale '{name}'"),
        }
    }

    /// Lists every resolvable locale name, sorted.
    pub fn available(&self) -> Result<Vec<String>> {
        let mut names = vec![DEFAULT_LOCALE.to_string()];

        if let Some(dir) = self.tables_dir.as_ref().filter(|dir| dir.is_dir()) {
            let entries = fs::read_dir(dir)
                .with_context(|| format!("Failed to read locale directory: {}", dir.display()))?;

            for entry in entries {
                let path = entry.context("Failed to read directory entry")?.path();
                if path.extension().is_some_and(|ext| ext == "json") {
                    if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                        names.push(stem.to_string());
                    }
                }
            }
        }

        names.sort();
        names.dedup();
        Ok(names)
    }
}
