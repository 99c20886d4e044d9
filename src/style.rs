//! Style files for library text
//!
//! A style is a small TOML file overriding text sizes and pin visibility
//! in the generated library. Anything it leaves out keeps the built-in
//! default.
//!
//! ```toml
//! [metadata]
//! name = "Compact"
//!
//! [text]
//! field_size = 40
//! pin_name_size = 40
//! pin_number_size = 40
//! pin_name_offset = 20
//!
//! [pins]
//! show_numbers = true
//! show_names = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::LibraryConfig;

/// Errors that can occur when loading or parsing style files
#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Failed to read style file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Overrides for [`LibraryConfig`] loaded from a style file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolStyle {
    /// Optional name for the style
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    pub field_size: Option<i64>,
    pub pin_name_size: Option<i64>,
    pub pin_number_size: Option<i64>,
    pub pin_name_offset: Option<i64>,
    pub show_numbers: Option<bool>,
    pub show_names: Option<bool>,
}

/// TOML structure for deserializing styles
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlStyle {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    text: TomlText,
    #[serde(default)]
    pins: TomlPins,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlText {
    field_size: Option<i64>,
    pin_name_size: Option<i64>,
    pin_number_size: Option<i64>,
    pin_name_offset: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct TomlPins {
    show_numbers: Option<bool>,
    show_names: Option<bool>,
}

impl SymbolStyle {
    /// Load a style from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(content.as_str())
    }

    /// Load a style from a TOML string
    pub fn from_str(content: &str) -> Result<Self, StyleError> {
        let parsed: TomlStyle = toml::from_str(content)?;

        Ok(SymbolStyle {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            field_size: parsed.text.field_size,
            pin_name_size: parsed.text.pin_name_size,
            pin_number_size: parsed.text.pin_number_size,
            pin_name_offset: parsed.text.pin_name_offset,
            show_numbers: parsed.pins.show_numbers,
            show_names: parsed.pins.show_names,
        })
    }

    /// Apply the overrides this style sets on top of `config`
    pub fn apply(&self, config: LibraryConfig) -> LibraryConfig {
        LibraryConfig {
            field_text_size: self.field_size.unwrap_or(config.field_text_size),
            pin_name_size: self.pin_name_size.unwrap_or(config.pin_name_size),
            pin_number_size: self.pin_number_size.unwrap_or(config.pin_number_size),
            pin_name_offset: self.pin_name_offset.unwrap_or(config.pin_name_offset),
            show_pin_numbers: self.show_numbers.unwrap_or(config.show_pin_numbers),
            show_pin_names: self.show_names.unwrap_or(config.show_pin_names),
        }
    }
}
