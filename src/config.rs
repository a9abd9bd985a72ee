//! Configuration file support.
//!
//! Loads editing-session defaults from `~/.config/spritedeck/config.toml`:
//! the initial drawing color, the initially selected tool, and seed entries
//! for the shared property map. Every field has a sensible default, so a
//! missing file or a partial file both work.
//!
//! # Example TOML
//! ```toml
//! initial_color = "yellow"   # or [255, 128, 0]
//! initial_tool = "Pencil"
//!
//! [properties]
//! grid = true
//! zoom = 1.5
//! ```

use crate::draw::{Color, color};
use crate::props::Properties;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Color specification - either a named color or RGB values.
///
/// Named colors are the predefined constants; RGB arrays use 0-255 per
/// component.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the specification to a [`Color`].
    ///
    /// Unknown color names fall back to white with a warning; RGB arrays
    /// are scaled from 0-255 to 0.0-1.0 with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{name}', using white");
                color::WHITE
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Name("white".into())
    }
}

fn default_initial_tool() -> String {
    crate::tools::MOVE_TOOL.to_string()
}

/// Editing-session defaults loaded from the config file.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawerConfig {
    /// Drawing color the session starts with.
    #[serde(default)]
    pub initial_color: ColorSpec,

    /// Registry name of the tool selected at startup. Unknown names are
    /// ignored with a warning (the move tool stays active).
    #[serde(default = "default_initial_tool")]
    pub initial_tool: String,

    /// Seed entries for the shared property map.
    #[serde(default)]
    pub properties: Properties,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            initial_color: ColorSpec::default(),
            initial_tool: default_initial_tool(),
            properties: Properties::new(),
        }
    }
}

impl DrawerConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config file")
    }

    /// Loads the configuration from the default path, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: PathBuf) -> Result<Self> {
        info!("Loading config from {}", path.display());
        let text = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text)
    }

    /// `~/.config/spritedeck/config.toml` (platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("spritedeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::PropValue;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = DrawerConfig::from_toml_str("").unwrap();
        assert_eq!(config.initial_tool, crate::tools::MOVE_TOOL);
        assert_eq!(config.initial_color.to_color(), color::WHITE);
        assert!(config.properties.is_empty());
    }

    #[test]
    fn named_and_rgb_colors_parse() {
        let config = DrawerConfig::from_toml_str("initial_color = \"red\"").unwrap();
        assert_eq!(config.initial_color.to_color(), color::RED);

        let config = DrawerConfig::from_toml_str("initial_color = [0, 255, 0]").unwrap();
        assert_eq!(config.initial_color.to_color(), color::GREEN);
    }

    #[test]
    fn unknown_color_name_falls_back_to_white() {
        let config = DrawerConfig::from_toml_str("initial_color = \"chartreuse\"").unwrap();
        assert_eq!(config.initial_color.to_color(), color::WHITE);
    }

    #[test]
    fn properties_section_seeds_the_map() {
        let config = DrawerConfig::from_toml_str(
            "initial_tool = \"Pencil\"\n\n[properties]\ngrid = true\nzoom = 2.0\n",
        )
        .unwrap();
        assert_eq!(config.initial_tool, "Pencil");
        assert_eq!(config.properties.get("grid"), Some(&PropValue::Bool(true)));
        assert_eq!(config.properties.get("zoom"), Some(&PropValue::Float(2.0)));
    }

    #[test]
    fn load_from_reads_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "initial_tool = \"Eraser\"").unwrap();

        let config = DrawerConfig::load_from(path).unwrap();
        assert_eq!(config.initial_tool, "Eraser");
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(DrawerConfig::from_toml_str("initial_color = {").is_err());
    }
}
