//! Note view configuration.
//!
//! ```toml
//! text_margin = 24.0
//! line_spacing = 4.0
//! scale_to_background = true
//! clear_color = "#202020"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;
use zonemap_core::logging::targets;
use zonemap_render::Color;

use crate::error::{Result, ZonemapError};

/// Gap between a label block and the start of its leader line.
pub const DEFAULT_TEXT_MARGIN: f32 = 20.0;

/// Vertical gap between lines of one label.
pub const DEFAULT_LINE_SPACING: f32 = 5.0;

/// Layout and erase settings for a [`NoteImageView`](crate::NoteImageView).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteImageConfig {
    pub text_margin: f32,
    pub line_spacing: f32,
    pub scale_to_background: bool,
    /// Hex color (`#rrggbb` or `#rrggbbaa`). Transparent when unset.
    pub clear_color: Option<String>,
}

impl Default for NoteImageConfig {
    fn default() -> Self {
        Self {
            text_margin: DEFAULT_TEXT_MARGIN,
            line_spacing: DEFAULT_LINE_SPACING,
            scale_to_background: false,
            clear_color: None,
        }
    }
}

impl NoteImageConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ZonemapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        debug!(target: targets::CONFIG, path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Reject negative or non-finite spacing and unparseable colors.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("text_margin", self.text_margin),
            ("line_spacing", self.line_spacing),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ZonemapError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if let Some(hex) = &self.clear_color {
            if Color::from_hex(hex).is_none() {
                return Err(ZonemapError::InvalidConfig(format!(
                    "clear_color {hex:?} is not a hex color"
                )));
            }
        }
        Ok(())
    }

    /// The erase color, transparent when unset or unparseable.
    pub fn clear_color(&self) -> Color {
        self.clear_color
            .as_deref()
            .and_then(Color::from_hex)
            .unwrap_or(Color::TRANSPARENT)
    }

    pub fn with_text_margin(mut self, margin: f32) -> Self {
        self.text_margin = margin;
        self
    }

    pub fn with_line_spacing(mut self, spacing: f32) -> Self {
        self.line_spacing = spacing;
        self
    }

    pub fn with_scale_to_background(mut self, enabled: bool) -> Self {
        self.scale_to_background = enabled;
        self
    }

    pub fn with_clear_color(mut self, hex: impl Into<String>) -> Self {
        self.clear_color = Some(hex.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = NoteImageConfig::default();
        assert_eq!(config.text_margin, 20.0);
        assert_eq!(config.line_spacing, 5.0);
        assert!(!config.scale_to_background);
        assert_eq!(config.clear_color(), Color::TRANSPARENT);
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = NoteImageConfig::from_toml_str("line_spacing = 8.0").unwrap();
        assert_eq!(config.line_spacing, 8.0);
        assert_eq!(config.text_margin, 20.0);
    }

    #[test]
    fn test_clear_color() {
        let config = NoteImageConfig::from_toml_str(r##"clear_color = "#ffffff""##).unwrap();
        assert_eq!(config.clear_color(), Color::WHITE);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            NoteImageConfig::from_toml_str("text_margin = -1.0"),
            Err(ZonemapError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoteImageConfig::from_toml_str(r#"clear_color = "teal""#),
            Err(ZonemapError::InvalidConfig(_))
        ));
        assert!(matches!(
            NoteImageConfig::from_toml_str("text_margin = \"wide\""),
            Err(ZonemapError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "text_margin = 12.0\nscale_to_background = true").unwrap();

        let config = NoteImageConfig::load(file.path()).unwrap();
        assert_eq!(config.text_margin, 12.0);
        assert!(config.scale_to_background);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = NoteImageConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ZonemapError::Io { .. }));
    }

    #[test]
    fn test_builder() {
        let config = NoteImageConfig::default()
            .with_text_margin(10.0)
            .with_line_spacing(2.0)
            .with_scale_to_background(true)
            .with_clear_color("#000000");
        assert_eq!(config.text_margin, 10.0);
        assert_eq!(config.line_spacing, 2.0);
        assert!(config.scale_to_background);
        assert_eq!(config.clear_color(), Color::BLACK);
    }
}
