//! Page layout configuration, loadable from TOML.
//!
//! Every field has a default, so an empty file (or none at all) gives an A4
//! portrait sheet with one-inch margins.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read layout file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse layout TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid layout: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_mm: f32,
    /// Size of the numbers and letters at the ends of the lines.
    pub label_font_pt: f32,
    pub footer_font_pt: f32,
    pub stroke_pt: f32,
    pub show_footer: bool,
    pub title: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 25.4,
            label_font_pt: 12.0,
            footer_font_pt: 9.0,
            stroke_pt: 1.0,
            show_footer: true,
            title: None,
        }
    }
}

impl LayoutConfig {
    /// Load and validate a layout from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a layout from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("page_width_mm", self.page_width_mm),
            ("page_height_mm", self.page_height_mm),
            ("label_font_pt", self.label_font_pt),
            ("footer_font_pt", self.footer_font_pt),
            ("stroke_pt", self.stroke_pt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be a positive number (got {value})"
                )));
            }
        }
        if !(self.margin_mm.is_finite() && self.margin_mm >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "margin_mm must be 0 or greater (got {})",
                self.margin_mm
            )));
        }
        if self.draw_width_mm() <= 0.0 || self.draw_height_mm() <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "margin of {} mm leaves no drawing area on a {} x {} mm page",
                self.margin_mm, self.page_width_mm, self.page_height_mm
            )));
        }
        Ok(())
    }

    pub fn draw_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    pub fn draw_height_mm(&self) -> f32 {
        self.page_height_mm - 2.0 * self.margin_mm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(LayoutConfig::from_toml("").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = LayoutConfig::from_toml(
            r#"
page_width_mm = 297.0
page_height_mm = 210.0
title = "Friday chores"
"#,
        )
        .unwrap();
        assert_eq!(config.page_width_mm, 297.0);
        assert_eq!(config.margin_mm, 25.4);
        assert_eq!(config.title.as_deref(), Some("Friday chores"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = LayoutConfig::from_toml("page_colour = \"red\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn oversized_margin_is_rejected() {
        let err = LayoutConfig::from_toml("margin_mm = 120.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn non_positive_font_is_rejected() {
        let err = LayoutConfig::from_toml("label_font_pt = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LayoutConfig::from_file(Path::new("/nonexistent/layout.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/layout.toml"));
    }
}
