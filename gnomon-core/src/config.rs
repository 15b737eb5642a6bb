//! Watchface configuration
//!
//! A minimal TOML parser for the embedded `gnomon.toml`. It handles
//! only the subset needed here and does NOT support the full TOML
//! spec.
//!
//! Supported features:
//! - Key = value pairs (string, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! Unknown keys are ignored so old firmware can read newer configs.

use crate::face::FaceConfig;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Invalid section header
    InvalidSection,
    /// Invalid value for a known key
    InvalidValue,
}

/// Which of the shipped skins to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceStyle {
    /// 12 markers, numerals at the quarters
    #[default]
    Classic,
    /// 60 markers, numerals at every hour, date widget
    Precision,
}

/// Parsed watchface configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchfaceConfig {
    /// Selected skin
    pub style: FaceStyle,
    /// Override for the skin's date widget default
    pub show_date: Option<bool>,
}

impl WatchfaceConfig {
    /// Resolve the configuration into face layout parameters
    pub fn face_config(&self) -> FaceConfig {
        let mut face = match self.style {
            FaceStyle::Classic => FaceConfig::classic(),
            FaceStyle::Precision => FaceConfig::precision(),
        };
        if let Some(show_date) = self.show_date {
            face.show_date = show_date;
        }
        face
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy)]
enum Section {
    Root,
    Face,
}

/// Parse TOML configuration into a `WatchfaceConfig`
pub fn parse_config(input: &str) -> Result<WatchfaceConfig, ParseError> {
    let mut config = WatchfaceConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Section header
        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "face" => Ok(Section::Face),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        // Allow unquoted strings for simple values
        value
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

fn parse_style(value: &str) -> Result<FaceStyle, ParseError> {
    match parse_string(value) {
        "classic" | "Classic" => Ok(FaceStyle::Classic),
        "precision" | "Precision" => Ok(FaceStyle::Precision),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut WatchfaceConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Face => match key {
            "style" => config.style = parse_style(value)?,
            "show_date" => config.show_date = Some(parse_bool(value)?),
            _ => {} // Ignore unknown keys
        },
        Section::Root => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config.style, FaceStyle::Classic);
        assert_eq!(config.show_date, None);
    }

    #[test]
    fn test_parse_precision_style() {
        let config_str = r#"
# Gnomon watchface configuration
[face]
style = "precision"
"#;
        let config = parse_config(config_str).unwrap();
        assert_eq!(config.style, FaceStyle::Precision);
        assert!(config.face_config().show_date);
    }

    #[test]
    fn test_show_date_override() {
        let config_str = r#"
[face]
style = "precision"
show_date = false  # inline comment
"#;
        let config = parse_config(config_str).unwrap();
        assert_eq!(config.show_date, Some(false));
        assert!(!config.face_config().show_date);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config_str = r#"
[face]
style = "classic"
future_option = 42
"#;
        let config = parse_config(config_str).unwrap();
        assert_eq!(config.style, FaceStyle::Classic);
    }

    #[test]
    fn test_bad_style_rejected() {
        let result = parse_config("[face]\nstyle = \"digital\"\n");
        assert_eq!(result, Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_bad_section_rejected() {
        let result = parse_config("[clock]\n");
        assert_eq!(result, Err(ParseError::InvalidSection));
    }

    #[test]
    fn test_classic_has_no_date_by_default() {
        let config = parse_config("[face]\nstyle = \"classic\"\n").unwrap();
        assert!(!config.face_config().show_date);
    }
}
