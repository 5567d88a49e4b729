//! Parser for check profile files (YAML/TOML formats).
//!
//! This module provides functionality to parse check profiles from YAML and
//! TOML files into the strongly-typed `Profile` structure.
//!
//! # Example
//!
//! ```rust
//! use tqc_parser::parse_yaml;
//!
//! let yaml = r#"
//! version: "1.0.0"
//! name: sensor_readings
//! owner: qa-team
//! description: Hourly sensor export
//! columns:
//!   - name: temperature
//!     kind: numeric
//!     required: true
//! "#;
//!
//! let profile = parse_yaml(yaml).expect("Failed to parse profile");
//! assert_eq!(profile.name, "sensor_readings");
//! ```

use std::path::Path;
use thiserror::Error;
use tqc_core::Profile;

/// Errors that can occur during profile parsing.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported profile file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a profile from a YAML string.
///
/// # Example
///
/// ```rust
/// use tqc_parser::parse_yaml;
///
/// let yaml = r#"
/// version: "1.0.0"
/// name: readings
/// owner: qa-team
/// columns: []
/// "#;
///
/// let profile = parse_yaml(yaml).unwrap();
/// assert_eq!(profile.name, "readings");
/// ```
pub fn parse_yaml(content: &str) -> Result<Profile> {
    let profile: Profile = serde_yaml_ng::from_str(content)?;
    Ok(profile)
}

/// Parse a profile from a TOML string.
///
/// # Example
///
/// ```rust
/// use tqc_parser::parse_toml;
///
/// let toml = r#"
/// version = "1.0.0"
/// name = "readings"
/// owner = "qa-team"
/// columns = []
/// "#;
///
/// let profile = parse_toml(toml).unwrap();
/// assert_eq!(profile.name, "readings");
/// ```
pub fn parse_toml(content: &str) -> Result<Profile> {
    let profile: Profile =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(profile)
}

/// Detect the profile format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ProfileFormat::Yaml`
/// * `.toml` → `ProfileFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ProfileFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ProfileFormat::Yaml),
        "toml" => Ok(ProfileFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a profile from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use tqc_parser::parse_file;
/// use std::path::Path;
///
/// let profile = parse_file(Path::new("profiles/sensor_readings.yml")).unwrap();
/// println!("Loaded profile: {}", profile.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Profile> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ProfileFormat::Yaml => parse_yaml(&content),
        ProfileFormat::Toml => parse_toml(&content),
    }
}
