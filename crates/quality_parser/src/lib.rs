//! Parser for check configuration files (YAML/TOML formats).
//!
//! This module provides functionality to parse a check configuration from
//! YAML and TOML files into the strongly-typed `CheckConfig` structure.
//!
//! # Example
//!
//! ```rust
//! use quality_parser::parse_yaml;
//!
//! let yaml = r#"
//! input_file_name: clicks.csv
//! granularity:
//!   - session_id
//! one_to_one_vars:
//!   - [country_code, country_name]
//! int_vars:
//!   - user_id
//! value_set:
//!   status:
//!     - ok
//!     - failed
//! "#;
//!
//! let config = parse_yaml(yaml).expect("Failed to parse configuration");
//! assert_eq!(config.granularity, vec!["session_id"]);
//! ```

use quality_core::CheckConfig;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during configuration parsing.
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

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Parse a check configuration from a YAML string.
///
/// # Example
///
/// ```rust
/// use quality_parser::parse_yaml;
///
/// let yaml = r#"
/// value_set:
///   status: [ok, failed]
/// "#;
///
/// let config = parse_yaml(yaml).unwrap();
/// assert!(config.value_set.is_some());
/// ```
pub fn parse_yaml(content: &str) -> Result<CheckConfig> {
    let config: CheckConfig = serde_yaml_ng::from_str(content)?;
    Ok(config)
}

/// Parse a check configuration from a TOML string.
///
/// # Example
///
/// ```rust
/// use quality_parser::parse_toml;
///
/// let toml = r#"
/// granularity = ["order_id"]
///
/// [value_set]
/// status = ["ok", "failed"]
/// "#;
///
/// let config = parse_toml(toml).unwrap();
/// assert_eq!(config.granularity, vec!["order_id"]);
/// ```
pub fn parse_toml(content: &str) -> Result<CheckConfig> {
    let config: CheckConfig =
        toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?;
    Ok(config)
}

/// Detect the configuration format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ConfigFormat::Yaml`
/// * `.toml` → `ConfigFormat::Toml`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ConfigFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ConfigFormat::Yaml),
        "toml" => Ok(ConfigFormat::Toml),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a check configuration from a file with automatic format detection.
///
/// The format is determined by the file extension:
/// - `.yaml`, `.yml` → parsed as YAML
/// - `.toml` → parsed as TOML
///
/// # Example
///
/// ```no_run
/// use quality_parser::parse_file;
/// use std::path::Path;
///
/// let config = parse_file(Path::new("config/checks.yml")).unwrap();
/// println!("Granularity: {:?}", config.granularity);
/// ```
pub fn parse_file(path: &Path) -> Result<CheckConfig> {
    let content = std::fs::read_to_string(path)?;
    let format = detect_format(path)?;

    match format {
        ConfigFormat::Yaml => parse_yaml(&content),
        ConfigFormat::Toml => parse_toml(&content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quality_core::SemanticType;
    use std::io::Write;

    #[test]
    fn test_parse_empty_yaml_gives_defaults() {
        let config = parse_yaml("{}").expect("Failed to parse empty mapping");

        assert!(config.input_file_name.is_none());
        assert!(config.granularity.is_empty());
        assert!(config.one_to_one_vars.is_empty());
        assert!(config.value_set.is_none());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
input_file_name: clicks.csv
granularity:
  - session_id
  - event_id
one_to_one_vars:
  - [country_code, country_name]
  - [campaign_id, campaign_name]
int_vars:
  - user_id
float_vars:
  - conversion_rate
str_vars:
  - campaign_name
date_vars:
  - event_date
categorical_vars:
  - device
value_set:
  device:
    - mobile
    - desktop
  status:
    - ok
    - failed
"#;

        let config = parse_yaml(yaml).expect("Failed to parse full YAML");

        assert_eq!(config.input_file_name.as_deref(), Some("clicks.csv"));
        assert_eq!(config.granularity, vec!["session_id", "event_id"]);
        assert_eq!(
            config.one_to_one_vars,
            vec![
                ("country_code".to_string(), "country_name".to_string()),
                ("campaign_id".to_string(), "campaign_name".to_string()),
            ]
        );
        assert_eq!(
            config.expected_types(),
            vec![
                ("user_id".to_string(), SemanticType::Integer),
                ("conversion_rate".to_string(), SemanticType::Float),
                ("campaign_name".to_string(), SemanticType::Text),
                ("event_date".to_string(), SemanticType::Datetime),
                ("device".to_string(), SemanticType::Categorical),
            ]
        );

        let value_set = config.value_set.expect("value_set should be present");
        assert_eq!(value_set["device"], vec!["mobile", "desktop"]);
        assert_eq!(value_set["status"], vec!["ok", "failed"]);
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let invalid_yaml = r#"
granularity: this should be a list
  not: valid
"#;

        let result = parse_yaml(invalid_yaml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::YamlError(_)));
    }

    #[test]
    fn test_parse_yaml_rejects_malformed_pair() {
        // A one-to-one entry must be exactly two column names
        let yaml = r#"
one_to_one_vars:
  - [only_one]
"#;

        let result = parse_yaml(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_valid_toml() {
        let toml = r#"
input_file_name = "clicks.csv"
granularity = ["session_id"]
one_to_one_vars = [["country_code", "country_name"]]
int_vars = ["user_id"]

[value_set]
status = ["ok", "failed"]
"#;

        let config = parse_toml(toml).expect("Failed to parse valid TOML");

        assert_eq!(config.input_file_name.as_deref(), Some("clicks.csv"));
        assert_eq!(config.granularity, vec!["session_id"]);
        assert_eq!(
            config.one_to_one_vars,
            vec![("country_code".to_string(), "country_name".to_string())]
        );
        assert_eq!(config.int_vars, vec!["user_id"]);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid_toml = r#"
granularity = ["a"
[[[invalid syntax
"#;

        let result = parse_toml(invalid_toml);
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ParserError::TomlError(_)));
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("checks.yaml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("checks.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            detect_format(Path::new("checks.toml")).unwrap(),
            ConfigFormat::Toml
        );
    }

    #[test]
    fn test_detect_format_unsupported() {
        let result = detect_format(Path::new("checks.json"));
        assert!(matches!(
            result.unwrap_err(),
            ParserError::UnsupportedFormat(_)
        ));
    }

    #[test]
    fn test_detect_format_no_extension() {
        let result = detect_format(Path::new("checks"));
        assert!(matches!(result.unwrap_err(), ParserError::InvalidExtension));
    }

    #[test]
    fn test_parse_file_yaml() {
        let mut file = tempfile::Builder::new()
            .suffix(".yml")
            .tempfile()
            .unwrap();
        write!(
            file,
            "granularity: [order_id]\nvalue_set:\n  status: [ok]\n"
        )
        .unwrap();

        let config = parse_file(file.path()).expect("Failed to parse config file");
        assert_eq!(config.granularity, vec!["order_id"]);
        assert!(config.value_set.is_some());
    }

    #[test]
    fn test_round_trip_yaml() {
        let yaml = r#"
granularity: [a, b]
int_vars: [a]
value_set:
  b: [x, y]
"#;
        let original = parse_yaml(yaml).unwrap();

        let serialized = serde_yaml_ng::to_string(&original).expect("Failed to serialize");
        let parsed = parse_yaml(&serialized).expect("Failed to parse");

        assert_eq!(parsed.granularity, original.granularity);
        assert_eq!(parsed.int_vars, original.int_vars);
        assert_eq!(parsed.value_set, original.value_set);
    }
}
