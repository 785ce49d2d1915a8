//! YAML configuration parsing for binding maps
//!
//! Hosts that declare their shortcut bindings in files load them here and
//! resolve each entry's action name to a concrete target before calling
//! [`HotkeyMap::register`](crate::HotkeyMap::register).

use std::path::Path;

use serde::Deserialize;

use crate::binding::expand_binding;

/// Root structure of a bindings YAML file
#[derive(Debug, Deserialize)]
pub struct HotkeyConfig {
    pub bindings: Vec<BindingEntry>,
}

/// A single binding entry from YAML
#[derive(Debug, Deserialize)]
pub struct BindingEntry {
    /// Host-defined action name, resolved to a target by the caller
    pub action: String,
    /// Binding string, e.g. `"Control+K,g i"`
    pub keys: String,
}

/// Load binding entries from a YAML file
pub fn load_bindings_file(path: &Path) -> Result<Vec<BindingEntry>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    parse_bindings_yaml(&content)
}

/// Parse binding entries from a YAML string.
///
/// Every entry's `keys` value must expand to at least one sequence; an
/// entry that would silently register nothing is rejected here so config
/// typos surface at load time instead of as dead shortcuts.
pub fn parse_bindings_yaml(yaml: &str) -> Result<Vec<BindingEntry>, ConfigError> {
    let config: HotkeyConfig =
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    for entry in &config.bindings {
        if expand_binding(&entry.keys).is_empty() {
            return Err(ConfigError::EmptyBinding(entry.action.clone()));
        }
    }

    Ok(config.bindings)
}

/// Errors that can occur when loading binding maps
#[derive(Debug, Clone)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    /// The named action's binding string expands to no sequences
    EmptyBinding(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::EmptyBinding(action) => {
                write!(f, "Binding for '{}' contains no chords", action)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
bindings:
  - action: open_issues
    keys: "g i"
  - action: command_palette
    keys: "Control+K,Meta+k"
"#;

        let bindings = parse_bindings_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].action, "open_issues");
        assert_eq!(bindings[0].keys, "g i");
        assert_eq!(bindings[1].keys, "Control+K,Meta+k");
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse_bindings_yaml("bindings: 42").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_empty_binding_rejected() {
        let yaml = r#"
bindings:
  - action: broken
    keys: " , "
"#;

        let err = parse_bindings_yaml(yaml).unwrap_err();
        match err {
            ConfigError::EmptyBinding(action) => assert_eq!(action, "broken"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_bindings_file(Path::new("/nonexistent/bindings.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
