use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalogue::{self, Pattern};
use crate::error::CatalogueError;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "patterns.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogueConfig {
    pub color: bool,
    /// Patterns left out of `all`.
    pub skip: Vec<String>,
    pub show_summary: bool,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            color: true,
            skip: Vec::new(),
            show_summary: true,
        }
    }
}

impl CatalogueConfig {
    /// Load `explicit` if given (it must exist), otherwise `patterns.toml` if present.
    pub fn load(explicit: Option<&Path>) -> Result<Self, CatalogueError> {
        Self::load_with_default(explicit, Path::new(DEFAULT_CONFIG_FILE))
    }

    fn load_with_default(explicit: Option<&Path>, default: &Path) -> Result<Self, CatalogueError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if default.is_file() => Self::from_file(default),
            None => {
                warn!(path = %default.display(), "no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogueError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogueError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogueError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Every name in `skip` must resolve to a catalogued pattern.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        for name in &self.skip {
            catalogue::find(name)?;
        }
        Ok(())
    }

    pub fn is_skipped(&self, pattern: &Pattern) -> bool {
        self.skip
            .iter()
            .filter_map(|name| catalogue::find(name).ok())
            .any(|skipped| skipped.name == pattern.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = CatalogueConfig::default();
        assert!(config.color);
        assert!(config.show_summary);
        assert!(config.skip.is_empty());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = CatalogueConfig::from_toml_str("color = false\n").unwrap();
        assert_eq!(
            config,
            CatalogueConfig {
                color: false,
                ..CatalogueConfig::default()
            }
        );
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "show_summary = false").unwrap();
        writeln!(file, "skip = [\"singleton\", \"Template_Method\"]").unwrap();

        let config = CatalogueConfig::load(Some(file.path())).unwrap();
        assert!(!config.show_summary);
        assert!(config.is_skipped(catalogue::find("template-method").unwrap()));
        assert!(config.is_skipped(catalogue::find("singleton").unwrap()));
        assert!(!config.is_skipped(catalogue::find("visitor").unwrap()));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let result = CatalogueConfig::load(Some(&missing));
        assert!(matches!(result, Err(CatalogueError::ConfigRead { .. })));
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        let dir = tempdir().unwrap();
        let default = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = CatalogueConfig::load_with_default(None, &default).unwrap();
        assert_eq!(config, CatalogueConfig::default());
    }

    #[test]
    fn test_present_default_file_is_used() {
        let dir = tempdir().unwrap();
        let default = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&default, "color = false").unwrap();
        let config = CatalogueConfig::load_with_default(None, &default).unwrap();
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_skip_name_is_error() {
        let result = CatalogueConfig::from_toml_str("skip = [\"singelton\"]");
        match result {
            Err(CatalogueError::UnknownPattern { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("singleton"));
            }
            other => panic!("expected UnknownPattern, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let result = CatalogueConfig::from_toml_str("color = \"maybe\"");
        assert!(matches!(result, Err(CatalogueError::ConfigParse(_))));
    }
}
