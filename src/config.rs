use crate::error::{ExtractError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default separator used when serializing the skills cell.
pub const DEFAULT_SKILL_SEPARATOR: &str = "; ";

/// Optional TOML configuration for a pipeline run. Every field has a
/// built-in default, so running without a config file is the normal case.
#[derive(Debug, Default, Deserialize)]
pub struct ExtractorConfig {
    /// Replacement skill vocabulary. When absent the built-in list is used.
    pub vocabulary: Option<Vec<String>>,
    /// Separator between entries in the output Skills cell.
    pub skill_separator: Option<String>,
}

impl ExtractorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExtractError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: ExtractorConfig = toml::from_str(&content).map_err(|e| {
            ExtractError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        if let Some(vocab) = &config.vocabulary {
            if vocab.is_empty() {
                return Err(ExtractError::Config(
                    "vocabulary override must not be empty".to_string(),
                ));
            }
        }
        Ok(config)
    }

    /// The active vocabulary: the override when present, otherwise the
    /// built-in list.
    pub fn vocabulary(&self) -> Vec<String> {
        match &self.vocabulary {
            Some(phrases) => phrases.clone(),
            None => crate::vocabulary::default_vocabulary(),
        }
    }

    pub fn skill_separator(&self) -> &str {
        self.skill_separator
            .as_deref()
            .unwrap_or(DEFAULT_SKILL_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_built_in_vocabulary() {
        let config = ExtractorConfig::default();
        assert_eq!(config.skill_separator(), DEFAULT_SKILL_SEPARATOR);
        assert!(config.vocabulary().iter().any(|s| s == "Python"));
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let result = ExtractorConfig::load(Path::new("does-not-exist.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "vocabulary = not-a-list").unwrap();
        let err = ExtractorConfig::load(&path).unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
        assert!(err.to_string().contains("bad.toml"));
    }
}
