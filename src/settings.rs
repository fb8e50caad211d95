use crate::error::{BoundsError, Result};
use crate::extractor::SelectionPolicy;
use crate::utils::constants::{DEFAULT_BOUNDS_FILE, DEFAULT_PBF_DIR};
use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Process-wide settings for the bounds extractor, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Directory scanned (non-recursively) for `.pbf` extracts
    pub pbf_dir: PathBuf,
    /// Destination of the bounds JSON file
    pub bounds_file: PathBuf,
    pub selection: SelectionPolicy,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    pbf_dir: PathBuf,
    bounds_file: PathBuf,
    bounds_selection: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PBF_DIR, DEFAULT_BOUNDS_FILE)
    }
}

impl ExtractorConfig {
    pub fn new(pbf_dir: impl Into<PathBuf>, bounds_file: impl Into<PathBuf>) -> Self {
        Self {
            pbf_dir: pbf_dir.into(),
            bounds_file: bounds_file.into(),
            selection: SelectionPolicy::default(),
        }
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    /// Defaults overridden by `PBF_DIR`, `BOUNDS_FILE` and `BOUNDS_SELECTION`
    /// from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_environment(Environment::default())
    }

    /// Same as [`from_env`](Self::from_env) but reading the given variables
    /// instead of the process environment.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self::from_environment(Environment::default().source(Some(vars.into_iter().collect())))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let raw: RawConfig = Config::builder()
            .set_default("pbf_dir", DEFAULT_PBF_DIR)?
            .set_default("bounds_file", DEFAULT_BOUNDS_FILE)?
            .set_default("bounds_selection", SelectionPolicy::default().as_str())?
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()?;

        let selection = raw.bounds_selection.parse::<SelectionPolicy>().map_err(|e| {
            BoundsError::Config(ConfigError::Message(format!("BOUNDS_SELECTION: {}", e)))
        })?;

        Ok(Self {
            pbf_dir: raw.pbf_dir,
            bounds_file: raw.bounds_file,
            selection,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::from_vars(Vec::new()).unwrap();
        assert_eq!(config, ExtractorConfig::default());
        assert_eq!(config.pbf_dir, PathBuf::from("/data/pbf"));
        assert_eq!(config.bounds_file, PathBuf::from("/app/config/bounds.json"));
        assert_eq!(config.selection, SelectionPolicy::First);
    }

    #[test]
    fn test_environment_overrides() {
        let config = ExtractorConfig::from_vars(vars(&[
            ("BOUNDS_FILE", "/tmp/out/bounds.json"),
            ("PBF_DIR", "/srv/pbf"),
            ("BOUNDS_SELECTION", "single"),
            ("UNRELATED", "ignored"),
        ]))
        .unwrap();

        assert_eq!(config.pbf_dir, PathBuf::from("/srv/pbf"));
        assert_eq!(config.bounds_file, PathBuf::from("/tmp/out/bounds.json"));
        assert_eq!(config.selection, SelectionPolicy::RequireSingle);
    }

    #[test]
    fn test_empty_value_keeps_default() {
        let config = ExtractorConfig::from_vars(vars(&[("BOUNDS_FILE", "")])).unwrap();
        assert_eq!(config.bounds_file, PathBuf::from(DEFAULT_BOUNDS_FILE));
    }

    #[test]
    fn test_invalid_selection() {
        let result = ExtractorConfig::from_vars(vars(&[("BOUNDS_SELECTION", "random")]));
        assert!(matches!(result, Err(BoundsError::Config(_))));
    }

    #[test]
    fn test_builder() {
        let config = ExtractorConfig::new("/a", "/b/c.json").with_selection(SelectionPolicy::RequireSingle);
        assert_eq!(config.pbf_dir, PathBuf::from("/a"));
        assert_eq!(config.selection, SelectionPolicy::RequireSingle);
    }
}
