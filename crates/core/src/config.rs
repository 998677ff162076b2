//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into
//! services. Request handling never reads process-wide environment
//! variables; doing so leads to inconsistent behaviour in multi-threaded
//! runtimes and test harnesses.

use crate::error::{ChartError, ChartResult};
use quicknotes::LabelTable;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Default GraphQL endpoint for the practice-management API.
pub const DEFAULT_HEALTHIE_API_URL: &str = "https://api.gethealthie.com/graphql";

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    healthie_api_url: String,
    healthie_api_key: String,
    label_overrides_path: Option<PathBuf>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        healthie_api_url: String,
        healthie_api_key: String,
        label_overrides_path: Option<PathBuf>,
    ) -> ChartResult<Self> {
        if healthie_api_url.trim().is_empty() {
            return Err(ChartError::InvalidInput(
                "healthie_api_url cannot be empty".into(),
            ));
        }
        if healthie_api_key.trim().is_empty() {
            return Err(ChartError::InvalidInput(
                "healthie_api_key cannot be empty".into(),
            ));
        }

        Ok(Self {
            healthie_api_url,
            healthie_api_key,
            label_overrides_path,
        })
    }

    pub fn healthie_api_url(&self) -> &str {
        &self.healthie_api_url
    }

    pub fn healthie_api_key(&self) -> &str {
        &self.healthie_api_key
    }

    pub fn label_overrides_path(&self) -> Option<&Path> {
        self.label_overrides_path.as_deref()
    }

    /// Resolve the label table this deployment formats with.
    pub fn label_table(&self) -> ChartResult<LabelTable> {
        load_label_table(self.label_overrides_path())
    }

    /// Build the practice-management API client this configuration points
    /// at.
    pub fn healthie_client(&self) -> ChartResult<healthie::HealthieClient> {
        Ok(healthie::HealthieClient::new(
            &self.healthie_api_url,
            &self.healthie_api_key,
        )?)
    }
}

/// Load the curated label table, merging overrides from an optional YAML
/// file.
///
/// The file is a flat `token: label` string mapping. An override for a
/// token the built-in table already carries replaces the built-in label.
/// With no override file the built-in table is returned as-is.
pub fn load_label_table(override_path: Option<&Path>) -> ChartResult<LabelTable> {
    let table = LabelTable::builtin();

    let Some(path) = override_path else {
        return Ok(table);
    };

    let contents = std::fs::read_to_string(path).map_err(ChartError::LabelFileRead)?;
    let overrides: BTreeMap<String, String> =
        serde_yaml::from_str(&contents).map_err(ChartError::LabelFileParse)?;

    tracing::info!(
        count = overrides.len(),
        path = %path.display(),
        "loaded label overrides"
    );

    Ok(table.with_overrides(overrides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_rejects_empty_url() {
        let result = CoreConfig::new(String::new(), "key".into(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_rejects_empty_api_key() {
        let result = CoreConfig::new(DEFAULT_HEALTHIE_API_URL.into(), "  ".into(), None);
        assert!(result.is_err());
    }

    #[test]
    fn test_healthie_client_from_config() {
        let config =
            CoreConfig::new("https://api.example.com/graphql".into(), "key".into(), None).unwrap();
        assert!(config.healthie_client().is_ok());

        let config = CoreConfig::new("not a url".into(), "key".into(), None).unwrap();
        assert!(matches!(
            config.healthie_client(),
            Err(ChartError::Healthie(_))
        ));
    }

    #[test]
    fn test_builtin_table_without_overrides() {
        let table = load_label_table(None).unwrap();
        assert_eq!(table.get("morning_7_10_am"), Some("Morning (7-10am)"));
    }

    #[test]
    fn test_overrides_merge_over_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rice_dishes: Rice & Grain Dishes").unwrap();
        writeln!(file, "soup_dishes: Soups").unwrap();

        let table = load_label_table(Some(file.path())).unwrap();
        assert_eq!(table.get("rice_dishes"), Some("Rice & Grain Dishes"));
        assert_eq!(table.get("soup_dishes"), Some("Soups"));
        assert_eq!(table.get("drinks_other"), Some("Other Drinks"));
    }

    #[test]
    fn test_missing_override_file_is_an_error() {
        let result = load_label_table(Some(Path::new("/nonexistent/labels.yaml")));
        assert!(matches!(result, Err(ChartError::LabelFileRead(_))));
    }

    #[test]
    fn test_malformed_override_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- not\n- a\n- mapping").unwrap();

        let result = load_label_table(Some(file.path()));
        assert!(matches!(result, Err(ChartError::LabelFileParse(_))));
    }
}
