use crate::utils::error::{MinPopVoteError, Result};
use crate::utils::validation::{validate_election_year, validate_path, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional settings file. Every section and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub election: ElectionSection,
    pub search: SearchSection,
    pub dataset: DatasetSection,
    pub output: OutputSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectionSection {
    pub year: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    pub fast: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub output_dir: Option<String>,
    pub json: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MinPopVoteError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MinPopVoteError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MinPopVoteError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(year) = self.election.year {
            validate_election_year("election.year", year)?;
        }
        if let Some(data_dir) = &self.dataset.data_dir {
            validate_path("dataset.data_dir", data_dir)?;
        }
        if let Some(output_dir) = &self.output.output_dir {
            validate_path("output.output_dir", output_dir)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[election]
year = 1960

[search]
fast = true

[dataset]
data_dir = "./elections"

[output]
output_dir = "./results"
json = true

[logging]
quiet = true
"#,
        )
        .unwrap();

        assert_eq!(config.election.year, Some(1960));
        assert_eq!(config.search.fast, Some(true));
        assert_eq!(config.dataset.data_dir.as_deref(), Some("./elections"));
        assert_eq!(config.output.output_dir.as_deref(), Some("./results"));
        assert_eq!(config.output.json, Some(true));
        assert_eq!(config.logging.quiet, Some(true));
        assert_eq!(config.logging.verbose, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.election.year.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MIN_POP_VOTE_TEST_DATA_DIR", "/srv/elections");
        let config = TomlConfig::from_toml_str(
            r#"
[dataset]
data_dir = "${MIN_POP_VOTE_TEST_DATA_DIR}"
"#,
        )
        .unwrap();
        assert_eq!(config.dataset.data_dir.as_deref(), Some("/srv/elections"));
    }

    #[test]
    fn test_rejects_non_election_year() {
        let config = TomlConfig::from_toml_str("[election]\nyear = 1830\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = TomlConfig::from_toml_str("[election\nyear = 1960").unwrap_err();
        assert!(matches!(err, MinPopVoteError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[election]\nyear = 2000\n[search]\nfast = true").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();

        assert_eq!(config.election.year, Some(2000));
        assert_eq!(config.search.fast, Some(true));
    }
}
