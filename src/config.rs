use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error for {field}: {value} - {source}")]
    Parse {
        field: String,
        value: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

/// Translator configuration with validation
#[derive(Clone, Debug, PartialEq, Validate, Serialize, Deserialize)]
#[serde(default)]
#[validate(schema(function = "validate_distinct_pagination_arguments"))]
pub struct TranslatorConfig {
    /// Deepest selection nesting accepted, counting the root field as 1
    #[validate(range(
        min = 1,
        max = 256,
        message = "Max selection depth must be between 1 and 256"
    ))]
    pub max_selection_depth: usize,

    /// Argument name read as the page size (`LIMIT` / slice length)
    #[validate(custom(function = "validate_argument_name"))]
    pub first_argument: String,

    /// Argument name read as the page start (`SKIP` / slice start)
    #[validate(custom(function = "validate_argument_name"))]
    pub offset_argument: String,

    /// Whether undeclared arguments matching a scalar field of the target type filter on it
    pub implicit_field_filters: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_selection_depth: 32,
            first_argument: "first".to_string(),
            offset_argument: "offset".to_string(),
            implicit_field_filters: true,
        }
    }
}

impl TranslatorConfig {
    /// Create configuration from environment variables with validation
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            max_selection_depth: parse_env_var("GQL_CYPHER_MAX_DEPTH", "32")?,
            first_argument: env::var("GQL_CYPHER_FIRST_ARG")
                .unwrap_or_else(|_| "first".to_string()),
            offset_argument: env::var("GQL_CYPHER_OFFSET_ARG")
                .unwrap_or_else(|_| "offset".to_string()),
            implicit_field_filters: parse_env_var("GQL_CYPHER_IMPLICIT_FILTERS", "true")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from CLI arguments with validation.
    /// Options not given on the command line keep their defaults.
    pub fn from_cli(cli: CliConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.merge(cli);

        config.validate()?;
        Ok(config)
    }

    /// Create configuration from YAML file. Missing keys take their defaults.
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
            field: "yaml_file".to_string(),
            value: "file read failed".to_string(),
            source: Box::new(e),
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::Parse {
            field: "yaml_content".to_string(),
            value: content,
            source: Box::new(e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge command line overrides (CLI overrides file or environment)
    pub fn merge(&mut self, cli: CliConfig) {
        if let Some(depth) = cli.max_selection_depth {
            self.max_selection_depth = depth;
        }
        if let Some(first) = cli.first_argument {
            self.first_argument = first;
        }
        if let Some(offset) = cli.offset_argument {
            self.offset_argument = offset;
        }
        if let Some(implicit) = cli.implicit_field_filters {
            self.implicit_field_filters = implicit;
        }
    }

    pub fn is_pagination_argument(&self, name: &str) -> bool {
        name == self.first_argument || name == self.offset_argument
    }
}

/// CLI configuration (parsed from command line arguments)
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub max_selection_depth: Option<usize>,
    pub first_argument: Option<String>,
    pub offset_argument: Option<String>,
    pub implicit_field_filters: Option<bool>,
}

/// Parse an environment variable with a default value
fn parse_env_var<T: std::str::FromStr>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = env::var(key).unwrap_or_else(|_| default.to_string());
    value.parse().map_err(|e| ConfigError::Parse {
        field: key.to_string(),
        value,
        source: Box::new(e),
    })
}

/// Pagination arguments must be usable as GraphQL argument names.
fn validate_argument_name(name: &str) -> Result<(), ValidationError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        let mut err = ValidationError::new("argument_name");
        err.message = Some(format!("`{}` is not a valid GraphQL argument name", name).into());
        Err(err)
    }
}

fn validate_distinct_pagination_arguments(
    config: &TranslatorConfig,
) -> Result<(), ValidationError> {
    if config.first_argument == config.offset_argument {
        let mut err = ValidationError::new("pagination_arguments");
        err.message = Some("first and offset argument names must differ".into());
        return Err(err);
    }
    Ok(())
}
