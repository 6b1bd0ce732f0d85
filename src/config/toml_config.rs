use crate::adapters::graph::{GraphCalendarClient, DEFAULT_GRAPH_BASE_URL};
use crate::adapters::token::StaticTokenProvider;
use crate::utils::error::{CostError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Runtime settings for the panel binding. Rate and threshold are not configurable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_lookup_size_with_id")]
    pub lookup_size_with_id: usize,
    #[serde(default = "default_lookup_size_upcoming")]
    pub lookup_size_upcoming: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    DEFAULT_GRAPH_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_lookup_size_with_id() -> usize {
    50
}

fn default_lookup_size_upcoming() -> usize {
    10
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout_seconds(),
            lookup_size_with_id: default_lookup_size_with_id(),
            lookup_size_upcoming: default_lookup_size_upcoming(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CostError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CostError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CostError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_url("graph.base_url", &self.graph.base_url)?;
        validate_range("graph.timeout_seconds", self.graph.timeout_seconds, 1, 300)?;
        validate_range("graph.lookup_size_with_id", self.graph.lookup_size_with_id, 1, 1000)?;
        validate_range(
            "graph.lookup_size_upcoming",
            self.graph.lookup_size_upcoming,
            1,
            1000,
        )?;
        if let Some(token) = &self.auth.token {
            validate_non_empty_string("auth.token", token)?;
        }
        Ok(())
    }

    pub fn calendar_client(&self) -> Result<GraphCalendarClient> {
        Ok(GraphCalendarClient::with_timeout(
            self.graph.base_url.clone(),
            Duration::from_secs(self.graph.timeout_seconds),
        )?
        .lookup_sizes(
            self.graph.lookup_size_with_id,
            self.graph.lookup_size_upcoming,
        ))
    }

    /// JSON logs when either the file or the command line asks for them.
    pub fn json_logs(&self, cli_flag: bool) -> bool {
        cli_flag || self.logging.json
    }

    /// Token from the file, falling back to the environment.
    pub fn token_provider(&self) -> Result<StaticTokenProvider> {
        match &self.auth.token {
            Some(token) => Ok(StaticTokenProvider::new(token.clone())),
            None => StaticTokenProvider::from_env(),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
