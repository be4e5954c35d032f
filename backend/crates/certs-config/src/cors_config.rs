use crate::{ANY_ORIGIN, ConfigError, ConfigErrorResult};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Either `["*"]` or a list of `http(s)://` origins
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![String::from(ANY_ORIGIN)],
        }
    }
}

impl CorsConfig {
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }

    /// Parse a comma separated origin list, dropping blanks
    pub fn parse_origins(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(ConfigError::cors("cors.allowed_origins must not be empty"));
        }

        for origin in &self.allowed_origins {
            let valid = origin == ANY_ORIGIN
                || origin.starts_with("http://")
                || origin.starts_with("https://");
            if !valid {
                return Err(ConfigError::cors(format!(
                    "cors.allowed_origins entry '{origin}' must be '*' or start with http:// or https://"
                )));
            }
        }

        Ok(())
    }
}
