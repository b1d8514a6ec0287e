use crate::utils::error::{PricerError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional TOML settings file. Every field is optional; anything missing
/// falls back to the command-line flag or the built-in default.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub server: Option<ServerSettings>,
    pub catalog: Option<CatalogSettings>,
    pub matcher: Option<MatcherSettings>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatcherSettings {
    pub max_suggestions: Option<usize>,
    pub cutoff: Option<f64>,
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PricerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| PricerError::ConfigValidationError {
            field: "settings".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

/// Replace `${VAR_NAME}` references with the environment value; unset
/// variables are left verbatim.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
