pub mod cli;
pub mod settings;

use crate::core::matcher::{DEFAULT_MAX_SUGGESTIONS, DEFAULT_SIMILARITY_CUTOFF};
use crate::core::ConfigProvider;
use crate::utils::error::{PricerError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range, Validate,
};
use clap::Parser;
use settings::Settings;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Parser)]
#[command(name = "grocery-pricer")]
#[command(about = "Web form that totals a shopping list against a per-store price catalog")]
pub struct CliConfig {
    /// Path to the catalog CSV file (columns: store, item, price_per_unit, unit)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Address to listen on
    #[arg(long)]
    pub bind: Option<String>,

    /// Maximum number of suggestions for an unmatched item
    #[arg(long)]
    pub max_suggestions: Option<usize>,

    /// Similarity cutoff for fuzzy suggestions (0.0 - 1.0)
    #[arg(long)]
    pub cutoff: Option<f64>,

    /// Optional TOML settings file; command-line flags take precedence
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Log CPU/memory statistics
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// Merge flags with the optional settings file: flag wins over file,
    /// file wins over the built-in default. The catalog path has no default
    /// and must come from one of the two.
    pub fn resolve(self) -> Result<AppConfig> {
        let settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };

        let catalog_path = self
            .catalog
            .or_else(|| settings.catalog.as_ref().and_then(|c| c.path.clone()))
            .ok_or_else(|| PricerError::MissingConfigError {
                field: "catalog".to_string(),
            })?;

        let bind_addr = self
            .bind
            .or_else(|| settings.server.as_ref().and_then(|s| s.bind.clone()))
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_suggestions = self
            .max_suggestions
            .or_else(|| settings.matcher.as_ref().and_then(|m| m.max_suggestions))
            .unwrap_or(DEFAULT_MAX_SUGGESTIONS);

        let similarity_cutoff = self
            .cutoff
            .or_else(|| settings.matcher.as_ref().and_then(|m| m.cutoff))
            .unwrap_or(DEFAULT_SIMILARITY_CUTOFF);

        Ok(AppConfig {
            catalog_path,
            bind_addr,
            max_suggestions,
            similarity_cutoff,
            verbose: self.verbose,
            monitor: self.monitor,
        })
    }
}

/// Fully resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_path: String,
    pub bind_addr: String,
    pub max_suggestions: usize,
    pub similarity_cutoff: f64,
    pub verbose: bool,
    pub monitor: bool,
}

impl ConfigProvider for AppConfig {
    fn catalog_path(&self) -> &str {
        &self.catalog_path
    }

    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    fn similarity_cutoff(&self) -> f64 {
        self.similarity_cutoff
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("catalog", &self.catalog_path)?;
        validate_non_empty_string("bind", &self.bind_addr)?;
        validate_positive_number("max_suggestions", self.max_suggestions, 1)?;
        validate_range("cutoff", self.similarity_cutoff, 0.0, 1.0)?;
        Ok(())
    }
}
