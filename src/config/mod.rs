use crate::core::sources::{hh, superjob};
use crate::domain::model::{city_ids, CityIds};
use crate::utils::error::{ReportError, Result};
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-report")]
#[command(about = "Vacancy counts and average salaries per programming language")]
pub struct CliConfig {
    /// City to scan. Only cities with known source area/town ids are accepted.
    #[arg(long, default_value = "Moscow")]
    pub city: String,

    /// SuperJob application key.
    #[arg(long, env = "SUPERJOB_SECRET_KEY", hide_env_values = true)]
    pub superjob_secret_key: String,

    #[arg(long, default_value = hh::DEFAULT_BASE_URL)]
    pub hh_base_url: String,

    #[arg(long, default_value = superjob::DEFAULT_BASE_URL)]
    pub superjob_base_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the configured city to its per-source location identifiers.
    pub fn city_ids(&self) -> Result<CityIds> {
        city_ids(&self.city).ok_or_else(|| ReportError::InvalidConfigValueError {
            field: "city".to_string(),
            value: self.city.clone(),
            reason: "no known area/town ids for this city".to_string(),
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("hh_base_url", &self.hh_base_url)?;
        validation::validate_url("superjob_base_url", &self.superjob_base_url)?;
        validation::validate_non_empty_string("superjob_secret_key", &self.superjob_secret_key)?;
        self.city_ids()?;
        Ok(())
    }
}
