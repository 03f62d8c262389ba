use crate::core::voucher_service::DEFAULT_MIN_AMOUNT;
use crate::core::ConfigProvider;
use crate::utils::error::{Result, VoucherError};
use crate::utils::validation::{validate_non_negative_amount, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./data/vouchers.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub service: ServiceSection,
    #[serde(default)]
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSection {
    #[serde(default = "default_min_amount")]
    pub min_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(default = "default_store_path")]
    pub path: String,
}

fn default_min_amount() -> f64 {
    DEFAULT_MIN_AMOUNT
}

fn default_store_path() -> String {
    DEFAULT_STORE_PATH.to_string()
}

impl Default for ServiceSection {
    fn default() -> Self {
        Self {
            min_amount: default_min_amount(),
        }
    }
}

impl Default for StorageSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

impl ServiceConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| VoucherError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a TOML string, substituting `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| VoucherError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unset variables are left as-is so the parse error names them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| VoucherError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_negative_amount("service.min_amount", self.service.min_amount)?;
        validate_path("storage.path", &self.storage.path)?;
        Ok(())
    }
}

impl ConfigProvider for ServiceConfig {
    fn min_amount(&self) -> f64 {
        self.service.min_amount
    }

    fn store_path(&self) -> &str {
        &self.storage.path
    }
}
