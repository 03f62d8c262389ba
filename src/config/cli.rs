use crate::config::toml_config::ServiceConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "voucher")]
#[command(about = "Create discount vouchers and apply them to purchases")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the voucher store file
    #[arg(long)]
    pub store: Option<String>,

    /// Override the minimum purchase amount
    #[arg(long)]
    pub min_amount: Option<f64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a new unused voucher
    Create { code: String, discount: u32 },
    /// Apply a voucher to a purchase amount
    Apply { code: String, amount: f64 },
    /// Show a stored voucher
    Show { code: String },
}

impl CliConfig {
    /// Loads the optional config file, applies flag overrides and validates the result.
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(store) = &self.store {
            config.storage.path = store.clone();
        }
        if let Some(min_amount) = self.min_amount {
            config.service.min_amount = min_amount;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;

    #[test]
    fn test_parse_apply_with_overrides() {
        let cli = CliConfig::try_parse_from([
            "voucher",
            "--store",
            "/tmp/v.json",
            "--min-amount",
            "10",
            "apply",
            "SAVE",
            "25.5",
        ])
        .unwrap();

        match &cli.command {
            Command::Apply { code, amount } => {
                assert_eq!(code, "SAVE");
                assert_eq!(*amount, 25.5);
            }
            other => panic!("unexpected command: {:?}", other),
        }

        let config = cli.resolve().unwrap();
        assert_eq!(config.store_path(), "/tmp/v.json");
        assert_eq!(config.min_amount(), 10.0);
    }

    #[test]
    fn test_resolve_rejects_bad_override() {
        let cli = CliConfig::try_parse_from(["voucher", "--store", "", "show", "X"]).unwrap();
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file_fails() {
        let cli = CliConfig::try_parse_from([
            "voucher",
            "--config",
            "/definitely/not/here.toml",
            "show",
            "X",
        ])
        .unwrap();
        assert!(cli.resolve().is_err());
    }
}
