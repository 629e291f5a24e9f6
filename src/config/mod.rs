//! Configuration management module
//!
//! Handles loading, saving, and validation of the prototype's settings:
//! the UI tick rate, the log level and the loan defaults and limits.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{LoanLimits, LoanState};
use crate::util::units::parse_duration;
use crate::{QuickLoanError, Result, APP_NAME, CONFIG_FILE};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Terminal redraw/input poll period, humantime format ("100ms")
    pub tick_rate: String,
    /// Default tracing filter level
    pub log_level: String,
    /// Loan the session starts with
    pub loan: LoanState,
    /// Slider bounds for the loan configuration screen
    pub limits: LoanLimits,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate: "100ms".to_string(),
            log_level: "info".to_string(),
            loan: LoanState::default(),
            limits: LoanLimits::default(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed tick rate
    pub fn tick_rate(&self) -> Result<Duration> {
        parse_duration(&self.tick_rate).map_err(QuickLoanError::ConfigError)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        let tick_rate = self.tick_rate()?;
        if tick_rate.is_zero() {
            return Err(QuickLoanError::ConfigError(
                "Tick rate must be greater than 0".to_string(),
            ));
        }

        const MAX_TICK_RATE: Duration = Duration::from_secs(1);
        if tick_rate > MAX_TICK_RATE {
            return Err(QuickLoanError::ConfigError(format!(
                "Tick rate too slow: {:?} (max: {:?})",
                tick_rate, MAX_TICK_RATE
            )));
        }

        let loan = &self.loan;
        let limits = &self.limits;

        if limits.amount_step == 0 || limits.tenure_step == 0 {
            return Err(QuickLoanError::ConfigError(
                "Slider steps must be greater than 0".to_string(),
            ));
        }

        if limits.min_amount >= loan.max_amount {
            return Err(QuickLoanError::ConfigError(format!(
                "Minimum amount {} must be below maximum amount {}",
                limits.min_amount, loan.max_amount
            )));
        }

        if limits.min_tenure == 0 || limits.min_tenure >= limits.max_tenure {
            return Err(QuickLoanError::ConfigError(format!(
                "Tenure range {}..={} is invalid",
                limits.min_tenure, limits.max_tenure
            )));
        }

        if loan.amount < limits.min_amount || loan.amount > loan.max_amount {
            return Err(QuickLoanError::ConfigError(format!(
                "Default amount {} outside {}..={}",
                loan.amount, limits.min_amount, loan.max_amount
            )));
        }

        if loan.tenure < limits.min_tenure || loan.tenure > limits.max_tenure {
            return Err(QuickLoanError::ConfigError(format!(
                "Default tenure {} outside {}..={}",
                loan.tenure, limits.min_tenure, limits.max_tenure
            )));
        }

        if !(loan.interest_rate > 0.0) {
            return Err(QuickLoanError::ConfigError(
                "Interest rate must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    /// Returns default configuration if file doesn't exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            QuickLoanError::ConfigError(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuickLoanError::ConfigError(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        // Validate the loaded configuration
        config.validate()?;

        tracing::info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Validate before saving
        self.validate()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                QuickLoanError::ConfigError(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(config_path, content).map_err(|e| {
            QuickLoanError::ConfigError(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quickloan/quickloan.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuickLoanError::ConfigError("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
