//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `token` - Token secret, default max age and nonce length

pub mod environment;
pub mod token;

use serde::{Deserialize, Serialize};

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use token::TokenConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Token configuration
    pub token: TokenConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Create configuration for development environment
    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            token: TokenConfig::default(),
            logging: LoggingConfig::for_environment(Environment::Development),
        }
    }

    /// Load configuration from environment
    ///
    /// Reads the environment-specific `.env` file first, then `.env`, without
    /// overriding variables that are already set.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        dotenvy::from_filename(environment.env_file()).ok();
        dotenvy::dotenv().ok();

        Self {
            environment,
            token: TokenConfig::from_env(),
            logging: LoggingConfig::for_environment(environment).with_env_overrides(),
        }
    }

    /// Validate the configuration for its environment
    pub fn validate(&self) -> Result<(), String> {
        self.token.validate()?;
        if self.environment.is_production() && self.token.is_using_default_secret() {
            return Err(String::from(
                "TOKEN_SECRET must be set in production",
            ));
        }
        Ok(())
    }
}
