//! Configuration loading from the process environment.

use crate::config::schema::RelayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// `PORT` was set but is not a valid port number.
    InvalidPort(String),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT '{}' is not a valid port number", value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Build the configuration from the environment, falling back to defaults.
///
/// `PORT` overrides the listening port; `WEBHOOK_URL` overrides the
/// downstream destination.
pub fn load_from_env() -> Result<RelayConfig, ConfigError> {
    let mut config = RelayConfig::default();

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    if let Ok(url) = std::env::var("WEBHOOK_URL") {
        config.webhook.url = url;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DEFAULT_WEBHOOK_URL;

    #[test]
    fn test_defaults() {
        let config = RelayConfig::default();
        assert_eq!(config.listener.bind_address, "0.0.0.0:5000");
        assert_eq!(config.webhook.url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.webhook.user_agent, "Campaign-UI");
    }

    #[test]
    fn test_port_env_override() {
        // Single test mutates PORT so parallel tests never race on it.
        std::env::set_var("PORT", "8099");
        let config = load_from_env().unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8099");

        std::env::set_var("PORT", "not-a-port");
        assert!(matches!(
            load_from_env(),
            Err(ConfigError::InvalidPort(_))
        ));

        std::env::remove_var("PORT");
    }
}
