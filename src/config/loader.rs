//! Configuration loader with environment variable support

use super::Config;
use crate::error::{AdminError, Result};
use config::{Environment, File};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Load configuration from a TOML file with environment variable overrides
pub fn load_config_with_env<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config = config::Config::builder()
        .add_source(File::from(path.as_ref()))
        .add_source(
            Environment::with_prefix("QDRANT_ADMIN")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Validate configuration values
fn validate_config(config: &Config) -> Result<()> {
    if config.qdrant.url.is_empty() {
        return Err(AdminError::Config(
            "Qdrant URL is required".to_string(),
        ));
    }

    if config.qdrant.timeout_secs == 0 {
        return Err(AdminError::Config(
            "Qdrant timeout must be greater than 0".to_string(),
        ));
    }

    if config.app.name.is_empty() {
        return Err(AdminError::Config(
            "Application name must not be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_empty_url() {
        let mut config = Config::default();
        config.qdrant.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.qdrant.timeout_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("qdrant_admin_loader_test.toml");
        std::fs::write(
            &path,
            r#"
[server]
port = 9090

[qdrant]
url = "http://qdrant.internal:6334"
timeout_secs = 5

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.qdrant.url, "http://qdrant.internal:6334");
        assert_eq!(config.qdrant.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        // Sections absent from the file fall back to defaults
        assert_eq!(config.app.name, "Qdrant Admin API");
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.qdrant.url, "http://localhost:6334");
        assert_eq!(config.qdrant.connection_string(), "http://localhost:6334");
        assert!(config.qdrant.api_key.is_none());
        assert!(!config.app.debug);
    }
}
