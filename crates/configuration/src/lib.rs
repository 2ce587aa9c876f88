use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, DataSettings, DisplaySettings, ScreenerDefaults};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates it, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.display.leaderboard_limit == 0 {
        return Err(ConfigError::ValidationError(
            "display.leaderboard_limit must be at least 1".to_string(),
        ));
    }
    if config.display.max_comparison == 0 {
        return Err(ConfigError::ValidationError(
            "display.max_comparison must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{DataSettings, DisplaySettings, ScreenerDefaults};

    fn config(leaderboard_limit: usize, max_comparison: usize) -> Config {
        Config {
            data: DataSettings {
                snapshot_path: "data/countries.json".to_string(),
            },
            display: DisplaySettings {
                leaderboard_limit,
                precision: 1,
                max_comparison,
            },
            screener: ScreenerDefaults::default(),
        }
    }

    #[test]
    fn well_formed_config_validates() {
        assert!(validate(&config(5, 5)).is_ok());
    }

    #[test]
    fn zero_leaderboard_limit_is_rejected() {
        assert!(matches!(
            validate(&config(0, 5)),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn zero_comparison_cap_is_rejected() {
        assert!(validate(&config(5, 0)).is_err());
    }
}
