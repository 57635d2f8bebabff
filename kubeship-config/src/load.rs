use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::environment::{Environment, EnvironmentError};

/// Directory containing configuration files relative to the application root.
const CONFIGURATION_DIR: &str = "configuration";

/// Base configuration file loaded for all environments.
const BASE_CONFIG_FILE: &str = "base.yaml";

/// Prefix for environment variable configuration overrides.
const ENV_PREFIX: &str = "APP";

/// Separator between environment variable prefix and key segments.
const ENV_PREFIX_SEPARATOR: &str = "_";

/// Separator for nested configuration keys in environment variables.
///
/// Example: `APP_CLUSTER__NAMESPACE` sets the `cluster.namespace` field.
const ENV_SEPARATOR: &str = "__";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// The current directory could not be determined.
    #[error("failed to determine the current directory: {0}")]
    CurrentDir(#[from] std::io::Error),

    /// The `APP_ENVIRONMENT` variable holds an unsupported value.
    #[error(transparent)]
    Environment(#[from] EnvironmentError),

    /// A configuration source is missing, unparseable, or does not match the
    /// target type.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

/// Loads hierarchical configuration from YAML files and environment variables.
///
/// Sources are layered in this order, later ones overriding earlier ones:
/// 1. Base configuration from `configuration/base.yaml`
/// 2. Environment-specific file from `configuration/{environment}.yaml`
/// 3. Environment variable overrides prefixed with `APP`, where double
///    underscores separate nested keys (`APP_WORKLOAD__REPLICAS` sets
///    `workload.replicas`)
pub fn load_config<T>() -> Result<T, ConfigLoadError>
where
    T: DeserializeOwned,
{
    let base_path = std::env::current_dir()?;
    let configuration_directory = base_path.join(CONFIGURATION_DIR);

    // Detect the running environment, defaulting to `prod` if unspecified.
    let environment = Environment::load()?;
    let environment_filename = format!("{environment}.yaml");

    let environment_source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_PREFIX_SEPARATOR)
        .separator(ENV_SEPARATOR);

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join(BASE_CONFIG_FILE),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(environment_source)
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
