mod bootstrap_settings;
mod config_spec;
mod env_provider;
mod errors;
mod logging;

pub use bootstrap_settings::{BootstrapSettings, UserStoreKind};
pub use config_spec::{ConfigSpec, ConfigValue, ConfigValueSource};
pub use env_provider::{EnvironmentProvider, SystemEnvironment};
#[cfg(test)]
pub use env_provider::MockEnvironment;
pub use errors::ApplicationError;
pub use logging::{LoggingConfig, LoggingError, init_logging, init_logging_with};
