//! Environment resolution.
//!
//! A [`ConfigMap`] holds one [`EnvironmentConfig`] per environment name;
//! [`resolve_environment`] selects one entry by exact name at construction
//! time and fails fast when the name is absent.

mod error;
mod types;

pub use error::ConfigError;
pub use types::{ConfigMap, EnvironmentConfig, RuleFlags};

/// Exact, case-sensitive lookup. No normalization, no fallback.
pub fn resolve_environment<'a>(
    name: &str,
    config: &'a ConfigMap,
) -> Result<&'a EnvironmentConfig, ConfigError> {
    config
        .get(name)
        .ok_or_else(|| ConfigError::unknown_environment(name))
}
