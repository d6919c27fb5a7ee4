use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown environment: {name}")]
    UnknownEnvironment { name: String },
}

impl ConfigError {
    pub(crate) fn unknown_environment(name: impl Into<String>) -> Self {
        Self::UnknownEnvironment { name: name.into() }
    }
}
