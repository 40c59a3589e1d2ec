use thiserror::Error;

/// Errors raised while loading or selecting theme configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("token bundle \"{name}\" is invalid: {source}")]
    InvalidBundle {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("theme settings are invalid: {0}")]
    InvalidSettings(#[source] serde_json::Error),

    #[error("unknown brand \"{0}\"")]
    UnknownBrand(String),

    #[error("unknown appearance \"{0}\"")]
    UnknownAppearance(String),
}
