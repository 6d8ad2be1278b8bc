/// Configuration errors. Only raised at startup, and only when strict
/// secret validation is enabled.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {vars}")]
    MissingVars { vars: String },

    #[error("invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}
