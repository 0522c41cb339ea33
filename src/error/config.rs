use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required environment variable is not set or is empty.
    ///
    /// The bot requires this environment variable to be defined. Check the `.env`
    /// file next to the binary for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but its value cannot be used.
    #[error("Invalid value '{value}' for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// The offending value
        value: String,
        /// Why the value was rejected
        reason: String,
    },
}
