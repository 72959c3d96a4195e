use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file not found: '{path}'.")]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {0}.")]
    ConfigParseError(#[from] serde_json::Error),

    /// A step required a configuration-sourced option list that is absent or empty.
    #[error("Configuration does not provide a usable '{key}' list.")]
    ConfigKeyMissing { key: &'static str },

    #[error("Failed to serialize answer record: {0}.")]
    SerializeError(serde_json::Error),

    #[error("Prompt interaction failed: {0}.")]
    PromptError(#[from] dialoguer::Error),

    /// Represents validation failures in user input
    #[error("Invalid input: {0}.")]
    InvalidInput(String),
}

/// Convenience type alias for Results with the wizard error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
