use thiserror::Error;

/// Errors raised by the theme store, its storage adapters and configuration.
///
/// Most store operations never surface these to callers: initialization and
/// persistence failures are logged and the store keeps its current state.
/// They are returned from the operations that explicitly talk to storage or
/// load configuration.
///
/// # Examples
///
/// ```no_run
/// use themekit::error::{ThemeError, ThemeResult};
///
/// fn describe(result: ThemeResult<()>) {
///     match result {
///         Ok(()) => println!("done"),
///         Err(ThemeError::Storage(msg)) => eprintln!("storage unavailable: {msg}"),
///         Err(other) => eprintln!("{other}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A storage adapter failed to read, write or remove an item.
    #[error("Storage Error: {0}")]
    Storage(String),

    /// A persisted payload could not be encoded or decoded.
    #[error("Parse Error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// The store was used outside of a Tokio runtime.
    #[error("Runtime Error: {0}")]
    Runtime(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    /// Output could not be rendered as TOML.
    #[error("Format Error: {0}")]
    Format(#[from] toml::ser::Error),
}

/// Result type alias for theme operations
pub type ThemeResult<T> = Result<T, ThemeError>;
