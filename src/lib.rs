//! Spotify Authorization Code Helper Library
//!
//! This library implements the server half of the Spotify OAuth 2.0 authorization
//! code flow. A browser is sent to the Spotify consent page, the callback code is
//! exchanged for an access/refresh token pair and the result is shown to the
//! operator, who copies the refresh token wherever it is needed.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the authorize redirect and the callback
//! - `cli` - Command-line entry points
//! - `config` - Configuration loading from a JSON file or the environment
//! - `server` - Router construction and the listening server
//! - `spotify` - Spotify accounts service client (authorize URL, token exchange)
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use spotauth::{config, types::Variant};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = config::load(&Variant::Extended.default_source()).await;
//!     println!("{:?}", config);
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod server;
pub mod spotify;
pub mod types;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern throughout the application
/// using a boxed dynamic error trait object. This allows for flexible
/// error handling while maintaining Send + Sync bounds for async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Redirect URI configured as: {}", redirect_uri);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Token exchange completed");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup errors where recovery is not possible. The
/// process terminates with exit code 1 right after printing.
///
/// # Example
///
/// ```
/// error!("Failed to bind server address: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues: a missing config file, a rejected token
/// exchange, a browser that could not be opened.
///
/// # Example
///
/// ```
/// warning!("Error loading config: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
