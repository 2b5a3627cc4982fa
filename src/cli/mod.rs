//! # CLI Module
//!
//! Command-line entry points. `main.rs` parses the arguments with clap and
//! hands them to the functions here, which drive the rest of the crate and
//! report progress with the logging macros.
//!
//! ## Commands
//!
//! - [`serve`] - Loads the configuration and runs the authorization server
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotauth                                  # extended variant, ./config.json, localhost:5000
//! spotauth serve --variant basic            # credentials from the environment, 0.0.0.0:5000
//! spotauth serve --config ~/spotify.json --open
//! spotauth completions zsh
//! ```

mod serve;

pub use serve::ServeOptions;
pub use serve::serve;
