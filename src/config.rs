//! Configuration management for the authorization helper.
//!
//! Client credentials and the redirect URI come from exactly one source,
//! picked by the deployment variant:
//! 1. A JSON file (`config.json` by default) with the keys `SPOTIFY_CLIENT_ID`,
//!    `SPOTIFY_CLIENT_SECRET` and `REDIRECT_URI`
//! 2. The process environment, optionally primed from `.env` files
//!
//! Loading never aborts the process. When the source cannot be read the
//! failure is logged and an empty configuration is returned; Spotify then
//! rejects the requests made with the missing credentials.

use std::{
    env, fmt, io,
    path::{Path, PathBuf},
};

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::Deserialize;

use crate::{info, types::Endpoints, warning};

pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:5000/callback";

pub const CLIENT_ID_KEY: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "SPOTIFY_CLIENT_SECRET";
pub const REDIRECT_URI_KEY: &str = "REDIRECT_URI";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Env,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "file {}", path.display()),
            ConfigSource::Env => write!(f, "environment"),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    SerdeError(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "{}", e),
            ConfigError::SerdeError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::SerdeError(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::IoError(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::SerdeError(err)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(rename = "SPOTIFY_CLIENT_ID")]
    client_id: Option<String>,
    #[serde(rename = "SPOTIFY_CLIENT_SECRET")]
    client_secret: Option<String>,
    #[serde(rename = "REDIRECT_URI")]
    redirect_uri: Option<String>,
}

/// Client identity and callback target registered with Spotify.
///
/// Immutable once loaded. Any field may be absent; callers substitute an
/// empty string where a value has to go on the wire.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .field("redirect_uri", &self.redirect_uri)
            .finish()
    }
}

impl Config {
    /// Parses the JSON config file format.
    ///
    /// Unknown keys (such as `SPOTIFY_REFRESH_TOKEN`) are ignored and a
    /// missing `REDIRECT_URI` falls back to [`DEFAULT_REDIRECT_URI`].
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(content)?;
        Ok(Self {
            client_id: file.client_id,
            client_secret: file.client_secret,
            redirect_uri: Some(
                file.redirect_uri
                    .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            ),
        })
    }

    /// Builds a config from a key lookup such as `std::env::var`.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Self {
            client_id: get(CLIENT_ID_KEY),
            client_secret: get(CLIENT_SECRET_KEY),
            redirect_uri: get(REDIRECT_URI_KEY),
        }
    }

    /// The config yielded when the JSON file cannot be loaded.
    pub fn file_fallback() -> Self {
        Self {
            redirect_uri: Some(DEFAULT_REDIRECT_URI.to_string()),
            ..Self::default()
        }
    }

    pub fn client_id(&self) -> &str {
        self.client_id.as_deref().unwrap_or_default()
    }

    pub fn client_secret(&self) -> &str {
        self.client_secret.as_deref().unwrap_or_default()
    }

    pub fn redirect_uri(&self) -> &str {
        self.redirect_uri.as_deref().unwrap_or_default()
    }

    /// Names of the keys that are not set.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push(CLIENT_ID_KEY);
        }
        if self.client_secret.is_none() {
            missing.push(CLIENT_SECRET_KEY);
        }
        if self.redirect_uri.is_none() {
            missing.push(REDIRECT_URI_KEY);
        }
        missing
    }

    /// Value for the `Authorization` header of the token request.
    ///
    /// HTTP Basic credentials: `base64(client_id:client_secret)`.
    pub fn basic_authorization(&self) -> String {
        let raw = format!("{}:{}", self.client_id(), self.client_secret());
        format!("Basic {}", STANDARD.encode(raw))
    }
}

/// Loads the configuration from `source`.
///
/// Never fails: problems are logged with [`warning!`] and the returned
/// config simply lacks the affected values.
pub async fn load(source: &ConfigSource) -> Config {
    match source {
        ConfigSource::File(path) => match load_file(path).await {
            Ok(config) => config,
            Err(e) => {
                warning!("Error loading config from {}: {}", path.display(), e);
                Config::file_fallback()
            }
        },
        ConfigSource::Env => load_env(),
    }
}

async fn load_file(path: &Path) -> Result<Config, ConfigError> {
    let content = async_fs::read_to_string(path).await?;
    Config::from_json_str(&content)
}

/// Reads the config from the environment after priming it from `.env` files.
///
/// The working directory is searched first, then the local data directory:
/// - Linux: `~/.local/share/spotauth/.env`
/// - macOS: `~/Library/Application Support/spotauth/.env`
/// - Windows: `%LOCALAPPDATA%/spotauth/.env`
///
/// Variables already present in the environment are never overwritten.
fn load_env() -> Config {
    if dotenv::dotenv().is_ok() {
        info!("Loaded .env from the working directory");
    }

    let path = env_file_path();
    if path.is_file() {
        prime_env_from(&path);
    }

    let config = Config::from_lookup(|key| env::var(key).ok());
    let missing = config.missing_keys();
    if !missing.is_empty() {
        warning!("Missing environment variables: {}", missing.join(", "));
    }
    config
}

/// Loads a `.env` file into the process environment.
///
/// Variables that are already set keep their value. Returns whether the
/// file was read.
pub fn prime_env_from(path: &Path) -> bool {
    match dotenv::from_path(path) {
        Ok(()) => true,
        Err(e) => {
            warning!("Cannot load {}: {}", path.display(), e);
            false
        }
    }
}

fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotauth/.env");
    path
}

/// Spotify endpoints, overridable through `SPOTIFY_API_AUTH_URL` and
/// `SPOTIFY_API_TOKEN_URL`.
pub fn endpoints() -> Endpoints {
    endpoints_from(|key| env::var(key).ok())
}

pub fn endpoints_from<F>(lookup: F) -> Endpoints
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = Endpoints::default();
    Endpoints {
        authorize_url: lookup("SPOTIFY_API_AUTH_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.authorize_url),
        token_url: lookup("SPOTIFY_API_TOKEN_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.token_url),
    }
}

/// Returns the address the server should bind to.
///
/// `SERVER_ADDRESS` wins over the variant default.
pub fn server_addr(default: &str) -> String {
    server_addr_from(|key| env::var(key).ok(), default)
}

pub fn server_addr_from<F>(lookup: F, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup("SERVER_ADDRESS")
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_secret() {
        let config = Config {
            client_id: Some("id".into()),
            client_secret: Some("hunter2".into()),
            redirect_uri: None,
        };
        let out = format!("{:?}", config);
        assert!(!out.contains("hunter2"));
        assert!(out.contains("<redacted>"));
    }

    #[test]
    fn basic_authorization_encodes_credentials() {
        let config = Config {
            client_id: Some("id".into()),
            client_secret: Some("secret".into()),
            redirect_uri: None,
        };
        // base64("id:secret")
        assert_eq!(config.basic_authorization(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn server_address_overrides_variant_default() {
        let addr = server_addr_from(
            |key| (key == "SERVER_ADDRESS").then(|| "127.0.0.1:8080".to_string()),
            "0.0.0.0:5000",
        );
        assert_eq!(addr, "127.0.0.1:8080");
    }

    #[test]
    fn server_address_falls_back_when_unset_or_empty() {
        assert_eq!(server_addr_from(|_| None, "localhost:5000"), "localhost:5000");
        assert_eq!(
            server_addr_from(|_| Some(String::new()), "localhost:5000"),
            "localhost:5000"
        );
    }

    #[test]
    fn endpoints_default_to_spotify() {
        let endpoints = endpoints_from(|_| None);
        assert_eq!(endpoints, Endpoints::default());
    }

    #[test]
    fn endpoints_accept_overrides() {
        let endpoints = endpoints_from(|key| match key {
            "SPOTIFY_API_TOKEN_URL" => Some("http://127.0.0.1:9/token".into()),
            _ => None,
        });
        assert_eq!(endpoints.token_url, "http://127.0.0.1:9/token");
        assert_eq!(endpoints.authorize_url, Endpoints::default().authorize_url);
    }
}
