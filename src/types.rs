use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{Config, ConfigSource};

pub const SPOTIFY_AUTHORIZE_URL: &str = "https://accounts.spotify.com/authorize";
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

pub const EXTENDED_SCOPES: &[&str] = &[
    "user-read-private",
    "user-read-email",
    "user-modify-playback-state",
    "user-read-playback-state",
];

pub const BASIC_SCOPES: &[&str] = &["user-read-playback-state", "user-modify-playback-state"];

/// Deployment flavour of the server.
///
/// `Extended` reads `config.json`, answers the callback with JSON and asks
/// Spotify to always show the consent dialog. `Basic` reads the process
/// environment and answers with plain text or the raw token payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Extended,
    Basic,
}

impl Variant {
    /// Name as spelled on the command line (`--variant`).
    pub fn name(&self) -> String {
        self.to_possible_value()
            .map(|v| v.get_name().to_string())
            .unwrap_or_default()
    }

    pub fn scopes(&self) -> &'static [&'static str] {
        match self {
            Variant::Extended => EXTENDED_SCOPES,
            Variant::Basic => BASIC_SCOPES,
        }
    }

    pub fn default_bind(&self) -> &'static str {
        match self {
            Variant::Extended => "localhost:5000",
            Variant::Basic => "0.0.0.0:5000",
        }
    }

    pub fn default_source(&self) -> ConfigSource {
        match self {
            Variant::Extended => ConfigSource::File(PathBuf::from("config.json")),
            Variant::Basic => ConfigSource::Env,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub authorize_url: String,
    pub token_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            authorize_url: SPOTIFY_AUTHORIZE_URL.to_string(),
            token_url: SPOTIFY_TOKEN_URL.to_string(),
        }
    }
}

/// Everything a handler needs, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub variant: Variant,
    pub endpoints: Endpoints,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config, variant: Variant, endpoints: Endpoints) -> Self {
        Self {
            config,
            variant,
            endpoints,
            http: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Picks `code` and `error` out of the raw query pairs.
    ///
    /// The first occurrence of a repeated key wins; other keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "code" if params.code.is_none() => params.code = Some(value),
                "error" if params.error.is_none() => params.error = Some(value),
                _ => {}
            }
        }
        params
    }
}

/// Token payload returned by the accounts service.
///
/// Fields the service adds beyond the documented ones are kept in `extra`
/// so the payload is handed back to the operator unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackError {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeFailed {
    pub error: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authorized {
    pub message: String,
    pub refresh_token: Option<String>,
    pub note: String,
    pub full_response: TokenResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_repeated_value_wins() {
        let params = CallbackParams::from_pairs(pairs(&[
            ("error", "access_denied"),
            ("code", "abc123"),
            ("error", "other"),
            ("code", "zzz"),
        ]));
        assert_eq!(params.error.as_deref(), Some("access_denied"));
        assert_eq!(params.code.as_deref(), Some("abc123"));
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        let params = CallbackParams::from_pairs(pairs(&[("state", "xyz")]));
        assert_eq!(params, CallbackParams::default());
    }

    #[test]
    fn variant_names_match_cli_spelling() {
        assert_eq!(Variant::Extended.name(), "extended");
        assert_eq!(Variant::Basic.name(), "basic");
    }
}
