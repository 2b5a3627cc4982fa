use std::fmt;

use reqwest::{Client, StatusCode, Url, header::AUTHORIZATION};

use crate::{
    Res,
    config::Config,
    types::{Endpoints, TokenResponse, Variant},
};

/// Builds the Spotify authorization URL the browser is redirected to.
///
/// The query always carries `client_id`, `response_type=code`, `redirect_uri`
/// and the space-joined `scope` list of the variant, in that order. The
/// extended variant also forces the consent dialog (`show_dialog=true`) and
/// asks for offline access so a refresh token is issued.
///
/// Values are form-encoded, so spaces in the scope list become `+`. Missing
/// configuration values are sent as empty strings and left for Spotify to
/// reject.
///
/// # Errors
///
/// Fails only when `endpoints.authorize_url` is not a valid URL.
///
/// # Example
///
/// ```
/// let url = authorize_url(&Endpoints::default(), &config, Variant::Basic)?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(endpoints: &Endpoints, config: &Config, variant: Variant) -> Res<Url> {
    let scope = variant.scopes().join(" ");

    let mut params: Vec<(&str, &str)> = vec![
        ("client_id", config.client_id()),
        ("response_type", "code"),
        ("redirect_uri", config.redirect_uri()),
        ("scope", &scope),
    ];

    if variant == Variant::Extended {
        params.push(("show_dialog", "true"));
        params.push(("access_type", "offline"));
    }

    Ok(Url::parse_with_params(&endpoints.authorize_url, &params)?)
}

#[derive(Debug)]
pub enum ExchangeError {
    /// The request could not be sent or the response could not be read.
    Request(reqwest::Error),
    /// Spotify answered with a 4xx or 5xx status.
    Rejected {
        status: StatusCode,
        body: String,
        source: reqwest::Error,
    },
    /// The response was successful but not a token payload.
    Decode(serde_json::Error),
}

impl ExchangeError {
    /// Short human readable reason: the HTTP reason phrase for rejected
    /// requests, the full error text otherwise.
    pub fn reason(&self) -> String {
        match self {
            ExchangeError::Rejected { status, .. } => status
                .canonical_reason()
                .unwrap_or(status.as_str())
                .to_string(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeError::Request(e) => write!(f, "{}", e),
            ExchangeError::Rejected { source, .. } => write!(f, "{}", source),
            ExchangeError::Decode(e) => write!(f, "Invalid token response: {}", e),
        }
    }
}

impl std::error::Error for ExchangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExchangeError::Request(e) => Some(e),
            ExchangeError::Rejected { source, .. } => Some(source),
            ExchangeError::Decode(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for ExchangeError {
    fn from(err: reqwest::Error) -> Self {
        ExchangeError::Request(err)
    }
}

impl From<serde_json::Error> for ExchangeError {
    fn from(err: serde_json::Error) -> Self {
        ExchangeError::Decode(err)
    }
}

/// Exchanges an authorization code for an access token.
///
/// Sends `grant_type=authorization_code` together with the code and the
/// configured redirect URI to the token endpoint, authenticated with the
/// client credentials as HTTP Basic auth. The redirect URI must be the same
/// one used for the authorize request or Spotify refuses the exchange.
///
/// There is no retry and no timeout beyond the client defaults. The code is
/// single-use, so a failed exchange needs a fresh pass through `/`.
///
/// # Returns
///
/// - `Ok(TokenResponse)` - the payload exactly as Spotify returned it
/// - `Err(ExchangeError)` - transport failure, non-2xx status, or a body that
///   is not a token payload
pub async fn exchange_code(
    client: &Client,
    endpoints: &Endpoints,
    config: &Config,
    code: &str,
) -> Result<TokenResponse, ExchangeError> {
    let res = client
        .post(&endpoints.token_url)
        .header(AUTHORIZATION, config.basic_authorization())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri()),
        ])
        .send()
        .await?;

    let status = res.status();
    if let Some(source) = res.error_for_status_ref().err() {
        let body = res.text().await.unwrap_or_default();
        return Err(ExchangeError::Rejected {
            status,
            body,
            source,
        });
    }

    let bytes = res.bytes().await?;
    let token: TokenResponse = serde_json::from_slice(&bytes)?;
    Ok(token)
}
