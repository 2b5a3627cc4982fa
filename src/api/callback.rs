use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    response::{IntoResponse, Response},
};

use crate::{
    spotify::auth::{ExchangeError, exchange_code},
    success,
    types::{
        AppState, Authorized, CallbackError, CallbackParams, ExchangeFailed, TokenResponse, Variant,
    },
    warning,
};

pub const NO_CODE_PROVIDED: &str = "No code provided";
pub const EXCHANGE_FAILED: &str = "Failed to get token";
pub const COPY_REFRESH_TOKEN: &str =
    "Authorization successful! Please add the following refresh_token to your config.json file:";
pub const REFRESH_TOKEN_NOTE: &str =
    "This refresh token will not expire unless you explicitly revoke access. Keep it secure!";

pub async fn callback(
    Query(pairs): Query<Vec<(String, String)>>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    let params = CallbackParams::from_pairs(pairs);
    if let Some(error) = params.error {
        warning!("Authorization was not granted: {}", error);
        return reject(state.variant, error);
    }

    let Some(code) = params.code else {
        return reject(state.variant, NO_CODE_PROVIDED.to_string());
    };

    let result = exchange_code(&state.http, &state.endpoints, &state.config, &code).await;
    if let Err(e) = &result {
        match e {
            ExchangeError::Rejected { status, body, .. } => {
                warning!("Token exchange rejected ({}): {}", status, body)
            }
            other => warning!("Token exchange failed: {}", other),
        }
    } else {
        success!("Token exchange completed");
    }

    match state.variant {
        Variant::Extended => extended_result(result),
        Variant::Basic => basic_result(result),
    }
}

fn reject(variant: Variant, error: String) -> Response {
    match variant {
        Variant::Extended => Json(CallbackError { error }).into_response(),
        Variant::Basic => error.into_response(),
    }
}

fn extended_result(result: Result<TokenResponse, ExchangeError>) -> Response {
    match result {
        Ok(token) => Json(Authorized {
            message: COPY_REFRESH_TOKEN.to_string(),
            refresh_token: token.refresh_token.clone(),
            note: REFRESH_TOKEN_NOTE.to_string(),
            full_response: token,
        })
        .into_response(),
        Err(e) => Json(ExchangeFailed {
            error: EXCHANGE_FAILED.to_string(),
            details: e.to_string(),
        })
        .into_response(),
    }
}

fn basic_result(result: Result<TokenResponse, ExchangeError>) -> Response {
    match result {
        Ok(token) => Json(token).into_response(),
        Err(e) => format!("{}: {}", EXCHANGE_FAILED, e.reason()).into_response(),
    }
}
