use std::sync::Arc;

use axum::{
    Extension,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{spotify::auth::authorize_url, types::AppState, warning};

/// Sends the browser to the Spotify consent page with a `302 Found`.
///
/// The target depends only on the startup state, so repeated requests get
/// the same `Location`.
pub async fn authorize(Extension(state): Extension<Arc<AppState>>) -> Response {
    match authorize_url(&state.endpoints, &state.config, state.variant) {
        Ok(url) => (StatusCode::FOUND, [(LOCATION, url.to_string())]).into_response(),
        Err(e) => {
            warning!("Cannot build authorization URL: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Invalid authorization endpoint",
            )
                .into_response()
        }
    }
}
