//! # API Module
//!
//! HTTP handlers for the authorization code flow.
//!
//! ## Endpoints
//!
//! - [`authorize`] - `GET /`, redirects the browser to the Spotify consent page
//! - [`callback`] - `GET /callback`, exchanges the returned code for a token and
//!   shows the result to the operator
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! Handlers receive the startup state as `Extension<Arc<AppState>>`. The state
//! is never mutated, so requests are independent of each other.
//!
//! ## Security Considerations
//!
//! - The callback does not generate or verify an OAuth `state` parameter and
//!   therefore cannot tell a forged redirect from a real one
//! - The token response, refresh token included, is returned to whoever calls
//!   `/callback`; run the server only where the operator is the caller
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spotauth::api::{authorize, callback};
//!
//! let app = Router::new()
//!     .route("/", get(authorize))
//!     .route("/callback", get(callback))
//!     .layer(Extension(state));
//! ```

mod authorize;
mod callback;
mod health;

pub use authorize::authorize;
pub use callback::{
    COPY_REFRESH_TOKEN, EXCHANGE_FAILED, NO_CODE_PROVIDED, REFRESH_TOKEN_NOTE, callback,
};
pub use health::health;
