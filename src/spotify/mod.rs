//! # Spotify Accounts Module
//!
//! Client side of the Spotify accounts service as used by the authorization
//! code flow. Only the two accounts endpoints are involved:
//!
//! - `GET /authorize` - reached by the browser through [`auth::authorize_url`]
//! - `POST /api/token` - called server to server by [`auth::exchange_code`]
//!
//! ## Flow
//!
//! ```text
//! Browser ──GET /──▶ this server ──302──▶ accounts.spotify.com/authorize
//!                                              │ (login + consent)
//! Browser ◀────────────── 302 ?code=... ───────┘
//! Browser ──GET /callback?code=...──▶ this server ──POST /api/token──▶ Spotify
//!                                     ◀──────── token payload ─────────┘
//! ```
//!
//! The client secret travels only in the Basic `Authorization` header of the
//! token request. Nothing is persisted: the operator copies the refresh token
//! from the callback response.
//!
//! ## Error Types
//!
//! - [`auth::ExchangeError`] - transport failures, rejected exchanges and
//!   undecodable token payloads

pub mod auth;
