use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::{Res, api, info, types::AppState};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
}

/// Serves the flow on an already bound listener until the process is stopped.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Res<()> {
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
