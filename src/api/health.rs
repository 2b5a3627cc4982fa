use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};

use crate::types::AppState;

/// Reports liveness plus which config keys are missing.
///
/// Secrets are never echoed, only the names of the missing keys.
pub async fn health(Extension(state): Extension<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "variant": state.variant.name(),
        "missing_config": state.config.missing_keys(),
    }))
}
