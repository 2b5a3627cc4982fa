use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use tokio::net::TcpListener;

use crate::{
    config::{self, ConfigSource},
    error, info,
    server,
    spotify::auth::authorize_url,
    types::{AppState, Variant},
    warning,
};

#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub variant: Variant,
    pub config: Option<PathBuf>,
    pub bind: Option<String>,
    pub open: bool,
}

/// Runs the authorization server until the process is stopped.
///
/// An explicit `--config` path always selects the JSON file source, otherwise
/// the variant decides. Only an unusable authorize endpoint or a failed bind
/// stop startup; missing credentials are reported and the server runs anyway.
pub async fn serve(opts: ServeOptions) {
    let source = match opts.config {
        Some(path) => ConfigSource::File(path),
        None => opts.variant.default_source(),
    };

    info!("Loading configuration from {}", source);
    let config = config::load(&source).await;
    info!("Redirect URI configured as: {}", config.redirect_uri());
    info!("Client ID: {}", config.client_id());

    let endpoints = config::endpoints();
    if let Err(e) = authorize_url(&endpoints, &config, opts.variant) {
        error!(
            "Invalid authorization endpoint {}: {}",
            endpoints.authorize_url, e
        );
    }

    let addr = opts
        .bind
        .unwrap_or_else(|| config::server_addr(opts.variant.default_bind()));

    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => error!("Failed to bind {}: {}", addr, e),
    };

    let local = match listener.local_addr() {
        Ok(local) => local,
        Err(e) => error!("Failed to read bound address: {}", e),
    };
    let url = browse_url(local);
    info!("Open {} to start the authorization flow", url);

    if opts.open && webbrowser::open(&url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            url
        )
    }

    let state = Arc::new(AppState::new(config, opts.variant, endpoints));
    if let Err(e) = server::serve(listener, state).await {
        error!("Server stopped: {}", e);
    }
}

/// URL a local browser can reach the root route on.
fn browse_url(addr: SocketAddr) -> String {
    if addr.ip().is_unspecified() {
        format!("http://localhost:{}/", addr.port())
    } else {
        format!("http://{}/", addr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unspecified_address_is_browsed_as_localhost() {
        let addr: SocketAddr = "0.0.0.0:5000".parse().unwrap();
        assert_eq!(browse_url(addr), "http://localhost:5000/");
    }

    #[test]
    fn concrete_address_is_kept() {
        let addr: SocketAddr = "127.0.0.1:5000".parse().unwrap();
        assert_eq!(browse_url(addr), "http://127.0.0.1:5000/");
    }
}
