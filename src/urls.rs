//! Derivation of backend and WebSocket addresses from the current location.
//!
//! The dev-ui may be served behind a path-prefixing reverse proxy (e.g.
//! Traefik routing `/users/user111/dev-ui/` per user), so the API base
//! cannot be assumed to equal the page origin.

use url::Url;

use crate::config::RuntimeConfig;
use crate::constants::{DEV_UI_BASE_SUFFIX, DEV_UI_PATH};
use crate::error::UrlError;
use crate::location::LocationContext;

/// Stateless resolver over an injected location provider and an optional
/// runtime configuration. Every call re-reads the provider; nothing is
/// cached between calls.
pub struct UrlResolver<'a, L: LocationContext> {
    location: &'a L,
    config: Option<&'a RuntimeConfig>,
}

impl<'a, L: LocationContext> UrlResolver<'a, L> {
    pub fn new(location: &'a L, config: Option<&'a RuntimeConfig>) -> Self {
        Self { location, config }
    }

    /// Origin of the current page plus the dev-ui mount point, e.g.
    /// `https://example.com:8443/dev-ui/`.
    ///
    /// Fails with [`UrlError::MalformedUrl`] when the current href cannot be
    /// parsed; not expected inside a real browser.
    pub fn base_url_without_path(&self) -> Result<String, UrlError> {
        let href = self.location.href()?;
        let parsed = Url::parse(&href)?;
        Ok(format!(
            "{}{}",
            parsed.origin().ascii_serialization(),
            DEV_UI_BASE_SUFFIX
        ))
    }

    /// Base URL of the API server.
    ///
    /// Priority: an explicitly configured backend URL (returned verbatim,
    /// no validation), then origin plus any reverse-proxy path prefix found
    /// in front of `/dev-ui` in the current pathname, then the bare origin.
    /// No trailing-slash guarantee.
    pub fn api_server_base_url(&self) -> Result<String, UrlError> {
        if let Some(backend) = self.config.and_then(|config| config.backend_url()) {
            return Ok(backend.to_string());
        }

        let origin = self.location.origin()?;
        let pathname = self.location.pathname()?;
        match pathname.find(DEV_UI_PATH) {
            // Mounted under a per-user prefix such as `/users/user111`.
            Some(index) if index > 0 => Ok(format!("{}{}", origin, &pathname[..index])),
            _ => Ok(origin),
        }
    }

    /// Scheme-less address for the WebSocket endpoint; the caller prepends
    /// `ws://` or `wss://` itself.
    pub fn ws_server_url(&self) -> Result<String, UrlError> {
        let url = self.api_server_base_url()?;
        if url.is_empty() {
            // No backend at all: connect to whoever served the page.
            return self.location.host();
        }

        if let Some(rest) = url.strip_prefix("http://") {
            Ok(rest.to_string())
        } else if let Some(rest) = url.strip_prefix("https://") {
            Ok(rest.to_string())
        } else {
            Ok(url)
        }
    }
}
