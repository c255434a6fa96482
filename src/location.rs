use crate::error::UrlError;

/// Read-only view of the browser's current location.
///
/// The resolver takes this as an injected capability instead of reaching for
/// `web_sys::window()` directly, so it can run in unit tests with a stub
/// location instead of a real browsing context.
pub trait LocationContext {
    /// Full URL of the current page.
    fn href(&self) -> Result<String, UrlError>;
    /// `scheme://host[:port]`, no path.
    fn origin(&self) -> Result<String, UrlError>;
    /// Path component, leading `/`.
    fn pathname(&self) -> Result<String, UrlError>;
    /// `hostname[:port]`, no scheme.
    fn host(&self) -> Result<String, UrlError>;
}

/// [`LocationContext`] backed by the real `window.location`.
pub struct BrowserLocation;

impl BrowserLocation {
    fn location() -> Result<web_sys::Location, UrlError> {
        web_sys::window()
            .map(|window| window.location())
            .ok_or(UrlError::NoBrowserContext("no global `window` exists"))
    }
}

impl LocationContext for BrowserLocation {
    fn href(&self) -> Result<String, UrlError> {
        Self::location()?
            .href()
            .map_err(|_| UrlError::NoBrowserContext("location.href unavailable"))
    }

    fn origin(&self) -> Result<String, UrlError> {
        Self::location()?
            .origin()
            .map_err(|_| UrlError::NoBrowserContext("location.origin unavailable"))
    }

    fn pathname(&self) -> Result<String, UrlError> {
        Self::location()?
            .pathname()
            .map_err(|_| UrlError::NoBrowserContext("location.pathname unavailable"))
    }

    fn host(&self) -> Result<String, UrlError> {
        Self::location()?
            .host()
            .map_err(|_| UrlError::NoBrowserContext("location.host unavailable"))
    }
}
