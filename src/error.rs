use wasm_bindgen::JsValue;

/// Errors raised while reading the browsing context or deriving URLs from it.
///
/// Missing configuration and a missing `/dev-ui` marker are *not* errors –
/// those are ordinary fallback branches in [`crate::UrlResolver`].
#[derive(Debug)]
pub enum UrlError {
    /// The current location could not be parsed as a well-formed URL. Not
    /// expected inside a real browser; propagated as-is, no fallback.
    MalformedUrl(url::ParseError),
    /// No global `window` (or one of its `Location` getters failed). Only
    /// reachable through [`crate::BrowserLocation`].
    NoBrowserContext(&'static str),
}

impl std::fmt::Display for UrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlError::MalformedUrl(err) => write!(f, "malformed location URL: {}", err),
            UrlError::NoBrowserContext(what) => write!(f, "no browsing context: {}", what),
        }
    }
}

impl std::error::Error for UrlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UrlError::MalformedUrl(err) => Some(err),
            UrlError::NoBrowserContext(_) => None,
        }
    }
}

impl From<url::ParseError> for UrlError {
    fn from(err: url::ParseError) -> Self {
        UrlError::MalformedUrl(err)
    }
}

impl From<UrlError> for JsValue {
    fn from(err: UrlError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
