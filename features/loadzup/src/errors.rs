use std::{collections::HashMap, fmt::Display, sync::Arc};

use injexit::{DynError, TypeInfo};
use thiserror::Error;

use crate::uri::AssetUri;

/// Errors produced while fetching an asset
#[derive(Error, Debug, Clone)]
pub enum FetchError {
    /// The transport reported a failure
    #[error("Request failed: {0}")]
    Http(#[from] HttpError),
    /// Nothing is known under that identifier
    #[error("No asset found at '{uri}'")]
    NotFound { uri: AssetUri },
    /// The fetch completed without producing any asset
    #[error("Loading '{uri}' produced no asset")]
    Empty { uri: AssetUri },
    /// The asset exists but is not of the requested type
    #[error("Asset at '{uri}' is a '{actual}', expected '{expected}'")]
    TypeMismatch {
        uri: AssetUri,
        expected: TypeInfo,
        actual: &'static str,
    },
    #[error("{0}")]
    Other(Arc<DynError>),
}
impl FetchError {
    pub fn other(error: impl Into<DynError>) -> Self {
        Self::Other(Arc::new(error.into()))
    }

    /// The response status, when the failure came with one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http(http) => http.status(),
            _ => None,
        }
    }
}

/// A failed transport request
///
/// Transports usually only report a raw message like `404 Not Found`;
/// the status is parsed from its leading number when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpError {
    raw_message: String,
    status: Option<u16>,
    text: Option<String>,
    headers: HashMap<String, String>,
}

impl HttpError {
    /// From the raw error message of a transport and whatever response it received
    pub fn from_raw(
        raw_message: impl Into<String>,
        text: Option<String>,
        headers: HashMap<String, String>,
    ) -> Self {
        let raw_message = raw_message.into();
        let status = raw_message
            .split([' ', ':'])
            .next()
            .and_then(|code| code.parse().ok());

        HttpError {
            raw_message,
            status,
            text,
            headers,
        }
    }

    pub fn from_status(status: u16) -> Self {
        HttpError {
            raw_message: status.to_string(),
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn raw_message(&self) -> &str {
        &self.raw_message
    }

    pub fn status(&self) -> Option<u16> {
        self.status
    }

    /// Whether a response was received at all, as opposed to e.g. a connection failure
    pub fn has_response(&self) -> bool {
        self.status.is_some()
    }

    /// The response body, if any
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "{} {}", self.raw_message, text),
            None => f.write_str(&self.raw_message),
        }
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_parsed_from_raw_message() {
        let error = HttpError::from_raw(
            "404 Not Found",
            Some("missing".to_string()),
            HashMap::from([("Server".to_string(), "cdn".to_string())]),
        );

        assert_eq!(error.status(), Some(404));
        assert!(error.has_response());
        assert_eq!(error.text(), Some("missing"));
        assert_eq!(error.headers()["Server"], "cdn");
        assert_eq!(error.to_string(), "404 Not Found missing");
    }

    #[test]
    fn connection_failures_have_no_status() {
        let error = HttpError::from_raw("Cannot resolve destination host", None, HashMap::new());

        assert_eq!(error.status(), None);
        assert!(!error.has_response());
        assert_eq!(FetchError::from(error).status(), None);
    }
}
