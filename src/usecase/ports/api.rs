use std::fmt;

use futures_util::future::BoxFuture;
use serde_json::Value;

/// Which envelope an endpoint wraps its payload in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeKind {
    /// `{ "data": { ... } }`
    Data,
    /// `{ "chart": { "labels": [...], "series": [...] } }`
    Chart,
    /// `{ "metrics": { ... }, "meta": { ... } }`, taken as a whole.
    Metrics,
}

/// Static description of one backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchDescriptor {
    pub path: &'static str,
    pub envelope: EnvelopeKind,
    /// Parameters sent when the filter selection does not set them.
    pub defaults: &'static [(&'static str, &'static str)],
}

#[derive(Debug)]
pub enum FetchError {
    Transport(String),
    Status(u16),
    Decode(String),
    Shape(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(message) => write!(f, "request failed: {message}"),
            FetchError::Status(code) => write!(f, "HTTP {code}"),
            FetchError::Decode(message) => write!(f, "invalid response body: {message}"),
            FetchError::Shape(message) => write!(f, "unexpected response shape: {message}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Read-only access to the registry backend.
pub trait RegistryApi: Send + Sync {
    fn get_json<'a>(
        &'a self,
        path: &'a str,
        query: &'a [(String, String)],
    ) -> BoxFuture<'a, Result<Value, FetchError>>;
}
