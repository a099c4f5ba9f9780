use thiserror::Error;

/// Broad category of an API failure
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The server answered with a non-2xx status
    #[error("HTTP error")]
    Status,
    /// The transport gave up waiting for a response
    #[error("request timed out")]
    Timeout,
    /// No connection could be established
    #[error("connection failed")]
    Connect,
    /// The body was not the JSON shape we expected
    #[error("invalid response body")]
    Decode,
    /// Anything else the transport reported
    #[error("transport error")]
    Transport,
}

/// Structured error for every call made against the portfolio API.
///
/// `detail` holds whatever the server or transport said. It is meant for the
/// log, never for the person using the chat.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}{}: {detail}", status_suffix(.status))]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: Option<u16>,
    pub detail: String,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            status: None,
            detail: detail.into(),
        }
    }

    /// Non-2xx response
    pub fn status(code: u16, detail: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            status: Some(code),
            detail: detail.into(),
        }
    }

    pub fn timeout(detail: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Timeout, detail)
    }

    pub fn is_timeout(&self) -> bool {
        self.kind == ApiErrorKind::Timeout
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" {}", code)).unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ApiErrorKind::Timeout
        } else if err.is_connect() {
            ApiErrorKind::Connect
        } else if err.is_decode() {
            ApiErrorKind::Decode
        } else if err.is_status() {
            ApiErrorKind::Status
        } else {
            ApiErrorKind::Transport
        };

        Self {
            kind,
            status: err.status().map(|s| s.as_u16()),
            detail: err.to_string(),
        }
    }
}
